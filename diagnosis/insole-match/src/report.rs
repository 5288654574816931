//! Report assembly and the renderer boundary.

use chrono::NaiveDate;
use serde::Serialize;
use sole_types::{ArchClass, Bunion, LegShape, PatternId};

use crate::descriptions;

/// Report title line.
pub const REPORT_TITLE: &str = "足型AI診断結果";

/// One description block of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    /// Block heading, e.g. `[アーチ説明]`.
    pub heading: &'static str,
    /// Block body text.
    pub body: &'static str,
}

/// An assembled diagnosis report.
///
/// Immutable once assembled; the lifecycle is construct once, render once,
/// discard. The displayed arch label is always the raw classifier label —
/// the bunion override exists only inside the pattern resolver.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use insole_match::{assemble, resolve};
/// use sole_types::{ArchClass, Bunion, LegShape};
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let pattern = resolve(ArchClass::Flat, LegShape::OShaped, Bunion::Absent);
/// let report = assemble(ArchClass::Flat, LegShape::OShaped, Bunion::Absent, pattern, date);
///
/// assert_eq!(report.pattern.get(), 1);
/// assert_eq!(report.sections().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Diagnosis date.
    pub date: NaiveDate,
    /// Classified arch label.
    pub arch: ArchClass,
    /// Declared leg shape.
    pub leg: LegShape,
    /// Declared bunion flag.
    pub bunion: Bunion,
    /// Resolved recommendation identifier.
    pub pattern: PatternId,
    /// Arch explanatory passage.
    pub arch_text: &'static str,
    /// Leg explanatory passage.
    pub leg_text: &'static str,
    /// Bunion passage, present iff the bunion flag is set.
    pub bunion_text: Option<&'static str>,
}

impl Report {
    /// Returns the fixed header lines in display order: date, arch label,
    /// leg shape, bunion flag, pattern identifier.
    #[must_use]
    pub fn header_lines(&self) -> [String; 5] {
        [
            format!("診断日: {}", self.date),
            format!("AI診断アーチ分類：{}", self.arch),
            format!("脚の形状：{}", self.leg),
            format!("外反母趾：{}", self.bunion),
            format!("分類パターンID：{} / {}", self.pattern, PatternId::COUNT),
        ]
    }

    /// Returns the description blocks in display order.
    ///
    /// The bunion block is present iff the bunion flag is set; an absent
    /// block contributes nothing, never an empty heading.
    #[must_use]
    pub fn sections(&self) -> Vec<ReportSection> {
        let mut sections = vec![
            ReportSection {
                heading: "[アーチ説明]",
                body: self.arch_text,
            },
            ReportSection {
                heading: "[脚型説明]",
                body: self.leg_text,
            },
        ];

        if let Some(body) = self.bunion_text {
            sections.push(ReportSection {
                heading: "[外反母趾説明]",
                body,
            });
        }

        sections
    }

    /// Renders the report as plain text for terminal display.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(REPORT_TITLE);
        out.push('\n');
        out.push('\n');

        for line in self.header_lines() {
            out.push_str(&line);
            out.push('\n');
        }

        for section in self.sections() {
            out.push('\n');
            out.push_str(section.heading);
            out.push('\n');
            out.push_str(section.body);
            out.push('\n');
        }

        out
    }
}

/// Assembles a report from a classified arch label, the declared
/// attributes, the resolved pattern, and the diagnosis date.
///
/// Never fails: description lookup degrades to empty content, and all
/// other inputs are already validated vocabulary values. The date is an
/// explicit parameter so assembly stays free of ambient clock state.
#[must_use]
pub fn assemble(
    arch: ArchClass,
    leg: LegShape,
    bunion: Bunion,
    pattern: PatternId,
    date: NaiveDate,
) -> Report {
    Report {
        date,
        arch,
        leg,
        bunion,
        pattern,
        arch_text: descriptions::arch_description(arch),
        leg_text: descriptions::leg_description(leg),
        bunion_text: bunion.is_present().then(descriptions::bunion_description),
    }
}

/// A rendered downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Document bytes.
    pub bytes: Vec<u8>,
    /// Suggested file name for the download.
    pub file_name: String,
}

/// Serializes an assembled report into a downloadable document.
///
/// Implementations own their document format and font configuration; the
/// assembler knows nothing about rendering.
pub trait ReportRenderer {
    /// Renderer failure type.
    type Error;

    /// Renders one report.
    ///
    /// # Errors
    ///
    /// Implementation-defined; a failed render never invalidates the
    /// assembled report.
    fn render(&self, report: &Report) -> Result<RenderedDocument, Self::Error>;
}
