//! Integration tests for report-pdf.
//!
//! Tests marked with `#[ignore]` require a CJK-capable TTF font and should
//! be run with:
//! ```bash
//! SOLEFIT_REPORT_FONT=/path/to/ipaexg.ttf cargo test -p report-pdf -- --ignored
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use insole_match::{assemble, resolve, ReportRenderer};
use report_pdf::{suggested_file_name, FontConfig, PdfRenderer, RenderError};
use sole_types::{ArchClass, Bunion, LegShape};

fn report_with_bunion() -> insole_match::Report {
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let pattern = resolve(ArchClass::High, LegShape::Normal, Bunion::Present);
    assemble(
        ArchClass::High,
        LegShape::Normal,
        Bunion::Present,
        pattern,
        date,
    )
}

#[test]
fn unavailable_font_is_reported() {
    let renderer = PdfRenderer::new(FontConfig::new("/nonexistent/font.ttf"));
    let result = renderer.render(&report_with_bunion());
    assert!(matches!(result, Err(RenderError::FontUnavailable { .. })));
}

#[test]
#[ignore = "requires a CJK TTF via SOLEFIT_REPORT_FONT"]
fn renders_full_report_with_real_font() {
    let font_path =
        std::env::var("SOLEFIT_REPORT_FONT").expect("SOLEFIT_REPORT_FONT must point to a TTF");
    let renderer = PdfRenderer::new(FontConfig::new(font_path));

    let report = report_with_bunion();
    let document = renderer.render(&report).expect("render failed");

    assert!(!document.bytes.is_empty());
    assert!(document.bytes.starts_with(b"%PDF"));
    assert_eq!(document.file_name, suggested_file_name(report.date));

    // The artifact must be writable as a downloadable file.
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join(&document.file_name);
    std::fs::write(&out, &document.bytes).expect("write failed");
    assert!(out.exists());
}
