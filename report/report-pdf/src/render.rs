//! PDF rendering of assembled reports.

use chrono::NaiveDate;
use insole_match::{Report, ReportRenderer, RenderedDocument, REPORT_TITLE};
use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::error::{RenderError, Result};
use crate::font::FontConfig;
use crate::wrap::{wrap_paragraph, LINE_BUDGET};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const TOP_MM: f32 = PAGE_HEIGHT_MM - MARGIN_MM;
const TITLE_INDENT_MM: f32 = 70.0;

const TITLE_SIZE: f32 = 16.0;
const HEADER_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.5;

const HEADER_STEP_MM: f32 = 8.0;
const BODY_STEP_MM: f32 = 6.0;
const SECTION_GAP_MM: f32 = 4.0;

/// Suggests a download file name for a report rendered on `date`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use report_pdf::suggested_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(suggested_file_name(date), "diagnosis_20250601.pdf");
/// ```
#[must_use]
pub fn suggested_file_name(date: NaiveDate) -> String {
    format!("diagnosis_{}.pdf", date.format("%Y%m%d"))
}

/// Writing position on the current page, breaking to a fresh page when a
/// line would fall below the bottom margin.
struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn ensure_room(&mut self, doc: &PdfDocumentReference, step: f32) {
        if self.y - step < MARGIN_MM {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            self.layer = doc.get_page(page).get_layer(layer);
            self.y = TOP_MM;
        }
    }

    fn line(
        &mut self,
        doc: &PdfDocumentReference,
        text: &str,
        size: f32,
        step: f32,
        x: f32,
        font: &IndirectFontRef,
    ) {
        self.ensure_room(doc, step);
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
        self.y -= step;
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }
}

/// Renders reports as A4 PDF documents with an embedded TTF font.
///
/// The font comes from the deployment's [`FontConfig`] and must cover the
/// CJK range; see the crate docs for the hazard this avoids.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    font: FontConfig,
}

impl PdfRenderer {
    /// Creates a renderer with the given font configuration.
    #[must_use]
    pub const fn new(font: FontConfig) -> Self {
        Self { font }
    }
}

impl ReportRenderer for PdfRenderer {
    type Error = RenderError;

    fn render(&self, report: &Report) -> Result<RenderedDocument> {
        let font_file = self.font.open()?;

        let (doc, page, layer) = PdfDocument::new(
            REPORT_TITLE,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "report",
        );
        let font = doc
            .add_external_font(font_file)
            .map_err(|e| RenderError::pdf(e.to_string()))?;

        let mut cursor = Cursor {
            layer: doc.get_page(page).get_layer(layer),
            y: TOP_MM,
        };

        cursor.line(
            &doc,
            REPORT_TITLE,
            TITLE_SIZE,
            HEADER_STEP_MM,
            TITLE_INDENT_MM,
            &font,
        );
        cursor.gap(SECTION_GAP_MM);

        for header in report.header_lines() {
            cursor.line(&doc, &header, HEADER_SIZE, HEADER_STEP_MM, MARGIN_MM, &font);
        }

        for section in report.sections() {
            cursor.gap(SECTION_GAP_MM);
            cursor.line(
                &doc,
                section.heading,
                HEADER_SIZE,
                HEADER_STEP_MM,
                MARGIN_MM,
                &font,
            );
            for body_line in wrap_paragraph(section.body, LINE_BUDGET) {
                cursor.line(&doc, &body_line, BODY_SIZE, BODY_STEP_MM, MARGIN_MM, &font);
            }
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::pdf(e.to_string()))?;
        let file_name = suggested_file_name(report.date);

        tracing::debug!(bytes = bytes.len(), %file_name, "rendered report PDF");
        Ok(RenderedDocument { bytes, file_name })
    }
}
