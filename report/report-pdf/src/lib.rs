//! PDF rendering for diagnosis reports.
//!
//! Serializes an assembled [`Report`](insole_match::Report) into a
//! downloadable A4 document through the
//! [`ReportRenderer`](insole_match::ReportRenderer) boundary.
//!
//! # The font hazard
//!
//! The report body is Japanese. PDF viewers fall back to Latin-only
//! built-in fonts when no font is embedded, which corrupts or drops every
//! CJK character — so this crate refuses to render without a
//! deployment-supplied TTF with CJK coverage (the reference deployment
//! ships IPAexGothic). The font path is configuration
//! ([`FontConfig`]), never a hardcoded constant.
//!
//! # Testing
//!
//! Rendering requires a real font file, so the end-to-end test is
//! `#[ignore]`-gated and reads the `SOLEFIT_REPORT_FONT` environment
//! variable:
//!
//! ```bash
//! SOLEFIT_REPORT_FONT=/usr/share/fonts/ipaexg.ttf \
//!     cargo test -p report-pdf -- --ignored
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod font;
mod render;
mod wrap;

pub use error::{RenderError, Result};
pub use font::FontConfig;
pub use render::{suggested_file_name, PdfRenderer};
pub use wrap::{wrap_paragraph, LINE_BUDGET};
