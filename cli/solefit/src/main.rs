//! solefit - foot-sole arch diagnosis and insole recommendation.
//!
//! # Commands
//!
//! - `solefit diagnose --image sole.jpg --leg o --bunion absent` -
//!   classify a sole photograph and print the diagnosis report
//! - `solefit diagnose ... --pdf report.pdf --font ipaexg.ttf` -
//!   additionally write the report as a PDF (the font must cover CJK)
//! - `solefit fetch-model --url <url>` - fetch the classifier checkpoint
//!   if it is not already present
//!
//! The classifier is loaded once per invocation and reused; an unloadable
//! checkpoint aborts the run, while an undecodable image only fails the
//! current request.

mod fetch;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use arch_model::{preprocess, ArchNetClassifier, ArchNetConfig};
use burn_ndarray::{NdArray, NdArrayDevice};
use chrono::Local;
use clap::{Parser, Subcommand};
use insole_match::{diagnose, DiagnosisRequest, ReportRenderer};
use report_pdf::{FontConfig, PdfRenderer};
use sole_types::{Bunion, LegShape};
use tracing_subscriber::EnvFilter;

/// CPU inference backend.
type InferenceBackend = NdArray<f32>;

/// Foot-sole arch diagnosis and insole recommendation.
#[derive(Parser)]
#[command(name = "solefit")]
#[command(about = "Foot-sole arch diagnosis and insole recommendation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diagnose one sole photograph and print the report
    Diagnose {
        /// Sole photograph (JPEG or PNG)
        #[arg(long)]
        image: PathBuf,

        /// Leg shape: o, x, or normal (O脚 / X脚 / 正常)
        #[arg(long)]
        leg: LegShape,

        /// Bunion: present or absent (あり / なし)
        #[arg(long)]
        bunion: Bunion,

        /// Classifier checkpoint (.bin or .json)
        #[arg(long, default_value = "models/arch_classifier.bin")]
        model: PathBuf,

        /// Write the report as a PDF to this path
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// CJK-capable TTF font for PDF output (e.g. IPAexGothic)
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Fetch the classifier checkpoint if it is not already present
    FetchModel {
        /// Source URL
        #[arg(long)]
        url: String,

        /// Destination path
        #[arg(long, default_value = "models/arch_classifier.bin")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Diagnose {
            image,
            leg,
            bunion,
            model,
            pdf,
            font,
        } => run_diagnose(&image, leg, bunion, &model, pdf, font),
        Commands::FetchModel { url, out } => {
            fetch::ensure_model(&out, &url)?;
            Ok(())
        }
    }
}

fn run_diagnose(
    image: &Path,
    leg: LegShape,
    bunion: Bunion,
    model: &Path,
    pdf: Option<PathBuf>,
    font: Option<PathBuf>,
) -> Result<()> {
    let device = NdArrayDevice::default();
    let classifier = ArchNetClassifier::<InferenceBackend>::from_checkpoint(
        ArchNetConfig::default(),
        model,
        &device,
    )
    .context("failed to load the arch classifier")?;

    let scan = preprocess::scan_from_path(image)
        .with_context(|| format!("failed to read sole image {}", image.display()))?;

    let request = DiagnosisRequest {
        leg,
        bunion,
        date: Local::now().date_naive(),
    };
    let diagnosis = diagnose(&classifier, &scan, &request).context("classification failed")?;

    tracing::info!(
        arch = %diagnosis.report.arch,
        confidence = diagnosis.prediction.confidence(),
        pattern = %diagnosis.pattern,
        "diagnosis complete"
    );

    println!("{}", diagnosis.report.to_plain_text());
    println!(
        "このタイプにおすすめのインソール：インソール{}番をお試しください",
        diagnosis.pattern
    );

    if let Some(pdf_path) = pdf {
        let font =
            font.ok_or_else(|| anyhow!("--font is required for PDF output (CJK-capable TTF)"))?;
        let renderer = PdfRenderer::new(FontConfig::new(font));
        let document = renderer
            .render(&diagnosis.report)
            .context("failed to render the report PDF")?;

        if let Some(parent) = pdf_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(&pdf_path, &document.bytes)
            .with_context(|| format!("failed to write {}", pdf_path.display()))?;

        println!(
            "PDFを保存しました: {}（推奨ファイル名: {}）",
            pdf_path.display(),
            document.file_name
        );
    }

    Ok(())
}
