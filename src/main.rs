//! Local driver: scores a submission archive and prints the report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use voc_eval::config::{load_config_from_file, EvalConfig};
use voc_eval::evaluator::evaluate_with_config;

const DEFAULT_ANNOTATIONS: &str = "annotations/test_phase_annotations.zip";
const DEFAULT_SUBMISSION: &str = "annotations/test_phase_submission.zip";

#[derive(Parser, Debug)]
#[command(name = "voc-eval")]
#[command(about = "Score a VOC detection submission at IoU 0.95 and print the JSON report")]
struct Cli {
    /// Ground truth ZIP archive [default: <cwd>/annotations/test_phase_annotations.zip]
    #[arg(long, value_name = "ZIP")]
    annotations: Option<PathBuf>,

    /// Submission ZIP archive [default: <cwd>/annotations/test_phase_submission.zip]
    #[arg(long, value_name = "ZIP")]
    submission: Option<PathBuf>,

    /// Phase label used as the key of the result entry
    #[arg(long, default_value = "test")]
    phase: String,

    /// JSON file with evaluation settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the IoU threshold
    #[arg(long, value_name = "THRESHOLD")]
    iou_threshold: Option<f64>,

    /// Log per-image details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let annotations = cli.annotations.unwrap_or_else(|| cwd.join(DEFAULT_ANNOTATIONS));
    let submission = cli.submission.unwrap_or_else(|| cwd.join(DEFAULT_SUBMISSION));

    let mut config = match &cli.config {
        Some(path) => load_config_from_file(path)
            .with_context(|| format!("cannot load settings from {}", path.display()))?,
        None => EvalConfig::default(),
    };
    if let Some(threshold) = cli.iou_threshold {
        config.iou_threshold = threshold;
    }

    tracing::info!("Ground truth: {}", annotations.display());
    tracing::info!("Submission: {}", submission.display());

    let report = evaluate_with_config(&annotations, &submission, &cli.phase, config);
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
