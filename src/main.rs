use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pdf_condense::compress::{ApproxTokenEstimator, Compressor, CompressorConfig};
use pdf_condense::types::CompressionMode;

/// Condense a PDF's text to fit within a token budget
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the PDF file
    pdf: PathBuf,

    /// Where to write the condensed text (default: <stem>_condensed.txt)
    output: Option<PathBuf>,

    /// Token ceiling that gates whether summarization runs
    #[arg(long, default_value_t = 100_000)]
    max_tokens: usize,

    /// Target fraction of tokens to retain when summarizing
    #[arg(long, default_value_t = 0.5)]
    compression_ratio: f64,

    /// Reduction strategy
    #[arg(long, value_enum, default_value = "extractive")]
    mode: Mode,

    /// Also write the run metrics as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Sentence-level extractive summarization
    Extractive,
    /// Line dedup, abbreviations, character truncation
    Heuristic,
}

impl From<Mode> for CompressionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Extractive => CompressionMode::Extractive,
            Mode::Heuristic => CompressionMode::Heuristic,
        }
    }
}

fn default_output(pdf: &Path) -> PathBuf {
    let stem = pdf
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    PathBuf::from(format!("{stem}_condensed.txt"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CompressorConfig {
        max_tokens: cli.max_tokens,
        compression_ratio: cli.compression_ratio,
    };
    let compressor = Compressor::new(config, ApproxTokenEstimator)
        .context("invalid compressor configuration")?;

    println!("Extracting text from {}...", cli.pdf.display());
    let condensed = compressor
        .compress_pdf(&cli.pdf, cli.mode.into())
        .with_context(|| format!("failed to compress {}", cli.pdf.display()))?;

    let report = &condensed.report;
    println!("Original: ~{} tokens", report.original_tokens);
    println!(
        "Final: ~{} tokens ({:.1}% of original)",
        report.final_tokens,
        report.retention_percent()
    );

    let output = cli.output.unwrap_or_else(|| default_output(&cli.pdf));
    fs::write(&output, &condensed.text)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Saved to {}", output.display());

    if let Some(report_path) = cli.report {
        let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
        fs::write(&report_path, json)
            .with_context(|| format!("failed to write {}", report_path.display()))?;
        println!("Report saved to {}", report_path.display());
    }

    Ok(())
}
