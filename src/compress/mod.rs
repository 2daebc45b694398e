pub mod budget;

use std::path::Path;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::extract::{self, ExtractError};
use crate::normalize;
use crate::summarize;
use crate::types::{CompressionMode, CompressionReport, Condensed};

pub use budget::{plan, ApproxTokenEstimator, BudgetPlan, TokenEstimator};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_tokens must be positive")]
    ZeroMaxTokens,
    #[error("compression_ratio {0} out of range (0, 1]")]
    RatioOutOfRange(f64),
}

/// Knobs for a compression run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorConfig {
    /// Hard ceiling that gates whether summarization runs.
    pub max_tokens: usize,
    /// Target fraction of tokens to retain when summarization is needed.
    pub compression_ratio: f64,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            max_tokens: 100_000,
            compression_ratio: 0.5,
        }
    }
}

impl CompressorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tokens == 0 {
            return Err(ConfigError::ZeroMaxTokens);
        }
        if !(self.compression_ratio > 0.0 && self.compression_ratio <= 1.0) {
            return Err(ConfigError::RatioOutOfRange(self.compression_ratio));
        }
        Ok(())
    }
}

/// Orchestrates the whole pipeline: token estimation, the budget gate, and
/// the reduction path.
///
/// Single-threaded and synchronous; every entity created during a run is
/// discarded when it returns. There is no cross-call state or cache, so a
/// caller wanting a timeout must wrap the call externally.
pub struct Compressor<E = ApproxTokenEstimator> {
    config: CompressorConfig,
    estimator: E,
}

impl Default for Compressor<ApproxTokenEstimator> {
    fn default() -> Self {
        Self {
            config: CompressorConfig::default(),
            estimator: ApproxTokenEstimator,
        }
    }
}

impl<E> Compressor<E>
where
    E: TokenEstimator,
{
    pub fn new(config: CompressorConfig, estimator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, estimator })
    }

    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Compress already-extracted document text.
    ///
    /// This is the core boundary: input is a single string, output is the
    /// (possibly summarized) string plus the size metrics. An empty input
    /// propagates through as empty output, not an error.
    pub fn compress_text(&self, text: &str, mode: CompressionMode) -> Condensed {
        let original_tokens = self.estimator.estimate(text);

        let output = match mode {
            CompressionMode::Extractive => self.extractive(text, original_tokens),
            CompressionMode::Heuristic => self.heuristic(text),
        };

        let final_tokens = self.estimator.estimate(&output);

        Condensed {
            text: output,
            report: CompressionReport {
                mode,
                original_tokens,
                final_tokens,
                created_at: Utc::now(),
            },
        }
    }

    /// Extract a PDF's text and compress it.
    pub fn compress_pdf(&self, path: &Path, mode: CompressionMode) -> Result<Condensed, ExtractError> {
        let text = extract::pdf_text(path)?;
        Ok(self.compress_text(&text, mode))
    }

    /// Extractive path: normalize, then summarize only when the estimate
    /// exceeds the ceiling.
    fn extractive(&self, text: &str, original_tokens: usize) -> String {
        // 1. Normalize
        let collapsed = normalize::collapse_whitespace(text);
        let normalized = normalize::collapse_char_runs(&collapsed);

        // 2. Budget gate
        match budget::plan(original_tokens, &self.config) {
            BudgetPlan::PassThrough => {
                debug!(original_tokens, "within budget, passing through");
                normalized
            }
            BudgetPlan::Summarize {
                target_tokens,
                retention_ratio,
            } => {
                info!(
                    original_tokens,
                    target_tokens,
                    keep_percent = retention_ratio * 100.0,
                    "applying extractive summarization"
                );
                summarize::extractive_summary(&normalized, retention_ratio)
            }
        }
    }

    /// Heuristic path: page-number strip, line dedup, cleanup,
    /// abbreviations, then character truncation if the text still exceeds
    /// the ceiling.
    fn heuristic(&self, text: &str) -> String {
        let stripped = normalize::strip_page_number_lines(text);
        let deduped = normalize::dedup_lines(&stripped);
        let cleaned = normalize::clean_text(&deduped);
        let abbreviated = normalize::apply_abbreviations(&cleaned);

        if self.estimator.estimate(&abbreviated) > self.config.max_tokens {
            // max_chars ties back to the 4-chars-per-token approximation
            let max_chars = self.config.max_tokens.saturating_mul(4);
            info!(max_chars, "still over budget, truncating");
            truncate_chars(&abbreviated, max_chars)
        } else {
            abbreviated
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
