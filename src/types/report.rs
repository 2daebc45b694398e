use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which reduction path produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMode {
    /// Sentence-level extractive summarization.
    Extractive,
    /// Line dedup, abbreviation table, character truncation.
    Heuristic,
}

/// Metadata describing the outcome of a compression run.
///
/// Token figures are estimates (1 token ≈ 4 characters). The nominal budget
/// is applied once against sentence-count proportion, so the final figure
/// can land above or below the target; nothing re-checks the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionReport {
    pub mode: CompressionMode,

    /// Estimated token count of the raw input text.
    pub original_tokens: usize,
    /// Estimated token count of the output text.
    pub final_tokens: usize,

    pub created_at: DateTime<Utc>, // informational only
}

impl CompressionReport {
    /// Share of the original kept, as a percentage.
    ///
    /// A zero-token input passes through unchanged and reads as fully
    /// retained rather than dividing by zero.
    pub fn retention_percent(&self) -> f64 {
        if self.original_tokens == 0 {
            100.0
        } else {
            self.final_tokens as f64 / self.original_tokens as f64 * 100.0
        }
    }
}

/// The final result of a compression operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condensed {
    pub text: String,
    pub report: CompressionReport,
}
