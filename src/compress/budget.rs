use super::CompressorConfig;

/// Approximate token accounting.
pub trait TokenEstimator {
    fn estimate(&self, text: &str) -> usize;
}

/// 1 token ≈ 4 characters of text.
///
/// tokens(content) := floor(chars(content) / 4). The estimate is
/// deliberately rough and is used for every size decision; it is never
/// exact and callers must tolerate error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproxTokenEstimator;

impl TokenEstimator for ApproxTokenEstimator {
    fn estimate(&self, text: &str) -> usize {
        text.chars().count() / 4
    }
}

/// What the budget controller decided to do with a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetPlan {
    /// The document already fits; pass the normalized text through.
    PassThrough,
    /// Run extractive selection at this sentence-retention ratio.
    Summarize {
        target_tokens: usize,
        retention_ratio: f64,
    },
}

/// Decide whether summarization runs at all.
///
/// Documents at or under `max_tokens` pass through. Otherwise the target is
/// `min(max_tokens, floor(original × compression_ratio))` and the retention
/// ratio is `target / original`. The ratio is applied once against
/// sentence-count proportion, not re-checked against the output's actual
/// size; sentence lengths vary, so the final size can overshoot or
/// undershoot the nominal budget.
pub fn plan(original_tokens: usize, config: &CompressorConfig) -> BudgetPlan {
    if original_tokens <= config.max_tokens {
        return BudgetPlan::PassThrough;
    }

    let target_tokens = config
        .max_tokens
        .min((original_tokens as f64 * config.compression_ratio).floor() as usize);
    // original_tokens > max_tokens >= 1 here, so the division is safe
    let retention_ratio = target_tokens as f64 / original_tokens as f64;

    BudgetPlan::Summarize {
        target_tokens,
        retention_ratio,
    }
}
