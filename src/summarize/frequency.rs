use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use super::segment::Sentence;

/// Function words excluded from frequency counting. Process-wide immutable
/// configuration, frozen at first use.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had",
    ]
    .into_iter()
    .collect()
});

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Lowercased word tokens (alphanumeric/underscore runs) of a sentence.
pub(crate) fn word_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Normalized per-document term frequencies over the whole sentence
/// sequence.
///
/// Stop words and tokens of one or two characters never enter the table.
/// Surviving counts are divided by the maximum count observed, so values
/// land in (0, 1] with 1.0 on the most frequent term. No tokens surviving
/// means an empty table; the divisor falls back to 1 so nothing divides by
/// zero. Single document only, raw frequency, no inverse-document term.
pub fn term_frequencies(sentences: &[Sentence]) -> HashMap<String, f64> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for sentence in sentences {
        for token in word_tokens(&sentence.text) {
            if STOP_WORDS.contains(token.as_str()) || token.chars().count() <= 2 {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let max = counts.values().copied().max().unwrap_or(1) as f64;

    counts
        .into_iter()
        .map(|(token, count)| (token, count as f64 / max))
        .collect()
}
