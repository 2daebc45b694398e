pub mod frequency;
pub mod rank;
pub mod segment;
pub mod select;

pub use frequency::{term_frequencies, STOP_WORDS};
pub use rank::score_sentences;
pub use segment::{split_sentences, Sentence};
pub use select::{select_indices, select_sentences};

use tracing::debug;

/// Summarize `text` down to roughly `ratio` of its sentences.
///
/// Pure and deterministic: segment, build the term-frequency table, score,
/// select, rejoin in document order. Text that segments into nothing (an
/// empty document) is returned as-is.
pub fn extractive_summary(text: &str, ratio: f64) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.to_string();
    }

    let table = term_frequencies(&sentences);
    let scores = score_sentences(&sentences, &table);

    debug!(
        sentences = sentences.len(),
        terms = table.len(),
        ratio,
        "scored document"
    );

    select_sentences(&sentences, &scores, ratio)
}
