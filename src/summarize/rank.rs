use std::collections::HashMap;

use super::frequency::word_tokens;
use super::segment::Sentence;

/// Multiplier for sentences near the start or end of the document.
const EDGE_BONUS: f64 = 1.2;
/// Multiplier for sentences containing at least one decimal digit.
const DIGIT_BONUS: f64 = 1.1;
/// How many sentences at each end of the document count as edge sentences.
const EDGE_WINDOW: usize = 3;

/// Score every sentence against the frequency table.
///
/// The base score sums table frequencies over ALL word tokens of the
/// sentence; stop words and short tokens are not re-filtered here, they
/// simply contribute 0 because they never entered the table. Leading and
/// trailing sentences are boosted (introductions and conclusions), and
/// sentences carrying digits are boosted again (they tend to hold data).
/// For documents of six sentences or fewer the edge windows overlap and
/// every sentence gets the positional boost; that is expected.
///
/// Scores are keyed by position: `scores[i]` belongs to `sentences[i]`.
/// Pure function of (sentence text, table); no randomness.
pub fn score_sentences(sentences: &[Sentence], table: &HashMap<String, f64>) -> Vec<f64> {
    let count = sentences.len();

    sentences
        .iter()
        .map(|sentence| {
            let mut score: f64 = word_tokens(&sentence.text)
                .iter()
                .filter_map(|token| table.get(token))
                .sum();

            if sentence.index < EDGE_WINDOW || sentence.index >= count.saturating_sub(EDGE_WINDOW) {
                score *= EDGE_BONUS;
            }
            if sentence.text.chars().any(|c| c.is_ascii_digit()) {
                score *= DIGIT_BONUS;
            }

            score
        })
        .collect()
}
