use once_cell::sync::Lazy;
use regex::Regex;

/// A document sentence with its position in the segmented sequence.
///
/// Immutable once produced; the index is the sole identity used to restore
/// document order after score-based selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
}

/// Terminal punctuation followed by whitespace. The split point sits just
/// after the punctuation character, so each fragment keeps its terminator
/// and the separating whitespace is discarded.
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split normalized text into an ordered sequence of sentences.
///
/// Fragments are trimmed and empty ones dropped; indices are assigned
/// sequentially from 0. Text with no terminal punctuation yields a single
/// sentence equal to the whole trimmed input; empty input yields an empty
/// sequence.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut fragments: Vec<&str> = Vec::new();
    let mut last = 0usize;

    for m in SENTENCE_BREAK.find_iter(text) {
        // The matched terminator is one ASCII byte; keep it with the left
        // fragment and skip the whitespace run.
        fragments.push(&text[last..m.start() + 1]);
        last = m.end();
    }
    fragments.push(&text[last..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, text)| Sentence {
            index,
            text: text.to_string(),
        })
        .collect()
}
