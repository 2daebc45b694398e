use std::cmp::Ordering;

use super::segment::Sentence;

/// Indices of the sentences to keep for retention ratio `ratio`, in
/// document order.
///
/// `num_to_keep = max(1, floor(count × ratio))`, so a non-empty document
/// always keeps at least one sentence. Candidates are ranked by score
/// descending with ties broken by original index ascending; scores tie
/// frequently on short or stopword-only sentences, so the tie-break is
/// load-bearing for determinism.
pub fn select_indices(scores: &[f64], ratio: f64) -> Vec<usize> {
    if scores.is_empty() {
        return Vec::new();
    }

    let num_to_keep = ((scores.len() as f64 * ratio).floor() as usize).max(1);

    // Sort globally by (score desc, index asc)
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|a, b| {
        let score_cmp = scores[*b]
            .partial_cmp(&scores[*a])
            .unwrap_or(Ordering::Equal);
        if score_cmp != Ordering::Equal {
            score_cmp
        } else {
            a.cmp(b)
        }
    });

    let mut kept: Vec<usize> = ranked.into_iter().take(num_to_keep).collect();
    // Restore document order
    kept.sort_unstable();
    kept
}

/// Rebuild the output text from the selected sentences, joined by a single
/// space. The result is a strict subsequence of the input sentences in
/// original order.
pub fn select_sentences(sentences: &[Sentence], scores: &[f64], ratio: f64) -> String {
    debug_assert_eq!(sentences.len(), scores.len());

    let kept = select_indices(scores, ratio);
    let picked: Vec<&str> = kept
        .iter()
        .map(|&index| sentences[index].text.as_str())
        .collect();

    picked.join(" ")
}
