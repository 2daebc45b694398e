use std::collections::HashSet;

use sha2::{Digest, Sha256};

/// How many characters of a line participate in its fingerprint.
pub const FINGERPRINT_PREFIX_CHARS: usize = 100;

/// Prefix fingerprint of a line: sha256 over the first
/// [`FINGERPRINT_PREFIX_CHARS`] characters of the lowercased line,
/// hex-encoded.
///
/// Distinct lines sharing that prefix collapse to one fingerprint. That is
/// a known approximation of line identity, accepted so repeated
/// headers/footers dedup cheaply without comparing full lines.
pub fn line_fingerprint(line: &str) -> String {
    let prefix: String = line
        .to_lowercase()
        .chars()
        .take(FINGERPRINT_PREFIX_CHARS)
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hex::encode(hasher.finalize())
}

/// Keep the first occurrence of each line, where line identity is the
/// prefix fingerprint. Blank lines are dropped.
pub fn dedup_lines(text: &str) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if seen.insert(line_fingerprint(line)) {
            unique.push(line);
        }
    }

    unique.join("\n")
}
