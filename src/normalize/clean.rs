use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Collapse runs of five or more identical characters down to two, so
/// decorative rules like `======` become `==`.
///
/// The `regex` crate has no backreferences, so this is a direct scan over
/// the character stream.
pub fn collapse_char_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1usize;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        let emit = if run >= 5 { 2 } else { run };
        for _ in 0..emit {
            out.push(c);
        }
    }

    out
}

/// Whitespace collapse, then char-run collapse, then trim.
pub fn clean_text(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let collapsed = collapse_char_runs(&collapsed);
    collapsed.trim().to_string()
}

/// Drop lines that consist of nothing but a page number.
///
/// Must run while the text still has line structure; the whitespace
/// collapse in [`clean_text`] erases it.
pub fn strip_page_number_lines(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit())
        })
        .collect();
    kept.join("\n")
}
