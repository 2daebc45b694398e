pub mod abbrev;
pub mod clean;
pub mod dedup;

pub use abbrev::{apply_abbreviations, ABBREVIATIONS};
pub use clean::{clean_text, collapse_char_runs, collapse_whitespace, strip_page_number_lines};
pub use dedup::{dedup_lines, line_fingerprint, FINGERPRINT_PREFIX_CHARS};
