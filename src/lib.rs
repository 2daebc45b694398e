//! Deterministic token-budgeted PDF text condensation.
//!
//! `pdf-condense` extracts plain text from a PDF and reduces it to fit a
//! caller-specified token budget while keeping as much salient content as
//! possible. The reduction engine is extractive: it segments the text into
//! sentences, scores them by normalized term frequency with positional and
//! numeric-content bonuses, and keeps the top-scoring sentences in original
//! document order. All operations are deterministic — identical inputs
//! always produce identical outputs, byte-for-byte.
//!
//! Token counts are *estimated* (1 token ≈ 4 characters), never exact.
//! Callers must tolerate error in both directions.

pub mod compress;
pub mod extract;
pub mod normalize;
pub mod summarize;
pub mod types;
