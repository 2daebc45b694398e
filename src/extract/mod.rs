pub mod pdf;

pub use pdf::{pdf_text, ExtractError};
