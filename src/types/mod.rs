pub mod report;

pub use report::{CompressionMode, CompressionReport, Condensed};
