use chrono::{TimeZone, Utc};
use pdf_condense::compress::{ApproxTokenEstimator, Compressor, CompressorConfig};
use pdf_condense::types::CompressionMode;

#[test]
fn golden_extractive_run_is_frozen() {
    // 47 chars => 11 estimated tokens against a 4-token ceiling:
    // target = min(4, floor(11 * 0.5)) = 4, ratio = 4/11, one sentence kept.
    let text = "The cat sat. 2024 was a good year. The cat sat.";
    let compressor = Compressor::new(
        CompressorConfig {
            max_tokens: 4,
            compression_ratio: 0.5,
        },
        ApproxTokenEstimator,
    )
    .unwrap();

    let mut condensed = compressor.compress_text(text, CompressionMode::Extractive);

    // created_at is informational only; pin it before snapshotting
    condensed.report.created_at = Utc.timestamp_opt(0, 0).unwrap();

    let json = serde_json::to_string_pretty(&condensed).unwrap();
    let expected = r#"{
  "text": "The cat sat.",
  "report": {
    "mode": "extractive",
    "original_tokens": 11,
    "final_tokens": 3,
    "created_at": "1970-01-01T00:00:00Z"
  }
}"#;

    assert_eq!(json.trim(), expected.trim(), "Golden snapshot mismatch");
}

#[test]
fn golden_report_retention_is_one_decimal_friendly() {
    let text = "The cat sat. 2024 was a good year. The cat sat.";
    let compressor = Compressor::new(
        CompressorConfig {
            max_tokens: 4,
            compression_ratio: 0.5,
        },
        ApproxTokenEstimator,
    )
    .unwrap();

    let condensed = compressor.compress_text(text, CompressionMode::Extractive);

    let shown = format!("{:.1}", condensed.report.retention_percent());
    assert_eq!(shown, "27.3"); // 3 / 11 * 100
}
