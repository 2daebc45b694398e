use chrono::{TimeZone, Utc};
use pdf_condense::compress::{ApproxTokenEstimator, Compressor, CompressorConfig};
use pdf_condense::types::CompressionMode;

fn long_document() -> String {
    (0..60)
        .map(|i| {
            format!(
                "Section {i:02} covers finding {f} with value {v}.",
                f = i % 7,
                v = i * 3
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn identical_inputs_produce_identical_outputs() {
    let text = long_document();
    let compressor = Compressor::new(
        CompressorConfig {
            max_tokens: 100,
            compression_ratio: 0.5,
        },
        ApproxTokenEstimator,
    )
    .unwrap();

    let first = compressor.compress_text(&text, CompressionMode::Extractive);
    let second = compressor.compress_text(&text, CompressionMode::Extractive);

    assert_eq!(first.text, second.text);
    assert_eq!(first.report.original_tokens, second.report.original_tokens);
    assert_eq!(first.report.final_tokens, second.report.final_tokens);
}

#[test]
fn serialized_results_are_byte_identical_after_pinning_the_timestamp() {
    let text = long_document();
    let compressor = Compressor::default();

    let mut first = compressor.compress_text(&text, CompressionMode::Extractive);
    let mut second = compressor.compress_text(&text, CompressionMode::Extractive);

    let fixed_time = Utc.timestamp_opt(0, 0).unwrap();
    first.report.created_at = fixed_time;
    second.report.created_at = fixed_time;

    let json1 = serde_json::to_string_pretty(&first).unwrap();
    let json2 = serde_json::to_string_pretty(&second).unwrap();
    assert_eq!(json1, json2, "Compression output is not deterministic");
}

#[test]
fn both_modes_are_deterministic_on_the_same_input() {
    let text = long_document();
    let compressor = Compressor::new(
        CompressorConfig {
            max_tokens: 50,
            compression_ratio: 0.5,
        },
        ApproxTokenEstimator,
    )
    .unwrap();

    for mode in [CompressionMode::Extractive, CompressionMode::Heuristic] {
        let first = compressor.compress_text(&text, mode);
        let second = compressor.compress_text(&text, mode);
        assert_eq!(first.text, second.text, "{mode:?} output drifted");
    }
}
