//! FEC method comparison harness.
//!
//! Runs the same input through every configured encoder (RS-only,
//! convolutional-only, concatenated, and the turbo/LDPC repetition
//! placeholders) and assembles a per-method report of output size and
//! overhead. This is a diagnostic tool, not a data path: each method is
//! attempted independently, and a failing method is logged at `warn` level
//! and left out of the report rather than aborting the run.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::bit_packing::bytes_to_bits;
use crate::concatenated::{ConcatenatedEncoder, ConcatenatedStats};
use crate::convolutional::{ConvEncodeStats, ConvolutionalEncoder};
use crate::reed_solomon::{RsBlockCodec, RsEncodeStats};
use crate::repetition::{LdpcEncoder, LdpcStats, TurboEncoder, TurboStats, DEFAULT_TURBO_FRAME_SIZE};

/// Which codecs the harness runs and with what standards.
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Convolutional standard name for the conv-only and concatenated runs.
    pub conv_standard: String,
    /// Reed-Solomon standard name for the RS-only and concatenated runs.
    pub rs_standard: String,
    /// Frame size for the turbo placeholder.
    pub turbo_frame_size: usize,
    /// Textual code rate for the LDPC placeholder.
    pub ldpc_rate: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            conv_standard: "CCSDS_k7_r12".to_string(),
            rs_standard: "CCSDS_rs255_223".to_string(),
            turbo_frame_size: DEFAULT_TURBO_FRAME_SIZE,
            ldpc_rate: "1/2".to_string(),
        }
    }
}

/// Per-method stats, tagged by codec family.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "codec", rename_all = "snake_case")]
pub enum MethodStats {
    ReedSolomon(RsEncodeStats),
    Convolutional(ConvEncodeStats),
    Concatenated(ConcatenatedStats),
    Turbo(TurboStats),
    Ldpc(LdpcStats),
}

/// One successfully evaluated method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodReport {
    /// Encoded size in bytes (bit outputs rounded up to whole bytes).
    pub encoded_size: usize,
    /// `(encoded_size - original_size) / original_size * 100`; 0.0 for
    /// empty input.
    pub overhead_percent: f64,
    /// The underlying encoder's statistics.
    pub stats: MethodStats,
}

/// Comparison report over all methods that succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Input size in bytes.
    pub original_size: usize,
    /// Reports keyed by method name.
    pub methods: BTreeMap<String, MethodReport>,
}

fn overhead_percent(original: usize, encoded: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        (encoded as f64 - original as f64) / original as f64 * 100.0
    }
}

/// Run every configured method over `data` and report the survivors.
///
/// A misconfigured method (unknown standard, bad rate string) is skipped;
/// with the default configuration every method succeeds, and the turbo
/// placeholder cannot fail at all, so the report is never empty.
pub fn run_comparison(data: &[u8], config: &ComparisonConfig) -> ComparisonReport {
    let mut methods = BTreeMap::new();

    match RsBlockCodec::new(&config.rs_standard) {
        Ok(codec) => match codec.encode(data) {
            Ok((encoded, stats)) => {
                let name = format!("Reed-Solomon ({},{})", codec.standard().n, codec.standard().k);
                methods.insert(
                    name,
                    MethodReport {
                        encoded_size: encoded.len(),
                        overhead_percent: overhead_percent(data.len(), encoded.len()),
                        stats: MethodStats::ReedSolomon(stats),
                    },
                );
            }
            Err(e) => warn!(error = %e, "Reed-Solomon method skipped"),
        },
        Err(e) => warn!(error = %e, "Reed-Solomon method skipped"),
    }

    match ConvolutionalEncoder::new(&config.conv_standard) {
        Ok(encoder) => {
            let (encoded_bits, stats) = encoder.encode(&bytes_to_bits(data));
            let encoded_bytes = encoded_bits.len().div_ceil(8);
            let name = format!(
                "Convolutional (K={}, Rate {})",
                encoder.constraint_length(),
                encoder.code_rate()
            );
            methods.insert(
                name,
                MethodReport {
                    encoded_size: encoded_bytes,
                    overhead_percent: overhead_percent(data.len(), encoded_bytes),
                    stats: MethodStats::Convolutional(stats),
                },
            );
        }
        Err(e) => warn!(error = %e, "convolutional method skipped"),
    }

    match ConcatenatedEncoder::new(&config.conv_standard, &config.rs_standard) {
        Ok(encoder) => match encoder.encode(data) {
            Ok((encoded, stats)) => {
                methods.insert(
                    "Concatenated (RS + Convolutional)".to_string(),
                    MethodReport {
                        encoded_size: encoded.len(),
                        overhead_percent: overhead_percent(data.len(), encoded.len()),
                        stats: MethodStats::Concatenated(stats),
                    },
                );
            }
            Err(e) => warn!(error = %e, "concatenated method skipped"),
        },
        Err(e) => warn!(error = %e, "concatenated method skipped"),
    }

    {
        let (encoded, stats) = TurboEncoder::new(config.turbo_frame_size).encode(data);
        methods.insert(
            "Turbo (repetition)".to_string(),
            MethodReport {
                encoded_size: encoded.len(),
                overhead_percent: overhead_percent(data.len(), encoded.len()),
                stats: MethodStats::Turbo(stats),
            },
        );
    }

    match LdpcEncoder::new(&config.ldpc_rate) {
        Ok(encoder) => {
            let (encoded, stats) = encoder.encode(data);
            methods.insert(
                "LDPC (repetition)".to_string(),
                MethodReport {
                    encoded_size: encoded.len(),
                    overhead_percent: overhead_percent(data.len(), encoded.len()),
                    stats: MethodStats::Ldpc(stats),
                },
            );
        }
        Err(e) => warn!(error = %e, "LDPC method skipped"),
    }

    ComparisonReport { original_size: data.len(), methods }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_runs_all_methods() {
        let report = run_comparison(b"Test Data", &ComparisonConfig::default());
        assert_eq!(report.original_size, 9);
        assert_eq!(report.methods.len(), 5);
        assert!(report.methods.contains_key("Reed-Solomon (255,223)"));
        assert!(report.methods.contains_key("Convolutional (K=7, Rate 1/2)"));
        assert!(report.methods.contains_key("Concatenated (RS + Convolutional)"));
        assert!(report.methods.contains_key("Turbo (repetition)"));
        assert!(report.methods.contains_key("LDPC (repetition)"));
    }

    #[test]
    fn test_reported_sizes_and_overheads() {
        let report = run_comparison(b"Test Data", &ComparisonConfig::default());

        let rs = &report.methods["Reed-Solomon (255,223)"];
        assert_eq!(rs.encoded_size, 41);
        assert!((rs.overhead_percent - (41.0 - 9.0) / 9.0 * 100.0).abs() < 1e-9);

        let conv = &report.methods["Convolutional (K=7, Rate 1/2)"];
        // 2 * (72 + 6) = 156 bits -> 20 bytes
        assert_eq!(conv.encoded_size, 20);

        let turbo = &report.methods["Turbo (repetition)"];
        assert_eq!(turbo.encoded_size, 18);
        assert!((turbo.overhead_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_misconfigured_method_does_not_abort_others() {
        let config = ComparisonConfig {
            conv_standard: "no_such_standard".to_string(),
            ldpc_rate: "2/3".to_string(),
            ..ComparisonConfig::default()
        };
        let report = run_comparison(b"payload", &config);

        // Conv-only, concatenated, and LDPC are skipped; RS and turbo remain
        assert_eq!(report.methods.len(), 2);
        assert!(report.methods.contains_key("Reed-Solomon (255,223)"));
        assert!(report.methods.contains_key("Turbo (repetition)"));
    }

    #[test]
    fn test_turbo_always_succeeds() {
        let config = ComparisonConfig {
            conv_standard: "bad".to_string(),
            rs_standard: "bad".to_string(),
            ldpc_rate: "bad".to_string(),
            ..ComparisonConfig::default()
        };
        let report = run_comparison(b"x", &config);
        assert_eq!(report.methods.len(), 1);
        assert!(report.methods.contains_key("Turbo (repetition)"));
    }

    #[test]
    fn test_report_serializes_with_tagged_stats() {
        let report = run_comparison(b"Hi", &ComparisonConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        let stats = &json["methods"]["Turbo (repetition)"]["stats"];
        assert_eq!(stats["codec"], "turbo");
        assert_eq!(stats["original_bits"], 16);
    }
}
