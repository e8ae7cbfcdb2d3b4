//! Concatenated coding: Reed-Solomon inner + convolutional outer.
//!
//! The classic CCSDS deep-space arrangement chains a block code and a
//! convolutional code so that the convolutional stage cleans up random
//! channel errors while the RS stage mops up the burst errors a trellis
//! decoder leaves behind.
//!
//! ## Pipeline
//!
//! ```text
//! bytes -> [RS encode] -> bytes_to_bits -> [Convolutional encode] -> bits_to_bytes
//! ```
//!
//! Size and rate statistics are threaded through every stage and composed
//! into a single [`ConcatenatedStats`].
//!
//! ## Example
//!
//! ```rust
//! use ccsds_fec::concatenated::ConcatenatedEncoder;
//!
//! let encoder = ConcatenatedEncoder::new("CCSDS_k7_r12", "CCSDS_rs255_223").unwrap();
//! let (encoded, stats) = encoder.encode(b"Test Data").unwrap();
//!
//! // 9 bytes -> 41 RS bytes -> 328 bits -> 2 * (328 + 6) = 668 coded bits
//! assert_eq!(stats.total_bits, 668);
//! assert_eq!(encoded.len(), 84); // ceil(668 / 8)
//! ```

use serde::Serialize;
use tracing::debug;

use crate::bit_packing::{bits_to_bytes, bytes_to_bits};
use crate::convolutional::{ConvEncodeStats, ConvolutionalEncoder};
use crate::error::FecError;
use crate::reed_solomon::{RsBlockCodec, RsEncodeStats};

/// Combined statistics for a concatenated encode.
#[derive(Debug, Clone, Serialize)]
pub struct ConcatenatedStats {
    /// Caller data length in bytes.
    pub original_data_length: usize,
    /// Byte length after the inner RS stage.
    pub rs_encoded_length: usize,
    /// Bit count out of the outer convolutional stage (flush included).
    pub total_bits: usize,
    /// Final byte length after repacking.
    pub output_length: usize,
    /// `8 * original_data_length / total_bits`; 0.0 for empty input.
    ///
    /// Note: this divides information bits by the convolutional bit count
    /// only — the RS parity overhead is already folded into `total_bits`.
    /// It is the rate definition the reference system reports, kept as-is.
    pub overall_code_rate: f64,
    /// Inner-stage statistics.
    pub rs: RsEncodeStats,
    /// Outer-stage statistics.
    pub conv: ConvEncodeStats,
}

/// Orchestrates the RS (inner) + convolutional (outer) encode pipeline.
#[derive(Debug, Clone)]
pub struct ConcatenatedEncoder {
    conv: ConvolutionalEncoder,
    rs: RsBlockCodec,
}

impl ConcatenatedEncoder {
    /// Create an encoder from named convolutional and RS standards.
    ///
    /// Either unknown name fails with [`FecError::UnknownStandard`].
    pub fn new(conv_standard: &str, rs_standard: &str) -> Result<Self, FecError> {
        Ok(Self {
            conv: ConvolutionalEncoder::new(conv_standard)?,
            rs: RsBlockCodec::new(rs_standard)?,
        })
    }

    /// The outer convolutional encoder.
    pub fn conv(&self) -> &ConvolutionalEncoder {
        &self.conv
    }

    /// The inner Reed-Solomon codec.
    pub fn rs(&self) -> &RsBlockCodec {
        &self.rs
    }

    /// Run the full encode pipeline.
    ///
    /// An RS failure aborts before the convolutional stage runs; no partial
    /// output is produced.
    pub fn encode(&self, data: &[u8]) -> Result<(Vec<u8>, ConcatenatedStats), FecError> {
        let (rs_encoded, rs_stats) = self.rs.encode(data)?;
        let bits = bytes_to_bits(&rs_encoded);
        let (conv_bits, conv_stats) = self.conv.encode(&bits);
        let output = bits_to_bytes(&conv_bits);

        debug!(
            input_bytes = data.len(),
            rs_bytes = rs_encoded.len(),
            conv_bits = conv_bits.len(),
            output_bytes = output.len(),
            "concatenated encode"
        );

        let stats = ConcatenatedStats {
            original_data_length: data.len(),
            rs_encoded_length: rs_encoded.len(),
            total_bits: conv_bits.len(),
            output_length: output.len(),
            overall_code_rate: if conv_bits.is_empty() || data.is_empty() {
                0.0
            } else {
                (data.len() * 8) as f64 / conv_bits.len() as f64
            },
            rs: rs_stats,
            conv: conv_stats,
        };

        Ok((output, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_data_reference_sizes() {
        let encoder = ConcatenatedEncoder::new("CCSDS_k7_r12", "CCSDS_rs255_223").unwrap();
        let (encoded, stats) = encoder.encode(b"Test Data").unwrap();

        assert_eq!(stats.original_data_length, 9);
        assert_eq!(stats.rs_encoded_length, 41); // 9 + 32 parity
        assert_eq!(stats.total_bits, 2 * (41 * 8 + 6)); // 668
        assert_eq!(stats.output_length, 84); // ceil(668 / 8)
        assert_eq!(encoded.len(), 84);
        assert!((stats.overall_code_rate - 72.0 / 668.0).abs() < 1e-12);
    }

    #[test]
    fn test_stage_stats_are_threaded() {
        let encoder = ConcatenatedEncoder::new("CCSDS_k7_r13", "CCSDS_rs255_239").unwrap();
        let (_, stats) = encoder.encode(b"telemetry frame").unwrap();

        assert_eq!(stats.rs.parity_symbols, 16);
        assert_eq!(stats.rs.encoded_length, stats.rs_encoded_length);
        assert_eq!(stats.conv.code_rate, "1/3");
        assert_eq!(stats.conv.input_length, stats.rs_encoded_length * 8);
        assert_eq!(stats.conv.output_length, stats.total_bits);
    }

    #[test]
    fn test_empty_input_rate_guard() {
        let encoder = ConcatenatedEncoder::new("CCSDS_k7_r12", "CCSDS_rs255_223").unwrap();
        let (encoded, stats) = encoder.encode(&[]).unwrap();

        // Empty data still yields the parity-only RS codeword plus the
        // convolutional flush: 32 bytes -> 2 * (256 + 6) = 524 bits
        assert_eq!(stats.rs_encoded_length, 32);
        assert_eq!(stats.total_bits, 524);
        assert_eq!(encoded.len(), 66);
        assert_eq!(stats.overall_code_rate, 0.0);
    }

    #[test]
    fn test_unknown_standards_fail_construction() {
        assert!(matches!(
            ConcatenatedEncoder::new("CCSDS_k7_r12", "bogus"),
            Err(FecError::UnknownStandard(_))
        ));
        assert!(matches!(
            ConcatenatedEncoder::new("bogus", "CCSDS_rs255_223"),
            Err(FecError::UnknownStandard(_))
        ));
    }

    #[test]
    fn test_output_is_repacked_conv_bits() {
        let encoder = ConcatenatedEncoder::new("CCSDS_k5_r12", "CCSDS_rs255_239").unwrap();
        let data = b"frame";
        let (encoded, stats) = encoder.encode(data).unwrap();

        // Reproduce the pipeline stage by stage
        let (rs_encoded, _) = encoder.rs().encode(data).unwrap();
        let (conv_bits, _) = encoder.conv().encode(&bytes_to_bits(&rs_encoded));
        assert_eq!(encoded, bits_to_bytes(&conv_bits));
        assert_eq!(stats.total_bits, conv_bits.len());
    }
}
