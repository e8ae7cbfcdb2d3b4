//! # CCSDS FEC Toolkit
//!
//! Forward-error-correction and confidentiality primitives for explaining
//! and benchmarking the space-communication coding standards of CCSDS
//! 131.0-B-3:
//!
//! - **Convolutional codes**: zero-terminated rate-1/r shift-register
//!   encoders (K=5 and K=7 standards, plus custom generator sets)
//! - **Reed-Solomon codes**: systematic GF(2^8) encoder/decoder with the
//!   (255,223) and (255,239) CCSDS profiles, shortened-code support, and
//!   chunked block coding for arbitrary-length data
//! - **Concatenated coding**: the classic RS-inner + convolutional-outer
//!   deep-space pipeline, with rate/overhead statistics at every stage
//! - **Comparison harness**: run one payload through every method and
//!   tabulate size and overhead
//! - **AES-256-CBC wrapper** for payload confidentiality ahead of encoding
//!
//! The "turbo" and "LDPC" entries are bit-repetition placeholders (see
//! [`repetition`]), kept compatible with the comparison harness rather than
//! implemented as real iterative codes.
//!
//! ## Signal flow
//!
//! ```text
//! TX: Data -> [RS encode] -> bits -> [Convolutional encode] -> bits -> bytes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ccsds_fec::{ConcatenatedEncoder, ConvolutionalEncoder};
//!
//! // Outer convolutional stage on its own
//! let conv = ConvolutionalEncoder::new("CCSDS_k7_r12").unwrap();
//! let (bits, stats) = conv.encode(&[1, 0, 1, 1, 0]);
//! assert_eq!(bits.len(), 22); // 2 * (5 + K - 1)
//! assert_eq!(stats.code_rate, "1/2");
//!
//! // Full concatenated pipeline
//! let codec = ConcatenatedEncoder::new("CCSDS_k7_r12", "CCSDS_rs255_223").unwrap();
//! let (frame, stats) = codec.encode(b"Test Data").unwrap();
//! assert_eq!(frame.len(), 84);
//! assert_eq!(stats.rs_encoded_length, 41);
//! ```

pub mod bit_packing;
pub mod cipher;
pub mod comparison;
pub mod concatenated;
pub mod convolutional;
pub mod error;
pub mod logging;
pub mod parse;
pub mod reed_solomon;
pub mod report;
pub mod repetition;
pub mod standards;

// Re-export main types
pub use bit_packing::{bits_to_bytes, bytes_to_bits};
pub use comparison::{run_comparison, ComparisonConfig, ComparisonReport, MethodReport, MethodStats};
pub use concatenated::{ConcatenatedEncoder, ConcatenatedStats};
pub use convolutional::{ConvEncodeStats, ConvolutionalEncoder};
pub use error::{FecError, FecResult};
pub use parse::{format_bits, parse_bits, parse_generators};
pub use reed_solomon::{
    ReedSolomonDecoder, ReedSolomonEncoder, RsBlockCodec, RsDecodeOutcome, RsDecodeStats,
    RsEncodeStats,
};
pub use repetition::{LdpcEncoder, LdpcStats, TurboEncoder, TurboStats};
pub use standards::{conv_standard, rs_standard, ConvStandard, RsStandard, CONV_STANDARDS, RS_STANDARDS};
