//! # Convolutional Encoder
//!
//! A rate-1/r convolutional encoder for forward error correction in space
//! telemetry links, implementing the coding side of CCSDS 131.0-B-3. Each
//! input bit shifts through a K-1 stage register and produces one parity bit
//! per generator polynomial, evaluated over GF(2).
//!
//! Encoding is zero-terminated: after the data bits, K-1 synthetic zero
//! inputs flush the register back to the all-zero state. A trellis decoder
//! relies on that known final state; this crate implements only the forward
//! direction (no Viterbi decoder exists in the system being modeled).
//!
//! ## Example
//!
//! ```rust
//! use ccsds_fec::convolutional::ConvolutionalEncoder;
//!
//! // NASA standard K=7, rate-1/2 code (generators 171/133 octal)
//! let encoder = ConvolutionalEncoder::new("CCSDS_k7_r12").unwrap();
//!
//! let (encoded, stats) = encoder.encode(&[1, 0, 1, 1, 0]);
//!
//! // r * (L + K - 1) = 2 * (5 + 6) = 22 output bits
//! assert_eq!(encoded.len(), 22);
//! assert_eq!(stats.output_length, 22);
//! assert_eq!(stats.code_rate, "1/2");
//! ```

use serde::Serialize;

use crate::error::FecError;
use crate::standards::conv_standard;

/// Statistics reported alongside every convolutional encode.
#[derive(Debug, Clone, Serialize)]
pub struct ConvEncodeStats {
    /// Number of data bits consumed (flush bits excluded).
    pub input_length: usize,
    /// Number of output bits, including the flush tail.
    pub output_length: usize,
    /// Nominal code rate, e.g. "1/2".
    pub code_rate: String,
    /// Constraint length K.
    pub constraint_length: usize,
    /// `output_length / input_length`; 0.0 for empty input by convention.
    pub expansion_ratio: f64,
}

/// A convolutional encoder configured from the standard registry or from an
/// explicit generator-polynomial set.
///
/// The encoder is stateless across calls: every [`encode`](Self::encode)
/// starts from the all-zero register and ends there after the flush, so
/// concurrent encodes on independent inputs need no coordination.
#[derive(Debug, Clone)]
pub struct ConvolutionalEncoder {
    /// Constraint length K (register memory = K-1).
    constraint_length: usize,
    /// Generator polynomials as tap bitmasks over the register.
    generators: Vec<u64>,
    /// Nominal code rate string "1/r".
    code_rate: String,
    /// Human-readable description of the selected code.
    description: String,
}

impl ConvolutionalEncoder {
    /// Create an encoder from a named standard in the registry.
    ///
    /// Fails with [`FecError::UnknownStandard`] for an unrecognized name.
    pub fn new(standard: &str) -> Result<Self, FecError> {
        let std = conv_standard(standard)?;
        Ok(Self {
            constraint_length: std.constraint_length,
            generators: std.generators.to_vec(),
            code_rate: std.code_rate.to_string(),
            description: std.description.to_string(),
        })
    }

    /// Create an encoder from an explicit generator set.
    ///
    /// The constraint length is derived from the widest polynomial, and the
    /// code rate is 1/r for r generators. Fails with
    /// [`FecError::Configuration`] if the set is empty, contains a zero
    /// polynomial, or yields a constraint length below 2.
    pub fn with_generators(generators: &[u64]) -> Result<Self, FecError> {
        if generators.is_empty() {
            return Err(FecError::Configuration(
                "at least one generator polynomial is required".to_string(),
            ));
        }
        if generators.contains(&0) {
            return Err(FecError::Configuration(
                "generator polynomial must be non-zero".to_string(),
            ));
        }
        let constraint_length = generators
            .iter()
            .map(|&g| 64 - g.leading_zeros() as usize)
            .max()
            .unwrap_or(0);
        if constraint_length < 2 {
            return Err(FecError::Configuration(
                "constraint length must be at least 2".to_string(),
            ));
        }
        let rate = format!("1/{}", generators.len());
        Ok(Self {
            constraint_length,
            generators: generators.to_vec(),
            code_rate: rate.clone(),
            description: format!("K={}, Rate {} - custom generators", constraint_length, rate),
        })
    }

    /// Constraint length K.
    pub fn constraint_length(&self) -> usize {
        self.constraint_length
    }

    /// Generator polynomials as tap bitmasks.
    pub fn generators(&self) -> &[u64] {
        &self.generators
    }

    /// Nominal code rate string "1/r".
    pub fn code_rate(&self) -> &str {
        &self.code_rate
    }

    /// Human-readable description of the selected code.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Encode a bit sequence, appending K-1 zero-flush steps.
    ///
    /// For each input bit the register shifts left and every generator emits
    /// one parity bit, strictly in generator-list order; that ordering is
    /// part of the wire format. Output length is `r * (L + K - 1)` for all
    /// L >= 0, so an empty input still yields the `r * (K - 1)` flush tail.
    pub fn encode(&self, input: &[u8]) -> (Vec<u8>, ConvEncodeStats) {
        let memory = self.constraint_length - 1;
        let state_mask = (1u64 << memory) - 1;
        let mut encoded = Vec::with_capacity(self.generators.len() * (input.len() + memory));
        let mut state: u64 = 0;

        for &bit in input {
            state = ((state << 1) | u64::from(bit & 1)) & state_mask;
            self.emit(state, &mut encoded);
        }

        // Tail bits: shift in zeros until the register drains to all-zero
        for _ in 0..memory {
            state = (state << 1) & state_mask;
            self.emit(state, &mut encoded);
        }

        let stats = ConvEncodeStats {
            input_length: input.len(),
            output_length: encoded.len(),
            code_rate: self.code_rate.clone(),
            constraint_length: self.constraint_length,
            expansion_ratio: if input.is_empty() {
                0.0
            } else {
                encoded.len() as f64 / input.len() as f64
            },
        };

        (encoded, stats)
    }

    /// One parity bit per generator: XOR of the register taps the polynomial
    /// selects.
    fn emit(&self, state: u64, out: &mut Vec<u8>) {
        for &gen in &self.generators {
            out.push(((gen & state).count_ones() & 1) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_construction() {
        let enc = ConvolutionalEncoder::new("CCSDS_k7_r12").unwrap();
        assert_eq!(enc.constraint_length(), 7);
        assert_eq!(enc.generators(), &[0o171, 0o133]);
        assert_eq!(enc.code_rate(), "1/2");
    }

    #[test]
    fn test_unknown_standard_fails() {
        assert!(matches!(
            ConvolutionalEncoder::new("CCSDS_k9_r12"),
            Err(FecError::UnknownStandard(_))
        ));
    }

    #[test]
    fn test_output_length_formula() {
        // output == r * (L + K - 1) for all L >= 0
        let enc = ConvolutionalEncoder::new("CCSDS_k7_r12").unwrap();
        for len in 0..20 {
            let input = vec![1u8; len];
            let (encoded, stats) = enc.encode(&input);
            assert_eq!(encoded.len(), 2 * (len + 6));
            assert_eq!(stats.output_length, encoded.len());
            assert_eq!(stats.input_length, len);
        }
    }

    #[test]
    fn test_k7_rate_half_known_vector() {
        // Input 10110, K=7, generators 171/133 octal. Derived by hand from
        // the register recurrence: state = ((state << 1) | b) & 0x3F, one
        // parity per generator, then 6 zero-flush steps.
        let enc = ConvolutionalEncoder::new("CCSDS_k7_r12").unwrap();
        let (encoded, stats) = enc.encode(&[1, 0, 1, 1, 0]);
        let expected: Vec<u8> = "1101110110010001100000"
            .chars()
            .map(|c| c as u8 - b'0')
            .collect();
        assert_eq!(encoded, expected);
        assert_eq!(stats.output_length, 22);
        assert!((stats.expansion_ratio - 22.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_k5_rate_half_known_vector() {
        let enc = ConvolutionalEncoder::new("CCSDS_k5_r12").unwrap();
        let (encoded, _) = enc.encode(&[1, 0, 1, 1, 0]);
        let expected: Vec<u8> = "110110000011100000"
            .chars()
            .map(|c| c as u8 - b'0')
            .collect();
        assert_eq!(encoded, expected);
        assert_eq!(encoded.len(), 2 * (5 + 4));
    }

    #[test]
    fn test_rate_one_third_known_vector() {
        let enc = ConvolutionalEncoder::new("CCSDS_k7_r13").unwrap();
        let (encoded, stats) = enc.encode(&[1, 1, 0, 1]);
        let expected: Vec<u8> = "111101011000010010011110101000"
            .chars()
            .map(|c| c as u8 - b'0')
            .collect();
        assert_eq!(encoded, expected);
        assert_eq!(stats.output_length, 3 * (4 + 6));
        assert_eq!(stats.code_rate, "1/3");
    }

    #[test]
    fn test_empty_input_flush_only() {
        let enc = ConvolutionalEncoder::new("CCSDS_k7_r12").unwrap();
        let (encoded, stats) = enc.encode(&[]);
        // Flushing an all-zero register emits only zeros
        assert_eq!(encoded, vec![0u8; 12]);
        assert_eq!(stats.input_length, 0);
        assert_eq!(stats.output_length, 12);
        assert_eq!(stats.expansion_ratio, 0.0);
    }

    #[test]
    fn test_all_zeros_input() {
        let enc = ConvolutionalEncoder::new("CCSDS_k7_r12").unwrap();
        let (encoded, _) = enc.encode(&[0; 20]);
        assert!(encoded.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_encode_is_memoryless_across_calls() {
        let enc = ConvolutionalEncoder::new("CCSDS_k7_r12").unwrap();
        let (first, _) = enc.encode(&[1, 1, 0, 1, 0, 1]);
        let (second, _) = enc.encode(&[1, 1, 0, 1, 0, 1]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generator_order_is_preserved() {
        // Swapping the generator list must swap the per-step output pair
        let a = ConvolutionalEncoder::with_generators(&[0o171, 0o133]).unwrap();
        let b = ConvolutionalEncoder::with_generators(&[0o133, 0o171]).unwrap();
        let (ea, _) = a.encode(&[1, 0, 1]);
        let (eb, _) = b.encode(&[1, 0, 1]);
        assert_eq!(ea.len(), eb.len());
        for pair in ea.chunks(2).zip(eb.chunks(2)) {
            assert_eq!(pair.0[0], pair.1[1]);
            assert_eq!(pair.0[1], pair.1[0]);
        }
    }

    #[test]
    fn test_with_generators_derives_constraint_length() {
        let enc = ConvolutionalEncoder::with_generators(&[0o7, 0o5]).unwrap();
        assert_eq!(enc.constraint_length(), 3);
        assert_eq!(enc.code_rate(), "1/2");

        let enc = ConvolutionalEncoder::with_generators(&[0o171, 0o133]).unwrap();
        assert_eq!(enc.constraint_length(), 7);
    }

    #[test]
    fn test_with_generators_validation() {
        assert!(matches!(
            ConvolutionalEncoder::with_generators(&[]),
            Err(FecError::Configuration(_))
        ));
        assert!(matches!(
            ConvolutionalEncoder::with_generators(&[0o7, 0]),
            Err(FecError::Configuration(_))
        ));
        assert!(matches!(
            ConvolutionalEncoder::with_generators(&[1]),
            Err(FecError::Configuration(_))
        ));
    }
}
