//! Repetition stand-ins for the turbo and LDPC codecs.
//!
//! The system this crate models ships "turbo" and "LDPC" encoders that are
//! plain bit repetition sized to the nominal code rate, not real iterative
//! codes; the comparison harness depends on exactly that behavior, so it is
//! reproduced here bit-for-bit. Real parallel-concatenated or
//! belief-propagation codecs are out of scope.
//!
//! [`TurboEncoder`] doubles the bit stream (nominal rate 1/2).
//! [`LdpcEncoder`] repeats it `den / num` times for a textual rate
//! `"num/den"`.

use serde::Serialize;

use crate::bit_packing::{bits_to_bytes, bytes_to_bits};
use crate::error::FecError;

/// Default turbo frame size in bits (CCSDS 131.0-B-3 largest frame).
pub const DEFAULT_TURBO_FRAME_SIZE: usize = 6144;

/// Statistics for a turbo-placeholder encode.
#[derive(Debug, Clone, Serialize)]
pub struct TurboStats {
    /// Data bits before repetition.
    pub original_bits: usize,
    /// Bits after repetition.
    pub encoded_bits: usize,
    /// Output length in bytes after packing.
    pub output_length: usize,
    /// Nominal code rate of the emulated code.
    pub code_rate: String,
    /// Configured frame size in bits.
    pub frame_size: usize,
}

/// Statistics for an LDPC-placeholder encode.
#[derive(Debug, Clone, Serialize)]
pub struct LdpcStats {
    /// Data bits before repetition.
    pub original_bits: usize,
    /// Bits after repetition.
    pub encoded_bits: usize,
    /// Output length in bytes after packing.
    pub output_length: usize,
    /// Nominal code rate of the emulated code.
    pub code_rate: String,
}

/// Turbo code placeholder: doubles the input bit stream.
#[derive(Debug, Clone)]
pub struct TurboEncoder {
    frame_size: usize,
}

impl TurboEncoder {
    /// Create a placeholder with the given nominal frame size (reported in
    /// stats only; the repetition ignores frame boundaries).
    pub fn new(frame_size: usize) -> Self {
        Self { frame_size }
    }

    /// Nominal frame size in bits.
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Encode by doubling the bit stream and repacking to bytes.
    pub fn encode(&self, data: &[u8]) -> (Vec<u8>, TurboStats) {
        let bits = bytes_to_bits(data);
        let mut encoded = Vec::with_capacity(bits.len() * 2);
        encoded.extend_from_slice(&bits);
        encoded.extend_from_slice(&bits);
        let output = bits_to_bytes(&encoded);

        let stats = TurboStats {
            original_bits: bits.len(),
            encoded_bits: encoded.len(),
            output_length: output.len(),
            code_rate: "1/2".to_string(),
            frame_size: self.frame_size,
        };
        (output, stats)
    }
}

impl Default for TurboEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_TURBO_FRAME_SIZE)
    }
}

/// LDPC code placeholder: repeats the bit stream by a rate-derived
/// multiplier.
#[derive(Debug, Clone)]
pub struct LdpcEncoder {
    code_rate: String,
    multiplier: usize,
}

impl LdpcEncoder {
    /// Create a placeholder for a textual code rate such as `"1/2"` or
    /// `"1/3"`.
    ///
    /// Fails with [`FecError::Parse`] for malformed rate strings and
    /// [`FecError::Configuration`] when the rate does not reduce to an
    /// integer repetition multiplier.
    pub fn new(code_rate: &str) -> Result<Self, FecError> {
        let (num, den) = code_rate
            .split_once('/')
            .ok_or_else(|| FecError::Parse(format!("invalid code rate: {:?}", code_rate)))?;
        let num: usize = num
            .trim()
            .parse()
            .map_err(|_| FecError::Parse(format!("invalid code rate numerator: {:?}", num)))?;
        let den: usize = den
            .trim()
            .parse()
            .map_err(|_| FecError::Parse(format!("invalid code rate denominator: {:?}", den)))?;

        if num == 0 || den < num || den % num != 0 {
            return Err(FecError::Configuration(format!(
                "code rate {}/{} has no integer repetition multiplier",
                num, den
            )));
        }

        Ok(Self {
            code_rate: format!("{}/{}", num, den),
            multiplier: den / num,
        })
    }

    /// Nominal code rate string.
    pub fn code_rate(&self) -> &str {
        &self.code_rate
    }

    /// Repetition multiplier derived from the rate.
    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Encode by repeating the bit stream `multiplier` times and repacking.
    pub fn encode(&self, data: &[u8]) -> (Vec<u8>, LdpcStats) {
        let bits = bytes_to_bits(data);
        let mut encoded = Vec::with_capacity(bits.len() * self.multiplier);
        for _ in 0..self.multiplier {
            encoded.extend_from_slice(&bits);
        }
        let output = bits_to_bytes(&encoded);

        let stats = LdpcStats {
            original_bits: bits.len(),
            encoded_bits: encoded.len(),
            output_length: output.len(),
            code_rate: self.code_rate.clone(),
        };
        (output, stats)
    }
}
