//! Bit Packing and Unpacking
//!
//! Conversion between byte sequences and their MSB-first bit sequences.
//! These are the "glue" operations between the byte-oriented Reed-Solomon
//! layer and the bit-oriented convolutional encoder.
//!
//! Bits are carried as one `u8` per bit with value 0 or 1, in transmission
//! order.
//!
//! ## Padding asymmetry
//!
//! [`bytes_to_bits`] is lossless: output length is always `8 * input.len()`.
//! [`bits_to_bytes`] zero-fills the **low-order** bits of a trailing partial
//! group, so the two are exact inverses only when the bit count is a multiple
//! of 8. The padding is one-directional on purpose: a convolutional output of
//! length `r * (L + K - 1)` rarely lands on a byte boundary, and the final
//! frame size reported by the concatenation pipeline includes that padding.
//!
//! ## Example
//!
//! ```rust
//! use ccsds_fec::bit_packing::{bytes_to_bits, bits_to_bytes};
//!
//! let bits = bytes_to_bits(&[0b1011_0010]);
//! assert_eq!(bits, vec![1, 0, 1, 1, 0, 0, 1, 0]);
//! assert_eq!(bits_to_bytes(&bits), vec![0b1011_0010]);
//!
//! // 5 bits pack into one zero-padded byte
//! assert_eq!(bits_to_bytes(&[1, 0, 1, 1, 1]), vec![0b1011_1000]);
//! ```

/// Unpack bytes into individual bits, MSB first.
///
/// Output length is exactly `8 * input.len()`.
pub fn bytes_to_bits(input: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in 0..8 {
            bits.push((byte >> (7 - i)) & 1);
        }
    }
    bits
}

/// Pack bits into bytes, MSB first, zero-filling a trailing partial group.
///
/// Output length is `ceil(input.len() / 8)`. Bit values other than 0 are
/// treated as 1.
pub fn bits_to_bytes(input: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(input.len().div_ceil(8));
    for chunk in input.chunks(8) {
        let mut byte = 0u8;
        for &bit in chunk {
            byte = (byte << 1) | (bit & 1);
        }
        // Missing low-order bits of the final group are zero
        byte <<= 8 - chunk.len();
        bytes.push(byte);
    }
    bytes
}
