//! Reed-Solomon error correction codes over GF(2^8).
//!
//! Systematic Reed-Solomon encoder and decoder using the Berlekamp-Massey
//! algorithm, Chien search, and Forney algorithm. The field uses primitive
//! polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D), the standard choice for
//! CCSDS space telemetry, DVB-S, QR codes, and Data Matrix.
//!
//! Two layers are exposed:
//!
//! - [`ReedSolomonEncoder`] / [`ReedSolomonDecoder`]: the raw engine,
//!   parameterized by the parity symbol count `nsym`. Messages may be
//!   shorter than `255 - nsym` (shortened code); longer messages fail with
//!   [`FecError::MessageTooLong`].
//! - [`RsBlockCodec`]: a standard-driven codec that chunks arbitrary-length
//!   data into k-byte messages of an RS(n, k) standard from the registry and
//!   reports encode/decode statistics.
//!
//! ## Example
//!
//! ```rust
//! use ccsds_fec::reed_solomon::{ReedSolomonEncoder, ReedSolomonDecoder};
//!
//! let enc = ReedSolomonEncoder::new(32).unwrap();
//! let dec = ReedSolomonDecoder::new(32).unwrap();
//!
//! let data: Vec<u8> = (0..223).map(|i| i as u8).collect();
//! let codeword = enc.encode(&data).unwrap();
//! assert_eq!(codeword.len(), 255);
//!
//! // Corrupt 5 symbols
//! let mut received = codeword;
//! for i in 0..5 {
//!     received[i * 10] ^= 0xAA;
//! }
//!
//! let outcome = dec.decode(&received).unwrap();
//! assert_eq!(outcome.errors_corrected, 5);
//! assert_eq!(outcome.message, (0..223).map(|i| i as u8).collect::<Vec<_>>());
//! ```

use serde::Serialize;

use crate::error::FecError;
use crate::standards::{rs_standard, RsStandard};

// ---------------------------------------------------------------------------
// GF(2^8) arithmetic with primitive polynomial 0x11D
// ---------------------------------------------------------------------------

const PRIM_POLY: u16 = 0x11D;
const GF_ORDER: usize = 255; // 2^8 - 1

/// Exponential table extended to 512 entries for modular-free lookup.
const GF_EXP: [u8; 512] = {
    let mut t = [0u8; 512];
    let mut v: u16 = 1;
    let mut i = 0;
    while i < 512 {
        t[i] = v as u8;
        v <<= 1;
        if v & 0x100 != 0 {
            v ^= PRIM_POLY;
        }
        i += 1;
    }
    t
};

/// Logarithm table. `GF_LOG[0]` is unused (set to 0).
const GF_LOG: [u8; 256] = {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < GF_ORDER {
        t[GF_EXP[i] as usize] = i as u8;
        i += 1;
    }
    t
};

#[inline(always)]
fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        0
    } else {
        GF_EXP[GF_LOG[a as usize] as usize + GF_LOG[b as usize] as usize]
    }
}

#[inline]
fn gf_div(a: u8, b: u8) -> u8 {
    if a == 0 {
        0
    } else {
        assert_ne!(b, 0, "GF division by zero");
        GF_EXP[(GF_LOG[a as usize] as usize + GF_ORDER - GF_LOG[b as usize] as usize) % GF_ORDER]
    }
}

#[inline]
fn gf_pow(n: usize) -> u8 {
    GF_EXP[n % GF_ORDER]
}

// ---------------------------------------------------------------------------
// Polynomial operations -- ascending order: p[i] = coefficient of x^i
// ---------------------------------------------------------------------------

fn poly_eval(p: &[u8], x: u8) -> u8 {
    let mut acc: u8 = 0;
    for &c in p.iter().rev() {
        acc = gf_add(gf_mul(acc, x), c);
    }
    acc
}

fn poly_mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }
    let mut out = vec![0u8; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai != 0 {
            for (j, &bj) in b.iter().enumerate() {
                out[i + j] ^= gf_mul(ai, bj);
            }
        }
    }
    out
}

fn poly_add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = vec![0u8; len];
    for (i, &v) in a.iter().enumerate() {
        out[i] ^= v;
    }
    for (i, &v) in b.iter().enumerate() {
        out[i] ^= v;
    }
    out
}

fn poly_scale(p: &[u8], s: u8) -> Vec<u8> {
    p.iter().map(|&c| gf_mul(c, s)).collect()
}

/// Formal derivative in GF(2^m): odd-degree terms survive, even vanish.
fn poly_deriv(p: &[u8]) -> Vec<u8> {
    if p.len() <= 1 {
        return vec![0];
    }
    let mut d = Vec::with_capacity(p.len() - 1);
    for i in 1..p.len() {
        if i & 1 == 1 {
            d.push(p[i]);
        } else {
            d.push(0);
        }
    }
    while d.len() > 1 && *d.last().unwrap() == 0 {
        d.pop();
    }
    d
}

// ---------------------------------------------------------------------------
// Generator polynomial
// ---------------------------------------------------------------------------

/// g(x) = prod_{i=1}^{nsym} (x - alpha^i).
/// Ascending order: g[0] is constant, g[nsym] = 1.
fn build_generator(nsym: usize) -> Vec<u8> {
    let mut g = vec![gf_pow(1), 1]; // (x + alpha^1)
    for i in 2..=nsym {
        g = poly_mul(&g, &[gf_pow(i), 1]);
    }
    g
}

fn check_nsym(nsym: usize) -> Result<(), FecError> {
    if nsym == 0 || nsym >= GF_ORDER {
        return Err(FecError::Configuration(format!(
            "parity symbol count must be in 1..{}, got {}",
            GF_ORDER, nsym
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Reed-Solomon systematic encoder with `nsym` parity symbols.
///
/// Codeword = `[message | parity_0 .. parity_{nsym-1}]`. Messages shorter
/// than `255 - nsym` produce a shortened codeword.
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    nsym: usize,
    gen: Vec<u8>, // ascending order
}

impl ReedSolomonEncoder {
    /// Create an encoder appending `nsym` parity symbols.
    pub fn new(nsym: usize) -> Result<Self, FecError> {
        check_nsym(nsym)?;
        Ok(Self { nsym, gen: build_generator(nsym) })
    }

    /// Parity symbols appended per message.
    pub fn nsym(&self) -> usize {
        self.nsym
    }

    /// Maximum correctable symbol errors t = nsym / 2.
    pub fn max_errors(&self) -> usize {
        self.nsym / 2
    }

    /// Maximum message length for a (255, k) code: `255 - nsym`.
    pub fn max_message_len(&self) -> usize {
        GF_ORDER - self.nsym
    }

    /// Encode `message` into the systematic codeword `message || parity`.
    ///
    /// Fails with [`FecError::MessageTooLong`] when the message exceeds
    /// `255 - nsym` bytes.
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>, FecError> {
        if message.len() > self.max_message_len() {
            return Err(FecError::MessageTooLong {
                len: message.len(),
                max: self.max_message_len(),
            });
        }

        // LFSR-based systematic encoding: divide M(x) * x^nsym by g(x); the
        // remainder is the parity, appended after the message.
        let mut feedback = vec![0u8; self.nsym];
        for &byte in message {
            let d = gf_add(byte, feedback[self.nsym - 1]);
            for j in (1..self.nsym).rev() {
                feedback[j] = gf_add(feedback[j - 1], gf_mul(d, self.gen[j]));
            }
            feedback[0] = gf_mul(d, self.gen[0]);
        }

        let mut codeword = Vec::with_capacity(message.len() + self.nsym);
        codeword.extend_from_slice(message);
        // feedback[nsym-1] is the highest-power remainder coefficient, which
        // follows right after the message
        for j in (0..self.nsym).rev() {
            codeword.push(feedback[j]);
        }
        Ok(codeword)
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Result of a successful Reed-Solomon decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsDecodeOutcome {
    /// The corrected message (codeword minus parity).
    pub message: Vec<u8>,
    /// Number of symbol errors corrected.
    pub errors_corrected: usize,
    /// Byte offsets of the corrected symbols within the codeword.
    pub error_positions: Vec<usize>,
}

/// Reed-Solomon decoder using Berlekamp-Massey, Chien search, and Forney.
///
/// Corrects up to t = nsym / 2 symbol errors. Decoding never returns guessed
/// data: past the correction capability it fails with
/// [`FecError::TooManyErrors`].
#[derive(Debug, Clone)]
pub struct ReedSolomonDecoder {
    nsym: usize,
}

impl ReedSolomonDecoder {
    /// Create a decoder for codewords carrying `nsym` parity symbols.
    pub fn new(nsym: usize) -> Result<Self, FecError> {
        check_nsym(nsym)?;
        Ok(Self { nsym })
    }

    /// Maximum correctable symbol errors.
    pub fn max_errors(&self) -> usize {
        self.nsym / 2
    }

    /// Decode a (possibly shortened) codeword.
    ///
    /// The codeword length fixes the shortened block length n. A codeword
    /// shorter than the parity overhead fails with
    /// [`FecError::CodewordTooShort`]; one longer than the 255-symbol block
    /// length fails with [`FecError::CodewordTooLong`]. A parity-only
    /// codeword (`n == nsym`, the encoding of the empty message) decodes to
    /// the empty message.
    pub fn decode(&self, received: &[u8]) -> Result<RsDecodeOutcome, FecError> {
        let n = received.len();
        if n < self.nsym {
            return Err(FecError::CodewordTooShort { len: n, nsym: self.nsym });
        }
        if n > GF_ORDER {
            return Err(FecError::CodewordTooLong { len: n, max: GF_ORDER });
        }

        let mut corrected = received.to_vec();

        // --- Syndromes ---
        // The codeword polynomial is c(x) = c[0]*x^{n-1} + ... + c[n-1].
        // Syndromes: S_j = r(alpha^j) for j = 1..nsym, stored 0-indexed.
        let mut synd = vec![0u8; self.nsym];
        for (j, s) in synd.iter_mut().enumerate() {
            let a = gf_pow(j + 1);
            let mut val: u8 = 0;
            for &ri in corrected.iter() {
                val = gf_add(gf_mul(val, a), ri);
            }
            *s = val;
        }

        if synd.iter().all(|&s| s == 0) {
            corrected.truncate(n - self.nsym);
            return Ok(RsDecodeOutcome {
                message: corrected,
                errors_corrected: 0,
                error_positions: vec![],
            });
        }

        // --- Berlekamp-Massey ---
        // Find the error locator sigma(x), ascending coefficients, sigma[0]=1.
        let sigma = {
            let mut c_poly = vec![1u8]; // current
            let mut b_poly = vec![1u8]; // previous best
            let mut l: usize = 0;
            let mut delta_b: u8 = 1;
            let mut m: usize = 1;

            for step in 0..self.nsym {
                let mut delta: u8 = synd[step];
                for i in 1..c_poly.len() {
                    if step >= i {
                        delta ^= gf_mul(c_poly[i], synd[step - i]);
                    }
                }

                if delta == 0 {
                    m += 1;
                } else if 2 * l <= step {
                    let factor = gf_div(delta, delta_b);
                    let mut xm_b = vec![0u8; m];
                    xm_b.extend(poly_scale(&b_poly, factor));
                    let t_poly = poly_add(&c_poly, &xm_b);
                    b_poly = c_poly;
                    c_poly = t_poly;
                    l = step + 1 - l;
                    delta_b = delta;
                    m = 1;
                } else {
                    let factor = gf_div(delta, delta_b);
                    let mut xm_b = vec![0u8; m];
                    xm_b.extend(poly_scale(&b_poly, factor));
                    c_poly = poly_add(&c_poly, &xm_b);
                    m += 1;
                }
            }
            while c_poly.len() > 1 && *c_poly.last().unwrap() == 0 {
                c_poly.pop();
            }
            c_poly
        };

        let num_errors = sigma.len() - 1;
        if num_errors == 0 || num_errors > self.nsym / 2 {
            return Err(FecError::TooManyErrors);
        }

        // --- Chien search ---
        // Array position `pos` corresponds to power index n-1-pos, so
        // X_j^{-1} = alpha^{255 - (n-1) + pos}.
        let mut err_pos = Vec::with_capacity(num_errors);
        let mut err_x_inv = Vec::with_capacity(num_errors);
        for pos in 0..n {
            let x_inv = gf_pow(pos + GF_ORDER - (n - 1));
            if poly_eval(&sigma, x_inv) == 0 {
                err_pos.push(pos);
                err_x_inv.push(x_inv);
            }
        }

        if err_pos.len() != num_errors {
            return Err(FecError::TooManyErrors);
        }

        // --- Forney algorithm ---
        // Omega(x) = S(x) * Sigma(x) mod x^{nsym}; with first consecutive
        // root alpha^1 the magnitude is Omega(X^{-1}) / Sigma'(X^{-1}).
        let omega_full = poly_mul(&synd, &sigma);
        let omega: Vec<u8> = omega_full[..omega_full.len().min(self.nsym)].to_vec();
        let sigma_prime = poly_deriv(&sigma);

        for (idx, &pos) in err_pos.iter().enumerate() {
            let x_inv = err_x_inv[idx];
            let omega_val = poly_eval(&omega, x_inv);
            let sigma_p_val = poly_eval(&sigma_prime, x_inv);
            if sigma_p_val == 0 {
                return Err(FecError::TooManyErrors);
            }
            corrected[pos] ^= gf_div(omega_val, sigma_p_val);
        }

        corrected.truncate(n - self.nsym);
        Ok(RsDecodeOutcome {
            message: corrected,
            errors_corrected: err_pos.len(),
            error_positions: err_pos,
        })
    }
}

// ---------------------------------------------------------------------------
// Standard-driven block codec
// ---------------------------------------------------------------------------

/// Statistics reported alongside every [`RsBlockCodec`] encode.
#[derive(Debug, Clone, Serialize)]
pub struct RsEncodeStats {
    /// Input length in bytes.
    pub original_length: usize,
    /// Output length in bytes (input plus parity of every chunk).
    pub encoded_length: usize,
    /// Parity symbols per codeword (nsym).
    pub parity_symbols: usize,
    /// Correctable symbol errors per codeword (t).
    pub error_correction_capability: usize,
    /// Code rate "k/n".
    pub code_rate: String,
}

/// Statistics reported alongside every [`RsBlockCodec`] decode.
#[derive(Debug, Clone, Serialize)]
pub struct RsDecodeStats {
    /// Recovered message length in bytes.
    pub decoded_length: usize,
    /// Total symbol errors corrected across all chunks.
    pub errors_corrected: usize,
    /// Byte offsets of corrected symbols within the full input.
    pub error_positions: Vec<usize>,
}

/// Reed-Solomon codec bound to a named RS(n, k) standard from the registry.
///
/// Data of arbitrary length is split into k-byte message chunks; each chunk
/// is encoded independently into a (shortened, for the final chunk) codeword.
/// No zero-padding is applied, so `encoded_length = original_length +
/// nsym * num_chunks`.
#[derive(Debug, Clone)]
pub struct RsBlockCodec {
    standard: &'static RsStandard,
    encoder: ReedSolomonEncoder,
    decoder: ReedSolomonDecoder,
}

impl RsBlockCodec {
    /// Create a codec from a named standard in the registry.
    ///
    /// Fails with [`FecError::UnknownStandard`] for an unrecognized name.
    pub fn new(standard: &str) -> Result<Self, FecError> {
        let std = rs_standard(standard)?;
        Ok(Self {
            standard: std,
            encoder: ReedSolomonEncoder::new(std.nsym)?,
            decoder: ReedSolomonDecoder::new(std.nsym)?,
        })
    }

    /// The registry entry this codec was built from.
    pub fn standard(&self) -> &'static RsStandard {
        self.standard
    }

    /// Encode data, chunking into k-byte messages.
    ///
    /// Empty input still produces one parity-only codeword, matching the
    /// behavior of the reference chunked codec.
    pub fn encode(&self, data: &[u8]) -> Result<(Vec<u8>, RsEncodeStats), FecError> {
        let k = self.standard.k;
        let num_chunks = data.len().div_ceil(k).max(1);
        let mut encoded = Vec::with_capacity(data.len() + num_chunks * self.standard.nsym);

        if data.is_empty() {
            encoded.extend(self.encoder.encode(&[])?);
        } else {
            for chunk in data.chunks(k) {
                encoded.extend(self.encoder.encode(chunk)?);
            }
        }

        let stats = RsEncodeStats {
            original_length: data.len(),
            encoded_length: encoded.len(),
            parity_symbols: self.standard.nsym,
            error_correction_capability: self.standard.t,
            code_rate: format!("{}/{}", self.standard.k, self.standard.n),
        };
        Ok((encoded, stats))
    }

    /// Decode data, chunking into n-byte codewords (the final chunk may be
    /// a shortened codeword).
    ///
    /// Fails with [`FecError::TooManyErrors`] if any chunk exceeds the
    /// correction capability; no partial output is returned.
    pub fn decode(&self, data: &[u8]) -> Result<(Vec<u8>, RsDecodeStats), FecError> {
        let n = self.standard.n;
        let mut message = Vec::with_capacity(data.len());
        let mut errors_corrected = 0;
        let mut error_positions = Vec::new();

        for (index, chunk) in data.chunks(n).enumerate() {
            let outcome = self.decoder.decode(chunk)?;
            message.extend(outcome.message);
            errors_corrected += outcome.errors_corrected;
            error_positions.extend(outcome.error_positions.iter().map(|p| p + index * n));
        }

        let stats = RsDecodeStats {
            decoded_length: message.len(),
            errors_corrected,
            error_positions,
        };
        Ok((message, stats))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
