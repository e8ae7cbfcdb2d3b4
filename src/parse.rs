//! Textual test-vector parsing.
//!
//! Human-entered test vectors arrive as strings at the report/tooling
//! boundary: bit sequences as '0'/'1' characters (optionally comma- or
//! space-separated) and generator polynomials as comma-separated octal
//! integers. Malformed input fails with [`FecError::Parse`]; nothing is
//! parsed partially.

use crate::error::FecError;

/// Parse a bit sequence from text.
///
/// Accepts either a compact form (`"10110"`, spaces ignored) or a
/// comma-separated form (`"1, 0, 1, 1, 0"`). Any character other than '0'
/// or '1' is an error.
pub fn parse_bits(input: &str) -> Result<Vec<u8>, FecError> {
    if input.contains(',') {
        input
            .split(',')
            .map(|tok| match tok.trim() {
                "0" => Ok(0),
                "1" => Ok(1),
                other => Err(FecError::Parse(format!("invalid bit token: {:?}", other))),
            })
            .collect()
    } else {
        input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(FecError::Parse(format!("invalid bit character: {:?}", other))),
            })
            .collect()
    }
}

/// Parse a comma-separated list of octal generator polynomials.
///
/// The count of values determines the code rate 1/r (e.g. `"171,133"` is a
/// rate-1/2 generator set). Values are octal without a `0o` prefix, matching
/// the notation used in the CCSDS standard documents. Zero polynomials are
/// rejected: a generator with no taps produces a dead output stream.
pub fn parse_generators(input: &str) -> Result<Vec<u64>, FecError> {
    let gens: Vec<u64> = input
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            u64::from_str_radix(tok, 8)
                .map_err(|_| FecError::Parse(format!("invalid octal generator: {:?}", tok)))
        })
        .collect::<Result<_, _>>()?;

    if gens.contains(&0) {
        return Err(FecError::Parse("generator polynomial must be non-zero".to_string()));
    }
    Ok(gens)
}

/// Render a bit sequence in the compact textual form [`parse_bits`] accepts.
pub fn format_bits(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b & 1 == 1 { '1' } else { '0' }).collect()
}
