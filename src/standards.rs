//! CCSDS 131.0-B-3 standard registry.
//!
//! A read-only table of named FEC configurations. Every codec constructor in
//! this crate validates its standard name against this registry; an unknown
//! name fails with [`FecError::UnknownStandard`]. The tables are `const`,
//! built at compile time, and safe for unsynchronized concurrent reads.
//!
//! ## Convolutional standards
//!
//! | Name            | K | Rate | Generators (octal) |
//! |-----------------|---|------|--------------------|
//! | `CCSDS_k7_r12`  | 7 | 1/2  | 171, 133           |
//! | `CCSDS_k7_r13`  | 7 | 1/3  | 171, 133, 145      |
//! | `CCSDS_k5_r12`  | 5 | 1/2  | 31, 27             |
//!
//! ## Reed-Solomon standards
//!
//! | Name               | n   | k   | nsym | t  |
//! |--------------------|-----|-----|------|----|
//! | `CCSDS_rs255_223`  | 255 | 223 | 32   | 16 |
//! | `CCSDS_rs255_239`  | 255 | 239 | 16   | 8  |

use crate::error::FecError;

/// A named convolutional code configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvStandard {
    /// Registry key.
    pub name: &'static str,
    /// Constraint length K (register stages including the current input).
    pub constraint_length: usize,
    /// Generator polynomials as tap bitmasks. One parity output per entry;
    /// the list length fixes the code rate 1/r.
    pub generators: &'static [u64],
    /// Nominal code rate, e.g. "1/2".
    pub code_rate: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// A named Reed-Solomon code configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsStandard {
    /// Registry key.
    pub name: &'static str,
    /// Block length n.
    pub n: usize,
    /// Message length k.
    pub k: usize,
    /// Parity symbol count nsym = n - k.
    pub nsym: usize,
    /// Error-correction capability t = nsym / 2 symbol errors.
    pub t: usize,
    /// Human-readable description.
    pub description: &'static str,
}

/// CCSDS convolutional code standards.
pub const CONV_STANDARDS: &[ConvStandard] = &[
    ConvStandard {
        name: "CCSDS_k7_r12",
        constraint_length: 7,
        generators: &[0o171, 0o133],
        code_rate: "1/2",
        description: "K=7, Rate 1/2 - CCSDS 131.0-B-3",
    },
    ConvStandard {
        name: "CCSDS_k7_r13",
        constraint_length: 7,
        generators: &[0o171, 0o133, 0o145],
        code_rate: "1/3",
        description: "K=7, Rate 1/3 - CCSDS 131.0-B-3",
    },
    ConvStandard {
        name: "CCSDS_k5_r12",
        constraint_length: 5,
        generators: &[0o31, 0o27],
        code_rate: "1/2",
        description: "K=5, Rate 1/2 - Simpler variant",
    },
];

/// CCSDS Reed-Solomon code standards.
pub const RS_STANDARDS: &[RsStandard] = &[
    RsStandard {
        name: "CCSDS_rs255_223",
        n: 255,
        k: 223,
        nsym: 32,
        t: 16,
        description: "(255,223) RS code - CCSDS standard",
    },
    RsStandard {
        name: "CCSDS_rs255_239",
        n: 255,
        k: 239,
        nsym: 16,
        t: 8,
        description: "(255,239) RS code - Lighter FEC",
    },
];

/// Look up a convolutional standard by name (case-sensitive).
pub fn conv_standard(name: &str) -> Result<&'static ConvStandard, FecError> {
    CONV_STANDARDS
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| FecError::UnknownStandard(name.to_string()))
}

/// Look up a Reed-Solomon standard by name (case-sensitive).
pub fn rs_standard(name: &str) -> Result<&'static RsStandard, FecError> {
    RS_STANDARDS
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| FecError::UnknownStandard(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conv_lookup() {
        let s = conv_standard("CCSDS_k7_r12").unwrap();
        assert_eq!(s.constraint_length, 7);
        assert_eq!(s.generators, &[0o171, 0o133]);
        assert_eq!(s.code_rate, "1/2");
    }

    #[test]
    fn test_rs_lookup() {
        let s = rs_standard("CCSDS_rs255_223").unwrap();
        assert_eq!(s.n, 255);
        assert_eq!(s.k, 223);
        assert_eq!(s.nsym, 32);
        assert_eq!(s.t, 16);
    }

    #[test]
    fn test_unknown_names_fail() {
        assert_eq!(
            conv_standard("CCSDS_k9_r12"),
            Err(FecError::UnknownStandard("CCSDS_k9_r12".into()))
        );
        assert_eq!(
            rs_standard("rs255_223"),
            Err(FecError::UnknownStandard("rs255_223".into()))
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(conv_standard("ccsds_k7_r12").is_err());
    }

    #[test]
    fn test_parity_counts_consistent() {
        for s in RS_STANDARDS {
            assert_eq!(s.nsym, s.n - s.k);
            assert_eq!(s.t, s.nsym / 2);
        }
    }

    #[test]
    fn test_rate_matches_generator_count() {
        for s in CONV_STANDARDS {
            let expected = format!("1/{}", s.generators.len());
            assert_eq!(s.code_rate, expected);
        }
    }
}
