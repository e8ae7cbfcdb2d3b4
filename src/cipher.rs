//! AES-256-CBC confidentiality wrapper.
//!
//! A thin wrapper over the `aes`/`cbc` primitives for encrypting payloads
//! before FEC encoding. This is a consumed primitive, not original design:
//! the cipher itself is a black box and no key management is provided.
//!
//! ## Format
//!
//! - The key string's UTF-8 bytes are space-padded or truncated to 32 bytes
//!   to form the AES-256 key.
//! - A random 16-byte IV is generated per encryption.
//! - Plaintext is PKCS#7-padded to the 16-byte block size.
//! - Output is `IV || ciphertext`; decryption expects the same layout.
//!
//! ## Example
//!
//! ```rust
//! use ccsds_fec::cipher;
//!
//! let sealed = cipher::encrypt(b"telemetry frame", "ground-station-key");
//! let opened = cipher::decrypt(&sealed, "ground-station-key").unwrap();
//! assert_eq!(opened, b"telemetry frame");
//! ```

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// IV length prepended to every ciphertext.
pub const IV_LEN: usize = 16;

const KEY_LEN: usize = 32;

/// Cipher error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Input shorter than the IV, or not a whole number of blocks.
    InvalidDataLength,
    /// Block decryption produced invalid PKCS#7 padding (wrong key or
    /// corrupted ciphertext).
    InvalidPadding,
}

impl std::fmt::Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherError::InvalidDataLength => write!(f, "Invalid data length"),
            CipherError::InvalidPadding => write!(f, "Invalid padding"),
        }
    }
}

impl std::error::Error for CipherError {}

/// Derive the AES-256 key from a key string: UTF-8 bytes, space-padded or
/// truncated to 32 bytes.
fn derive_key(key: &str) -> [u8; KEY_LEN] {
    let mut out = [b' '; KEY_LEN];
    let bytes = key.as_bytes();
    let n = bytes.len().min(KEY_LEN);
    out[..n].copy_from_slice(&bytes[..n]);
    out
}

/// Encrypt `plaintext` with AES-256-CBC under a fresh random IV.
///
/// Returns `IV || ciphertext`.
pub fn encrypt(plaintext: &[u8], key: &str) -> Vec<u8> {
    let key = derive_key(key);
    let mut iv = [0u8; IV_LEN];
    rand::thread_rng().fill_bytes(&mut iv);

    let ciphertext =
        Aes256CbcEnc::new(&key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    out
}

/// Decrypt an `IV || ciphertext` payload produced by [`encrypt`].
pub fn decrypt(data: &[u8], key: &str) -> Result<Vec<u8>, CipherError> {
    if data.len() < IV_LEN + 16 || (data.len() - IV_LEN) % 16 != 0 {
        return Err(CipherError::InvalidDataLength);
    }
    let key = derive_key(key);
    let (iv, ciphertext) = data.split_at(IV_LEN);
    let iv: [u8; IV_LEN] = iv.try_into().map_err(|_| CipherError::InvalidDataLength)?;

    Aes256CbcDec::new(&key.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CipherError::InvalidPadding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let sealed = encrypt(b"Hello, space!", "secret key");
        assert_eq!(sealed.len(), IV_LEN + 16); // 13 bytes pad to one block
        let opened = decrypt(&sealed, "secret key").unwrap();
        assert_eq!(opened, b"Hello, space!");
    }

    #[test]
    fn test_roundtrip_long_key_truncated() {
        let key = "k".repeat(100);
        let sealed = encrypt(b"payload", &key);
        assert_eq!(decrypt(&sealed, &key).unwrap(), b"payload");
        // Keys agreeing on the first 32 bytes are equivalent
        assert_eq!(decrypt(&sealed, &"k".repeat(32)).unwrap(), b"payload");
    }

    #[test]
    fn test_empty_plaintext_pads_to_one_block() {
        let sealed = encrypt(b"", "key");
        assert_eq!(sealed.len(), IV_LEN + 16);
        assert_eq!(decrypt(&sealed, "key").unwrap(), b"");
    }

    #[test]
    fn test_fresh_iv_per_call() {
        let a = encrypt(b"same message", "key");
        let b = encrypt(b"same message", "key");
        assert_ne!(a[..IV_LEN], b[..IV_LEN]);
        assert_ne!(a[IV_LEN..], b[IV_LEN..]);
    }

    #[test]
    fn test_wrong_key_fails() {
        let sealed = encrypt(b"classified", "right key");
        // Either the padding check trips or the recovered bytes are garbage;
        // a wrong key never yields the plaintext back
        match decrypt(&sealed, "wrong key") {
            Ok(recovered) => assert_ne!(recovered, b"classified"),
            Err(e) => assert_eq!(e, CipherError::InvalidPadding),
        }
    }

    #[test]
    fn test_truncated_input_rejected() {
        let sealed = encrypt(b"data", "key");
        assert_eq!(decrypt(&sealed[..10], "key"), Err(CipherError::InvalidDataLength));
        assert_eq!(decrypt(&sealed[..sealed.len() - 1], "key"), Err(CipherError::InvalidDataLength));
    }
}
