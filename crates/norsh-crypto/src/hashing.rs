//! # Hashing
//!
//! SHA-256 is the digest every signature in the platform is computed over.
//! SHA3-256 is available as the secondary algorithm for content identifiers.
//!
//! Both are unkeyed and deterministic: identical bytes always give an
//! identical digest, across calls and across processes.

use crate::codec::bytes_to_hex;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

/// 256-bit digest output.
pub type Hash = [u8; 32];

/// Digest algorithms offered by the hasher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-256 (signing digest)
    #[default]
    Sha256,
    /// SHA3-256
    Sha3_256,
}

impl HashAlgorithm {
    /// Hash `data` with this algorithm.
    pub fn digest(self, data: &[u8]) -> Hash {
        match self {
            HashAlgorithm::Sha256 => sha256(data),
            HashAlgorithm::Sha3_256 => sha3_256(data),
        }
    }

    /// Hash `data` and hex-encode the result.
    pub fn digest_hex(self, data: &[u8]) -> String {
        bytes_to_hex(&self.digest(data))
    }
}

/// Stateful SHA-256 hasher for input that arrives in pieces.
#[derive(Clone, Default)]
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash. The hasher is left untouched.
    pub fn finalize(&self) -> Hash {
        self.inner.clone().finalize().into()
    }

    /// Reset hasher for reuse.
    pub fn reset(&mut self) {
        Digest::reset(&mut self.inner);
    }
}

/// SHA-256 of `data` (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hex-encoded SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    bytes_to_hex(&sha256(data))
}

/// SHA3-256 of `data` (one-shot).
pub fn sha3_256(data: &[u8]) -> Hash {
    Sha3_256::digest(data).into()
}

/// Hex-encoded SHA3-256 of `data`.
pub fn sha3_256_hex(data: &[u8]) -> String {
    bytes_to_hex(&sha3_256(data))
}
