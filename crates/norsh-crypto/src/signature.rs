//! # Signature Facade
//!
//! The surface other subsystems call. Keys and signatures are passed as
//! strings in any encoding [`decode_flexible`] understands; signatures come
//! back as lowercase hex.
//!
//! ## Flow
//!
//! ```text
//! fields ──▶ CanonicalMessage ──▶ SHA-256 ──▶ hex hash
//!                                              │
//! key string ──▶ decode_flexible ──▶ engine ──▶ sign / verify
//! ```
//!
//! ## Failure policy
//!
//! - `sign` / `sign_hash`: blank private key is [`CryptoError::InvalidArgument`];
//!   anything after that is [`CryptoError::Internal`] wrapping the cause.
//! - `verify` / `verify_hash`: return `false` on every failure. Each failure
//!   path is mapped to a [`Rejection`] and logged at debug level.
//!
//! Field canonicalization has no separators; see [`crate::canonical`] for the
//! caller's obligations.

use crate::canonical::{CanonicalMessage, Field};
use crate::codec::{bytes_to_hex, decode_flexible, hex_to_bytes};
use crate::ecdsa::CryptographyEngine;
use crate::errors::{CryptoError, Rejection};
use tracing::debug;

/// Inbound port for signing and verification.
///
/// Implemented by [`SignatureService`]; consumers can depend on the trait to
/// substitute a test double.
pub trait SignatureApi: Send + Sync {
    /// Sign the canonical form of `fields`.
    fn sign(&self, private_key: &str, fields: &[Field]) -> Result<String, CryptoError>;

    /// Sign an already computed hex digest.
    fn sign_hash(&self, private_key: &str, hash_hex: &str) -> Result<String, CryptoError>;

    /// Verify a signature over the canonical form of `fields`.
    fn verify(&self, public_key: &str, signature: &str, fields: &[Field]) -> bool;

    /// Verify a signature over an already computed hex digest.
    fn verify_hash(&self, public_key: &str, signature: &str, hash_hex: &str) -> bool;
}

/// Default [`SignatureApi`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureService;

impl SignatureService {
    /// Create a new signature service.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureApi for SignatureService {
    fn sign(&self, private_key: &str, fields: &[Field]) -> Result<String, CryptoError> {
        sign(private_key, fields)
    }

    fn sign_hash(&self, private_key: &str, hash_hex: &str) -> Result<String, CryptoError> {
        sign_hash(private_key, hash_hex)
    }

    fn verify(&self, public_key: &str, signature: &str, fields: &[Field]) -> bool {
        verify(public_key, signature, fields)
    }

    fn verify_hash(&self, public_key: &str, signature: &str, hash_hex: &str) -> bool {
        verify_hash(public_key, signature, hash_hex)
    }
}

/// Sign `fields` with a private key given as hex, Base64 or PEM.
///
/// # Errors
///
/// - [`CryptoError::InvalidArgument`] if `private_key` is blank
/// - [`CryptoError::Internal`] if decoding, key reconstruction or signing fails
pub fn sign(private_key: &str, fields: &[Field]) -> Result<String, CryptoError> {
    sign_hash(private_key, &CanonicalMessage::new(fields).digest_hex())
}

/// Sign a precomputed hex digest without rehashing the message.
///
/// Used when the canonical hash already serves as a content identifier.
pub fn sign_hash(private_key: &str, hash_hex: &str) -> Result<String, CryptoError> {
    if private_key.trim().is_empty() {
        return Err(CryptoError::argument("Private key must not be null."));
    }

    sign_decoded(private_key, hash_hex)
        .map_err(|e| CryptoError::internal("Failed to sign data.", e))
}

fn sign_decoded(private_key: &str, hash_hex: &str) -> Result<String, CryptoError> {
    let digest = hex_to_bytes(hash_hex)?;
    if digest.is_empty() {
        return Err(CryptoError::argument("Hash must not be empty."));
    }
    let engine = CryptographyEngine::from_private_key(&decode_flexible(private_key)?)?;

    let signature = engine.sign(&digest)?;
    Ok(bytes_to_hex(&signature))
}

/// Verify `signature` over `fields` against a public key.
///
/// Never fails: malformed input of any kind is `false`.
pub fn verify(public_key: &str, signature: &str, fields: &[Field]) -> bool {
    verify_hash(
        public_key,
        signature,
        &CanonicalMessage::new(fields).digest_hex(),
    )
}

/// Verify `signature` over a precomputed hex digest.
///
/// Never fails: malformed input of any kind is `false`.
pub fn verify_hash(public_key: &str, signature: &str, hash_hex: &str) -> bool {
    match check_hash(public_key, signature, hash_hex) {
        Ok(()) => true,
        Err(reason) => {
            debug!(%reason, "signature rejected");
            false
        }
    }
}

/// Every step from decoding through verification, with its rejection reason.
fn check_hash(public_key: &str, signature: &str, hash_hex: &str) -> Result<(), Rejection> {
    let digest = hex_to_bytes(hash_hex).map_err(|_| Rejection::MalformedHash)?;
    if digest.is_empty() {
        return Err(Rejection::MalformedHash);
    }
    let public_key = decode_flexible(public_key).map_err(|_| Rejection::MalformedPublicKey)?;
    let signature = decode_flexible(signature).map_err(|_| Rejection::MalformedSignature)?;

    let engine = CryptographyEngine::from_public_key(&public_key)
        .map_err(|_| Rejection::MalformedPublicKey)?;
    engine.check_signature(&digest, &signature)
}
