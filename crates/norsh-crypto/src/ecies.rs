//! # EC Integrated Encryption (ECIES)
//!
//! Public-key encryption over secp256k1.
//!
//! ## Construction
//!
//! 1. Fresh ephemeral key pair per message
//! 2. ECDH(ephemeral secret, recipient public key)
//! 3. HKDF-SHA256 over the shared x-coordinate, salted with the
//!    compressed ephemeral public key, 32-byte output
//! 4. AES-256-GCM with a random 96-bit nonce
//!
//! ## Wire layout
//!
//! ```text
//! | ephemeral pubkey (33, SEC1 compressed) | nonce (12) | ciphertext ‖ tag (n + 16) |
//! ```

use crate::ecdsa::random_secret_key;
use crate::errors::CryptoError;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use k256::elliptic_curve::ecdh::diffie_hellman;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Scheme identifier.
pub const ENCRYPTION_SCHEME: &str = "ECIES-secp256k1-HKDF-SHA256-AES-256-GCM";

/// Compressed SEC1 point length.
const EPHEMERAL_KEY_LEN: usize = 33;

/// AES-GCM nonce length.
const NONCE_LEN: usize = 12;

/// AES-GCM tag length.
const TAG_LEN: usize = 16;

/// HKDF info label binding derived keys to this scheme.
const KDF_INFO: &[u8] = b"norsh/ecies/secp256k1/aes-256-gcm";

/// Smallest well-formed ciphertext (empty plaintext).
pub const MIN_CIPHERTEXT_LEN: usize = EPHEMERAL_KEY_LEN + NONCE_LEN + TAG_LEN;

/// Encrypt `plaintext` to `recipient`.
///
/// # Errors
///
/// [`CryptoError::Internal`] if the RNG or the cipher fails.
pub fn seal(recipient: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let ephemeral = random_secret_key()?;
    let ephemeral_public = ephemeral.public_key().to_encoded_point(true);
    let key = derive_key(&ephemeral, recipient, ephemeral_public.as_bytes())?;

    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| CryptoError::internal("Error encrypting data", e))?;

    let cipher = Aes256Gcm::new_from_slice(&key[..])
        .map_err(|_| CryptoError::internal_msg("Error encrypting data: bad key length"))?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| CryptoError::internal_msg("Error encrypting data"))?;

    let mut out = Vec::with_capacity(EPHEMERAL_KEY_LEN + NONCE_LEN + ciphertext.len());
    out.extend_from_slice(ephemeral_public.as_bytes());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt a [`seal`] output with the recipient's secret key.
///
/// # Errors
///
/// [`CryptoError::Internal`] for truncated input, an invalid ephemeral
/// point, the wrong key, or tampered ciphertext.
pub fn open(recipient: &SecretKey, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if data.len() < MIN_CIPHERTEXT_LEN {
        return Err(CryptoError::internal_msg(format!(
            "Error decrypting data: ciphertext too short ({} < {MIN_CIPHERTEXT_LEN})",
            data.len()
        )));
    }

    let (ephemeral, rest) = data.split_at(EPHEMERAL_KEY_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

    let ephemeral_public = PublicKey::from_sec1_bytes(ephemeral)
        .map_err(|e| CryptoError::internal("Error decrypting data: bad ephemeral key", e))?;
    let key = derive_key(recipient, &ephemeral_public, ephemeral)?;

    let cipher = Aes256Gcm::new_from_slice(&key[..])
        .map_err(|_| CryptoError::internal_msg("Error decrypting data: bad key length"))?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::internal_msg("Error decrypting data"))
}

fn derive_key(
    secret: &SecretKey,
    peer: &PublicKey,
    salt: &[u8],
) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
    let shared = diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());

    let mut key = Zeroizing::new([0u8; 32]);
    shared
        .extract::<Sha256>(Some(salt))
        .expand(KDF_INFO, &mut key[..])
        .map_err(|_| CryptoError::internal_msg("Key derivation failed"))?;
    Ok(key)
}
