//! # Norsh Crypto - Signing and Verification Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `codec` | hex, Base64, PEM | Key/signature string forms |
//! | `hashing` | SHA-256, SHA3-256 | Digests |
//! | `canonical` | field concatenation | Signed message bytes |
//! | `ecdsa` | secp256k1, SHA256withECDSA | Key pairs, sign, verify |
//! | `ecies` | ECDH + HKDF-SHA256 + AES-256-GCM | Public-key encryption |
//! | `signature` | all of the above | Entry point for other subsystems |
//!
//! ## Quick start
//!
//! ```
//! use norsh_crypto::{fields, signature, CryptographyEngine};
//!
//! let engine = CryptographyEngine::generate()?;
//! let private_pem = engine.export_private_pem()?;
//! let public_pem = engine.export_public_pem()?;
//!
//! let sig = signature::sign(&private_pem, &fields!["alice", 100, true])?;
//! assert!(signature::verify(&public_pem, &sig, &fields!["alice", 100, true]));
//! # Ok::<(), norsh_crypto::CryptoError>(())
//! ```
//!
//! ## Security Properties
//!
//! - **Fixed parameters**: curve, signature and encryption algorithms are
//!   constants, never negotiated
//! - **Fail-closed verification**: every malformed input verifies as `false`
//! - **Immutable engines**: keys never change after construction
//! - **Secret hygiene**: private key material is zeroized on drop and
//!   redacted from `Debug`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod codec;
pub mod ecdsa;
pub mod ecies;
pub mod errors;
pub mod hashing;
pub mod signature;

// Re-exports
pub use canonical::{CanonicalMessage, Field};
pub use codec::{
    base64_to_bytes, base64_to_hex, bytes_to_base64, bytes_to_hex, decode_flexible,
    hex_to_base64, hex_to_bytes, is_flexible_encoding, normalize_pem,
};
pub use ecdsa::{CryptographyEngine, CURVE_NAME, SIGNATURE_ALGORITHM};
pub use ecies::ENCRYPTION_SCHEME;
pub use errors::{CryptoError, KeyKind, Rejection};
pub use hashing::{sha256, sha256_hex, sha3_256, sha3_256_hex, Hash, HashAlgorithm, Sha256Hasher};
pub use signature::{SignatureApi, SignatureService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
