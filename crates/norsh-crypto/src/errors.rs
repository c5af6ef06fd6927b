//! Crypto error types.
//!
//! Two kinds of failure leave this crate:
//!
//! - [`CryptoError::InvalidArgument`]: the caller handed over something that
//!   fails a precondition checked before any cryptographic work (blank key,
//!   malformed hex or Base64).
//! - [`CryptoError::Internal`]: a primitive failed (key reconstruction,
//!   signing, encryption). The underlying cause is kept as the error source.
//!
//! Verification never produces either: see [`Rejection`].

use std::fmt;
use thiserror::Error;

/// Boxed underlying cause carried by [`CryptoError::Internal`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which half of a key pair a piece of key material is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// PKCS#8 encoded private key
    Private,
    /// X.509 SubjectPublicKeyInfo encoded public key
    Public,
}

impl KeyKind {
    /// Label used in PEM armor lines.
    pub fn pem_label(self) -> &'static str {
        match self {
            KeyKind::Private => "PRIVATE KEY",
            KeyKind::Public => "PUBLIC KEY",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Private => f.write_str("private key"),
            KeyKind::Public => f.write_str("public key"),
        }
    }
}

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Caller input failed a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A cryptographic primitive failed
    #[error("{context}")]
    Internal {
        /// What was being attempted
        context: String,
        /// Underlying cause, when the primitive reported one
        #[source]
        source: Option<BoxError>,
    },
}

impl CryptoError {
    /// Build an [`CryptoError::InvalidArgument`].
    pub fn argument(message: impl Into<String>) -> Self {
        CryptoError::InvalidArgument(message.into())
    }

    /// Build an [`CryptoError::Internal`] wrapping `source`.
    pub fn internal<E>(context: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        CryptoError::Internal {
            context: context.into(),
            source: Some(source.into()),
        }
    }

    /// Build an [`CryptoError::Internal`] with no underlying cause.
    pub fn internal_msg(context: impl Into<String>) -> Self {
        CryptoError::Internal {
            context: context.into(),
            source: None,
        }
    }

    /// The engine was asked for an operation its installed keys don't allow.
    pub fn missing_key(kind: KeyKind) -> Self {
        Self::internal_msg(format!("No {kind} installed"))
    }

    /// True for caller-input errors.
    pub fn is_argument(&self) -> bool {
        matches!(self, CryptoError::InvalidArgument(_))
    }

    /// True for primitive failures.
    pub fn is_internal(&self) -> bool {
        matches!(self, CryptoError::Internal { .. })
    }
}

/// Why a signature check came back negative.
///
/// Only used for diagnostics; the public verification API reports `false`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The hash was not valid hex
    #[error("malformed hash")]
    MalformedHash,

    /// The public key failed decoding or SPKI parsing
    #[error("malformed public key")]
    MalformedPublicKey,

    /// The signature failed decoding or was neither DER nor compact r||s
    #[error("malformed signature")]
    MalformedSignature,

    /// The engine holds no public key
    #[error("no public key installed")]
    MissingPublicKey,

    /// Well-formed inputs that do not verify
    #[error("signature does not match")]
    Mismatch,
}
