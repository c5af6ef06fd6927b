//! # Norsh Keytool
//!
//! Operator CLI over `norsh-crypto`: key generation, canonical-message
//! signing and verification, digests and ECIES.
//!
//! Results go to stdout; logs go to stderr through `tracing`. A failed
//! verification prints `invalid` and exits with status 1.

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

use std::path::PathBuf;

use norsh_crypto::CryptoError;
use thiserror::Error;

pub use cli::{Algorithm, Cli, Command};
pub use commands::{execute, parse_field, Outcome};
pub use config::KeytoolConfig;
pub use logging::init_logging;

/// Keytool errors.
#[derive(Debug, Error)]
pub enum KeytoolError {
    /// Failure inside the crypto library
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Reading or writing a key file failed
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A message field argument did not match its type tag
    #[error("invalid field {0:?}: tagged fields are i:<int>, u:<uint>, f:<float>, b:<bool>, s:<text> or null:")]
    Field(String),

    /// The tracing subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}
