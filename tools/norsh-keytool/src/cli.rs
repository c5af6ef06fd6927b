//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use norsh_crypto::HashAlgorithm;

/// Norsh key tool: secp256k1 keys, canonical-message signatures and ECIES.
#[derive(Parser, Debug)]
#[command(name = "norsh-keytool", version)]
#[command(about = "Generate secp256k1 keys, sign and verify canonical messages")]
pub struct Cli {
    /// Log filter, overrides NORSH_LOG_LEVEL
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit JSON logs on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Keys, signatures and ciphertexts are accepted as hex, Base64 or PEM.
/// Any such argument may also be given as `@path` to read it from a file.
///
/// Message fields are plain text unless prefixed with a type tag:
/// `i:-7`, `u:42`, `f:1.5`, `b:true`, `s:text` or a bare `null:`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a key pair and print both PEMs
    Generate {
        /// Write `<name>.key` and `<name>.pub` instead of printing
        #[arg(short, long)]
        write: bool,

        /// Output directory, overrides NORSH_KEY_DIR
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// File stem for written keys
        #[arg(long, default_value = "norsh")]
        name: String,
    },

    /// Sign the canonical form of a field list
    Sign {
        /// Private key
        #[arg(short, long)]
        key: String,

        /// Message fields, in order
        #[arg(allow_hyphen_values = true)]
        fields: Vec<String>,
    },

    /// Sign a precomputed hex digest
    SignHash {
        /// Private key
        #[arg(short, long)]
        key: String,

        /// Hex digest
        hash: String,
    },

    /// Verify a signature over a field list
    Verify {
        /// Public key
        #[arg(short, long)]
        key: String,

        /// Signature (hex or Base64)
        #[arg(short, long)]
        signature: String,

        /// Message fields, in order
        #[arg(allow_hyphen_values = true)]
        fields: Vec<String>,
    },

    /// Verify a signature over a precomputed hex digest
    VerifyHash {
        /// Public key
        #[arg(short, long)]
        key: String,

        /// Signature (hex or Base64)
        #[arg(short, long)]
        signature: String,

        /// Hex digest
        hash: String,
    },

    /// Print the digest of a field list's canonical form
    Hash {
        /// Digest algorithm
        #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
        algorithm: Algorithm,

        /// Message fields, in order
        #[arg(allow_hyphen_values = true)]
        fields: Vec<String>,
    },

    /// Encrypt UTF-8 text to a public key, printing Base64
    Encrypt {
        /// Public key
        #[arg(short, long)]
        key: String,

        /// Plaintext
        input: String,
    },

    /// Decrypt a ciphertext with a private key
    Decrypt {
        /// Private key
        #[arg(short, long)]
        key: String,

        /// Ciphertext (hex or Base64)
        input: String,
    },

    /// Decode hex, Base64 or PEM input and print it as hex
    Normalize {
        /// Encoded input
        input: String,
    },
}

/// Digest algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// SHA-256
    Sha256,
    /// SHA3-256
    #[value(name = "sha3-256")]
    Sha3_256,
}

impl From<Algorithm> for HashAlgorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Sha256 => HashAlgorithm::Sha256,
            Algorithm::Sha3_256 => HashAlgorithm::Sha3_256,
        }
    }
}
