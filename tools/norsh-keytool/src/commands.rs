//! Command execution. Every command returns its stdout text so it can be
//! tested without a process boundary.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use norsh_crypto::{
    bytes_to_base64, bytes_to_hex, decode_flexible, signature, CanonicalMessage,
    CryptographyEngine, Field, HashAlgorithm,
};
use tracing::{debug, info};

use crate::cli::Command;
use crate::{KeytoolConfig, KeytoolError};

/// Result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout
    pub stdout: String,
    /// `false` maps to a non-zero exit status (failed verification)
    pub success: bool,
}

impl Outcome {
    fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            success: true,
        }
    }
}

/// Run one command.
pub fn execute(command: Command, config: &KeytoolConfig) -> Result<Outcome, KeytoolError> {
    match command {
        Command::Generate { write, out, name } => {
            let engine = CryptographyEngine::generate()?;
            let private_pem = engine.export_private_pem()?;
            let public_pem = engine.export_public_pem()?;

            if !write {
                return Ok(Outcome::ok(format!("{}\n\n{public_pem}", private_pem.as_str())));
            }

            let dir = out.unwrap_or_else(|| config.key_dir.clone());
            let private_path = dir.join(format!("{name}.key"));
            let public_path = dir.join(format!("{name}.pub"));
            for path in [&private_path, &public_path] {
                if path.exists() {
                    return Err(KeytoolError::Io {
                        path: path.clone(),
                        source: io::Error::new(io::ErrorKind::AlreadyExists, "key file exists"),
                    });
                }
            }

            write_new(&private_path, &private_pem, true)?;
            if let Err(e) = write_new(&public_path, &public_pem, false) {
                // Never leave a private key without its public half.
                let _ = fs::remove_file(&private_path);
                return Err(e);
            }

            info!(dir = %dir.display(), %name, "key pair written");
            Ok(Outcome::ok(format!(
                "{}\n{}",
                private_path.display(),
                public_path.display()
            )))
        }

        Command::Sign { key, fields } => {
            let fields = parse_fields(&fields)?;
            let signature = signature::sign(&resolve(&key)?, &fields)?;
            debug!(fields = fields.len(), "message signed");
            Ok(Outcome::ok(signature))
        }

        Command::SignHash { key, hash } => {
            Ok(Outcome::ok(signature::sign_hash(&resolve(&key)?, &hash)?))
        }

        Command::Verify {
            key,
            signature: sig,
            fields,
        } => {
            let fields = parse_fields(&fields)?;
            let valid = signature::verify(&resolve(&key)?, &resolve(&sig)?, &fields);
            Ok(verdict(valid))
        }

        Command::VerifyHash {
            key,
            signature: sig,
            hash,
        } => {
            let valid = signature::verify_hash(&resolve(&key)?, &resolve(&sig)?, &hash);
            Ok(verdict(valid))
        }

        Command::Hash { algorithm, fields } => {
            let message = CanonicalMessage::new(&parse_fields(&fields)?);
            let algorithm = HashAlgorithm::from(algorithm);
            Ok(Outcome::ok(algorithm.digest_hex(message.as_bytes())))
        }

        Command::Encrypt { key, input } => {
            let engine = CryptographyEngine::from_public_key(&decode_flexible(&resolve(&key)?)?)?;
            let ciphertext = engine.encrypt(input.as_bytes())?;
            Ok(Outcome::ok(bytes_to_base64(&ciphertext)))
        }

        Command::Decrypt { key, input } => {
            let engine =
                CryptographyEngine::from_private_key(&decode_flexible(&resolve(&key)?)?)?;
            let plaintext = engine.decrypt(&decode_flexible(&resolve(&input)?)?)?;
            let text = String::from_utf8(plaintext)
                .unwrap_or_else(|e| bytes_to_hex(e.as_bytes()));
            Ok(Outcome::ok(text))
        }

        Command::Normalize { input } => {
            Ok(Outcome::ok(bytes_to_hex(&decode_flexible(&resolve(&input)?)?)))
        }
    }
}

fn verdict(valid: bool) -> Outcome {
    Outcome {
        stdout: if valid { "valid" } else { "invalid" }.to_string(),
        success: valid,
    }
}

/// Parse one message field argument.
///
/// Untagged arguments, and arguments whose prefix is not a known tag, are
/// taken as text verbatim.
pub fn parse_field(arg: &str) -> Result<Field, KeytoolError> {
    let Some((tag, value)) = arg.split_once(':') else {
        return Ok(Field::from(arg));
    };
    let bad = || KeytoolError::Field(arg.to_owned());

    let field = match tag {
        "s" => Field::from(value),
        "i" => Field::Int(value.parse().map_err(|_| bad())?),
        "u" => Field::UInt(value.parse().map_err(|_| bad())?),
        "f" => Field::Float(value.parse().map_err(|_| bad())?),
        "b" => Field::Bool(value.parse().map_err(|_| bad())?),
        "null" if value.is_empty() => Field::Null,
        _ => Field::from(arg),
    };
    Ok(field)
}

fn parse_fields(args: &[String]) -> Result<Vec<Field>, KeytoolError> {
    args.iter().map(|arg| parse_field(arg)).collect()
}

/// `@path` reads the argument from a file.
fn resolve(arg: &str) -> Result<String, KeytoolError> {
    match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).map_err(|source| KeytoolError::Io {
            path: PathBuf::from(path),
            source,
        }),
        None => Ok(arg.to_owned()),
    }
}

/// Create `path`, refusing to overwrite. Private keys are owner-only on unix.
fn write_new(path: &Path, contents: &str, private: bool) -> Result<(), KeytoolError> {
    let io_err = |source| KeytoolError::Io {
        path: path.to_owned(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        if private {
            options.mode(0o600);
        }
    }
    #[cfg(not(unix))]
    let _ = private;

    let mut file = options.open(path).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.write_all(b"\n").map_err(io_err)
}
