//! # Codec
//!
//! Conversions between raw bytes and the external string forms keys and
//! signatures travel in: hexadecimal, standard Base64 and PEM-armored
//! Base64.
//!
//! ## Flexible decoding
//!
//! [`decode_flexible`] strips PEM armor, then sniffs the payload:
//!
//! 1. hex alphabet (optionally `0x`-prefixed) → hex decode
//! 2. Base64 alphabet with canonical length and padding → Base64 decode
//! 3. anything else → [`CryptoError::InvalidArgument`]
//!
//! Hex is tried first. A short payload such as `"abcd"` is valid in both
//! alphabets and is always read as hex; peers depend on that precedence.

use crate::errors::{CryptoError, KeyKind};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

/// Standard alphabet, padding optional on decode.
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Tokens removed from PEM text, in order, before whitespace and `-` go.
const PEM_TOKENS: [&str; 5] = ["-BEGIN", "-END", " PRIVATE", " PUBLIC", "KEY-"];

/// Encode bytes as lowercase hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string, accepting surrounding whitespace and a `0x` prefix.
///
/// Blank input decodes to an empty vector.
///
/// # Errors
///
/// [`CryptoError::InvalidArgument`] for characters outside `[0-9a-fA-F]`
/// or an odd number of digits.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, CryptoError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if !is_hex_shape(digits) {
        return Err(CryptoError::argument(format!(
            "Invalid hexadecimal input: {digits}"
        )));
    }

    hex::decode(digits)
        .map_err(|e| CryptoError::argument(format!("Invalid hexadecimal input: {e}")))
}

/// Encode bytes as padded standard Base64.
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard Base64, padded or not. Blank input decodes to an empty vector.
///
/// # Errors
///
/// [`CryptoError::InvalidArgument`] on alphabet or length errors.
pub fn base64_to_bytes(input: &str) -> Result<Vec<u8>, CryptoError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    BASE64_LENIENT
        .decode(input)
        .map_err(|e| CryptoError::argument(format!("Invalid Base64 input: {e}")))
}

/// Re-encode a Base64 string as hex.
pub fn base64_to_hex(input: &str) -> Result<String, CryptoError> {
    base64_to_bytes(input).map(|bytes| bytes_to_hex(&bytes))
}

/// Re-encode a hex string as Base64.
pub fn hex_to_base64(input: &str) -> Result<String, CryptoError> {
    hex_to_bytes(input).map(|bytes| bytes_to_base64(&bytes))
}

/// Strip PEM armor and whitespace, leaving the bare encoded payload.
///
/// Removes `-BEGIN`, `-END`, ` PRIVATE`, ` PUBLIC` and `KEY-`, then every
/// `-` and every whitespace character. Text without armor passes through
/// with only whitespace and dashes removed.
pub fn normalize_pem(text: &str) -> String {
    let mut stripped = text.trim().to_owned();
    for token in PEM_TOKENS {
        stripped = stripped.replace(token, "");
    }

    stripped
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Wrap DER key bytes in PEM armor for the given key kind.
///
/// The Base64 body is written as a single line.
pub fn wrap_pem(kind: KeyKind, der: &[u8]) -> String {
    let label = kind.pem_label();
    format!(
        "-----BEGIN {label}-----\n{}\n-----END {label}-----",
        bytes_to_base64(der)
    )
}

/// Decode a key or signature supplied as hex, Base64 or PEM.
///
/// # Errors
///
/// [`CryptoError::InvalidArgument`] for blank input, input that is neither
/// hex nor Base64 after PEM stripping, or a payload that fails to decode.
pub fn decode_flexible(input: &str) -> Result<Vec<u8>, CryptoError> {
    if input.trim().is_empty() {
        return Err(CryptoError::argument(
            "Invalid input: Input cannot be null or empty.",
        ));
    }

    let payload = normalize_pem(input);
    match classify(&payload) {
        Some(Encoding::Hex) => hex_to_bytes(&payload),
        Some(Encoding::Base64) => base64_to_bytes(&payload),
        None => Err(CryptoError::argument(
            "Invalid input: Not a valid Hexadecimal or Base64 string.",
        )),
    }
}

/// True when [`decode_flexible`] would accept the input's shape.
///
/// Only the alphabet and padding are checked; an odd-length hex payload
/// still reports `true`.
pub fn is_flexible_encoding(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    classify(&normalize_pem(input)).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Encoding {
    Hex,
    Base64,
}

fn classify(payload: &str) -> Option<Encoding> {
    let digits = payload.strip_prefix("0x").unwrap_or(payload);
    if is_hex_shape(digits) {
        Some(Encoding::Hex)
    } else if is_base64_shape(payload) {
        Some(Encoding::Base64)
    } else {
        None
    }
}

fn is_hex_shape(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Groups of four alphabet characters, the last optionally `xx==` or `xxx=`.
fn is_base64_shape(s: &str) -> bool {
    if s.is_empty() || s.len() % 4 != 0 {
        return false;
    }

    let body = s.trim_end_matches('=');
    let padding = s.len() - body.len();
    padding <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}
