//! # Canonical Messages
//!
//! The signature scheme hashes an ordered list of heterogeneous fields by
//! concatenating each field's string form with no separator and no type tag.
//!
//! ## Caller responsibility
//!
//! The encoding is not length-prefixed. `["ab", "c"]` and `["a", "bc"]`
//! both become `"abc"` and therefore share a digest and a signature. It is
//! only sound when the field set, order and formatting are fixed by the
//! protocol that uses it. Existing signed artifacts depend on this exact
//! byte layout, so it must not be "fixed" here.
//!
//! ## Rendering
//!
//! | Field | Rendered as |
//! |-------|-------------|
//! | `Null` | empty string |
//! | `Bool` | `true` / `false` |
//! | `Int`, `UInt` | decimal, no grouping |
//! | `Float` | Java `Double.toString` layout over the shortest round-trip digits |
//!
//! Floats with `1e-3 <= |v| < 1e7` are plain decimals that always keep a
//! fractional part (`100.0`, `0.25`, `0.001`). Everything else uses
//! `d.dddE<n>` (`1.0E7`, `1.0E21`, `1.0E-7`). Non-finite values render as
//! `NaN`, `Infinity` and `-Infinity`; zero keeps its sign (`-0.0`).
//! | `Text` | verbatim |

use crate::codec::bytes_to_hex;
use crate::hashing::{sha256, Hash};
use std::fmt::{self, Write as _};

/// One value in a canonical field list.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    /// Absent value; contributes nothing
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point
    Float(f64),
    /// Text
    Text(String),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => Ok(()),
            Field::Bool(v) => write!(f, "{v}"),
            Field::Int(v) => write!(f, "{v}"),
            Field::UInt(v) => write!(f, "{v}"),
            Field::Float(v) => write_float(f, *v),
            Field::Text(v) => f.write_str(v),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if v.is_sign_negative() {
        f.write_str("-")?;
    }
    if v == 0.0 {
        return f.write_str("0.0");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e3`.
    let scientific = format!("{:e}", v.abs());
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    match exponent {
        -3..=-1 => {
            let zeros = "0".repeat((-exponent - 1) as usize);
            write!(f, "0.{zeros}{digits}")
        }
        0..=6 => {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                let zeros = "0".repeat(int_len - digits.len());
                write!(f, "{digits}{zeros}.0")
            } else {
                let (int, frac) = digits.split_at(int_len);
                write!(f, "{int}.{frac}")
            }
        }
        _ => {
            let (first, rest) = digits.split_at(1);
            let rest = if rest.is_empty() { "0" } else { rest };
            write!(f, "{first}.{rest}E{exponent}")
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_owned())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<&String> for Field {
    fn from(value: &String) -> Self {
        Field::Text(value.clone())
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Float(value)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Null, Into::into)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Field {
                fn from(value: $t) -> Self {
                    Field::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64: u8, u16, u32, u64, usize);

/// Build a `[Field; N]` from mixed values.
///
/// ```
/// use norsh_crypto::{fields, CanonicalMessage};
///
/// let message = CanonicalMessage::new(&fields!["alice", 100, true]);
/// assert_eq!(message.as_str(), "alice100true");
/// ```
#[macro_export]
macro_rules! fields {
    ($($value:expr),* $(,)?) => {
        [$($crate::canonical::Field::from($value)),*]
    };
}

/// Bytes produced by concatenating a field list.
///
/// The inner buffer is private; [`CanonicalMessage::new`] is the only
/// constructor, so every digest computed from one went through the same
/// rendering rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalMessage(String);

impl CanonicalMessage {
    /// Concatenate `fields` in order.
    pub fn new(fields: &[Field]) -> Self {
        let mut out = String::new();
        for field in fields {
            // Writing to a String cannot fail.
            let _ = write!(out, "{field}");
        }
        Self(out)
    }

    /// Canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical bytes (UTF-8).
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// SHA-256 of the canonical bytes.
    pub fn digest(&self) -> Hash {
        sha256(self.as_bytes())
    }

    /// Hex-encoded SHA-256 of the canonical bytes.
    pub fn digest_hex(&self) -> String {
        bytes_to_hex(&self.digest())
    }
}

impl fmt::Display for CanonicalMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
