//! Base45 encoding and decoding utilities.
//!
//! Base45 packs every two bytes into three characters drawn from the QR-code
//! alphanumeric character set (`0-9`, `A-Z`, space and `$%*+-./:`), so the
//! encoded text fits the denser alphanumeric QR mode.
//!
//! This crate provides:
//! - String encoding/decoding (`to_base45` / `from_base45`)
//! - Binary variants that write to or read from byte slices
//! - Length helpers for sizing buffers up front
//!
//! # Example
//!
//! ```
//! use qr_base45::{decode, encode};
//!
//! let encoded = encode(b"abcde");
//! assert_eq!(encoded, "0ECJPCB2");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded, b"abcde");
//! ```

mod constants;
mod from_base45;
mod from_base45_bin;
mod length;
mod to_base45;
mod to_base45_bin;

pub use constants::{ALPHABET, ALPHABET_BYTES};
pub use from_base45::from_base45;
pub use from_base45::from_base45 as decode;
pub use from_base45_bin::from_base45_bin;
pub use length::{decoded_len, encoded_len};
pub use to_base45::to_base45;
pub use to_base45::to_base45 as encode;
pub use to_base45_bin::to_base45_bin;

use thiserror::Error;

/// Error type for base45 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Base45Error {
    /// The input string contains a character outside the base45 alphabet.
    #[error("invalid character {character:?} at position {position}, not in the base45 alphabet")]
    InvalidCharacter { character: char, position: usize },
    /// The input byte sequence contains a byte outside the base45 alphabet.
    #[error("invalid byte 0x{byte:02x} at position {position}, not in the base45 alphabet")]
    InvalidByte { byte: u8, position: usize },
    /// The encoded length leaves a single dangling character.
    #[error("invalid base45 length {length}, a trailing group must have two characters")]
    InvalidLength { length: usize },
}
