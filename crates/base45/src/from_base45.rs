//! Base45 string decoding function.

use crate::from_base45_bin::from_base45_bin;
use crate::Base45Error;

/// Decodes a base45 string to bytes.
///
/// Every group of three characters yields two bytes and a trailing pair of
/// characters yields one byte.
///
/// # Errors
///
/// Returns [`Base45Error::InvalidCharacter`] with the first character outside
/// the alphabet and its position. Input made only of alphabet characters
/// fails with [`Base45Error::InvalidLength`] when it ends in a single
/// dangling character.
///
/// # Example
///
/// ```
/// use qr_base45::{from_base45, Base45Error};
///
/// assert_eq!(from_base45("0ECJPC% C").unwrap(), b"abcdef");
/// assert_eq!(
///     from_base45("!!!"),
///     Err(Base45Error::InvalidCharacter { character: '!', position: 0 })
/// );
/// ```
pub fn from_base45(encoded: &str) -> Result<Vec<u8>, Base45Error> {
    from_base45_bin(encoded.as_bytes(), 0, encoded.len()).map_err(|err| match err {
        // Every byte before `position` is ASCII, so it is also a char boundary.
        Base45Error::InvalidByte { position, .. } => Base45Error::InvalidCharacter {
            character: encoded
                .get(position..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            position,
        },
        other => other,
    })
}
