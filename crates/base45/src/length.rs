//! Buffer sizing helpers.

use crate::Base45Error;

/// Returns the length of the base45 encoding of `length` bytes.
///
/// Every complete byte pair takes three characters and a trailing odd byte
/// takes two.
///
/// # Example
///
/// ```
/// use qr_base45::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(5), 8);
/// assert_eq!(encoded_len(6), 9);
/// ```
pub fn encoded_len(length: usize) -> usize {
    (length / 2) * 3 + (length % 2) * 2
}

/// Returns the number of bytes decoded from `length` base45 characters.
///
/// # Errors
///
/// Returns [`Base45Error::InvalidLength`] if `length % 3 == 1`.
///
/// # Example
///
/// ```
/// use qr_base45::decoded_len;
///
/// assert_eq!(decoded_len(8).unwrap(), 5);
/// assert!(decoded_len(4).is_err());
/// ```
pub fn decoded_len(length: usize) -> Result<usize, Base45Error> {
    match length % 3 {
        0 => Ok((length / 3) * 2),
        2 => Ok((length / 3) * 2 + 1),
        _ => Err(Base45Error::InvalidLength { length }),
    }
}
