//! Binary base45 encoding function.

use crate::constants::{ALPHABET_BYTES, BASE};

/// Encodes bytes to a destination byte slice using base45.
///
/// # Arguments
///
/// * `uint8` - The source bytes to encode.
/// * `start` - The starting index in the source slice.
/// * `length` - The number of bytes to encode.
/// * `dest` - The destination byte slice.
/// * `offset` - The starting offset in the destination slice.
///
/// # Returns
///
/// The number of bytes written to the destination, which is always
/// [`encoded_len(length)`](crate::encoded_len).
///
/// # Panics
///
/// Panics if the source range is out of bounds or `dest` is too short.
///
/// # Example
///
/// ```
/// use qr_base45::to_base45_bin;
///
/// let data = b"abcde";
/// let mut dest = vec![0u8; 100];
/// let len = to_base45_bin(data, 0, data.len(), &mut dest, 0);
/// assert_eq!(&dest[..len], b"0ECJPCB2");
/// ```
pub fn to_base45_bin(
    uint8: &[u8],
    start: usize,
    length: usize,
    dest: &mut [u8],
    offset: usize,
) -> usize {
    let src = &uint8[start..start + length];
    let mut pairs = src.chunks_exact(2);
    let mut j = offset;

    for pair in &mut pairs {
        let v = (u32::from(pair[0]) << 8) | u32::from(pair[1]);
        j = write_digits(dest, j, v, 3);
    }

    if let [last] = pairs.remainder() {
        j = write_digits(dest, j, u32::from(*last), 2);
    }

    j - offset
}

fn write_digits(dest: &mut [u8], mut j: usize, mut v: u32, count: usize) -> usize {
    for _ in 0..count {
        dest[j] = ALPHABET_BYTES[(v % BASE) as usize];
        v /= BASE;
        j += 1;
    }
    j
}
