//! Base45 string encoding function.

use crate::constants::{ALPHABET_BYTES, BASE};
use crate::length::encoded_len;

/// Encodes a byte slice to a base45 string.
///
/// Each pair of bytes is read as a big-endian 16-bit value and written as
/// three digits, least significant first. A trailing odd byte is written as
/// two digits. Encoding never fails.
///
/// # Example
///
/// ```
/// use qr_base45::to_base45;
///
/// assert_eq!(to_base45(b"abcdef"), "0ECJPC% C");
/// assert_eq!(to_base45(b""), "");
/// ```
pub fn to_base45(uint8: &[u8]) -> String {
    let length = uint8.len();
    let mut out = String::with_capacity(encoded_len(length));

    let extra_length = length % 2;
    let base_length = length - extra_length;

    let mut i = 0;
    while i < base_length {
        let v = (u32::from(uint8[i]) << 8) | u32::from(uint8[i + 1]);
        push_digits(&mut out, v, 3);
        i += 2;
    }

    if extra_length == 1 {
        push_digits(&mut out, u32::from(uint8[base_length]), 2);
    }

    out
}

fn push_digits(out: &mut String, mut v: u32, count: usize) {
    for _ in 0..count {
        out.push(ALPHABET_BYTES[(v % BASE) as usize] as char);
        v /= BASE;
    }
}
