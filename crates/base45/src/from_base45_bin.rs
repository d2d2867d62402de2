//! Binary base45 decoding function.

use crate::constants::{BASE, DECODE_TABLE, INVALID};
use crate::length::decoded_len;
use crate::Base45Error;

/// Decodes base45 bytes from a source slice.
///
/// # Arguments
///
/// * `view` - The source byte slice containing base45-encoded data.
/// * `offset` - The starting offset in the source slice.
/// * `length` - The number of bytes to decode.
///
/// # Returns
///
/// The decoded bytes, or an error if the input is invalid.
///
/// # Errors
///
/// Returns [`Base45Error::InvalidByte`] for the first byte outside the
/// alphabet, with its index into `view`. Only input made entirely of
/// alphabet bytes can fail with [`Base45Error::InvalidLength`], when
/// `length % 3 == 1`.
///
/// # Example
///
/// ```
/// use qr_base45::from_base45_bin;
///
/// let encoded = b"0ECJPCB2";
/// let decoded = from_base45_bin(encoded, 0, encoded.len()).unwrap();
/// assert_eq!(decoded, b"abcde");
/// ```
pub fn from_base45_bin(
    view: &[u8],
    offset: usize,
    length: usize,
) -> Result<Vec<u8>, Base45Error> {
    let src = &view[offset..offset + length];
    check_alphabet(src, offset).inspect_err(log_failure)?;
    let mut buf = Vec::with_capacity(decoded_len(length).inspect_err(log_failure)?);

    let mut groups = src.chunks_exact(3);
    for group in &mut groups {
        let v = accumulate(group);
        // Digit triples above 0xffff keep their low 16 bits.
        buf.push((v >> 8) as u8);
        buf.push(v as u8);
    }

    let rest = groups.remainder();
    if !rest.is_empty() {
        // Digit pairs above 0xff keep their low 8 bits.
        buf.push(accumulate(rest) as u8);
    }

    Ok(buf)
}

/// Fails on the first byte of `src` outside the alphabet.
fn check_alphabet(src: &[u8], offset: usize) -> Result<(), Base45Error> {
    match src
        .iter()
        .position(|&byte| DECODE_TABLE[byte as usize] == INVALID)
    {
        Some(j) => Err(Base45Error::InvalidByte {
            byte: src[j],
            position: offset + j,
        }),
        None => Ok(()),
    }
}

/// Reads alphabet `digits` most significant first into a single value.
fn accumulate(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |v, &byte| v * BASE + u32::from(DECODE_TABLE[byte as usize]))
}

fn log_failure(err: &Base45Error) {
    log::debug!("base45 decode failed: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(from_base45_bin(b"", 0, 0).unwrap(), b"");
    }

    #[test]
    fn test_fixtures() {
        assert_eq!(from_base45_bin(b"0ECJPCB2", 0, 8).unwrap(), b"abcde");
        assert_eq!(from_base45_bin(b"0ECJPC% C", 0, 9).unwrap(), b"abcdef");
    }

    #[test]
    fn test_with_offset() {
        let encoded = b"xxxx0ECJPCB2";
        assert_eq!(from_base45_bin(encoded, 4, 8).unwrap(), b"abcde");
    }

    #[test]
    fn test_invalid_byte_position_is_absolute() {
        let encoded = b"xxxx0EcJPCB2";
        assert_eq!(
            from_base45_bin(encoded, 4, 8),
            Err(Base45Error::InvalidByte {
                byte: b'c',
                position: 6
            })
        );
    }

    #[test]
    fn test_first_invalid_byte_wins() {
        assert_eq!(
            from_base45_bin(b"0!?", 0, 3),
            Err(Base45Error::InvalidByte {
                byte: b'!',
                position: 1
            })
        );
    }

    #[test]
    fn test_invalid_byte_in_trailing_pair() {
        assert_eq!(
            from_base45_bin(b"0EC7\xff", 0, 5),
            Err(Base45Error::InvalidByte {
                byte: 0xff,
                position: 4
            })
        );
    }

    #[test]
    fn test_foreign_byte_reported_over_length() {
        assert_eq!(
            from_base45_bin(b"0ECj", 0, 4),
            Err(Base45Error::InvalidByte {
                byte: b'j',
                position: 3
            })
        );
        assert_eq!(
            from_base45_bin(b"!", 0, 1),
            Err(Base45Error::InvalidByte {
                byte: b'!',
                position: 0
            })
        );
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            from_base45_bin(b"0ECJ", 0, 4),
            Err(Base45Error::InvalidLength { length: 4 })
        );
        assert_eq!(
            from_base45_bin(b"0", 0, 1),
            Err(Base45Error::InvalidLength { length: 1 })
        );
    }

    #[test]
    fn test_out_of_range_groups_truncate() {
        // "::" = 44 * 45 + 44 = 2024 = 0x7e8
        assert_eq!(from_base45_bin(b"::", 0, 2).unwrap(), [0xe8]);
        // ":::" = 91124 = 0x163f4
        assert_eq!(from_base45_bin(b":::", 0, 3).unwrap(), [0x63, 0xf4]);
    }
}
