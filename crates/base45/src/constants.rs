/// Base45 alphabet. A character's index is its digit value.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Base45 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

const _: () = assert!(ALPHABET.len() == ALPHABET_BYTES.len());

/// Number of distinct digits.
pub(crate) const BASE: u32 = 45;

/// Marks bytes that are not in the alphabet.
pub(crate) const INVALID: u8 = 0xff;

/// Reverse lookup table: byte value to digit value, or [`INVALID`].
pub(crate) static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET_BYTES.len() {
        let c = ALPHABET_BYTES[i] as usize;
        assert!(table[c] == INVALID, "duplicate character in base45 alphabet");
        table[c] = i as u8;
        i += 1;
    }
    table
};
