//! Alphabet tables.
//!
//! Both tables are `const`: built once, immutable for the process
//! lifetime, and safe for concurrent reads without locking.

/// Standard base64 alphabet: index 0-63 to character.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Sentinel for bytes absent from the alphabet.
pub(crate) const INVALID: u8 = 0xFF;

/// Inverse alphabet lookup: ASCII byte to index 0-63, or [`INVALID`].
pub(crate) const INVERSE: &[u8; 256] = &{
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Lowercase hex digit characters.
pub(crate) const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
