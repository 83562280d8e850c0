pub mod caesar;
pub mod key;
pub mod text;

pub use self::key::CipherKey;
pub use self::text::{clean, join_words, split_words};

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET_LEN: usize = 26;

/// Alphabet position of an ASCII letter in either case.
#[inline(always)]
pub fn letter_index(c: u8) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() - b'A')
    } else {
        None
    }
}

#[inline(always)]
pub fn index_letter(idx: u8) -> char {
    ALPHABET[idx as usize] as char
}
