use super::{letter_index, ALPHABET, ALPHABET_LEN};

/// Reduces any rotation amount, negative included, to `0..26`.
#[inline(always)]
pub fn normalize_amount(amount: i64) -> u8 {
    amount.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Rotates one letter; `None` for non-letters.
#[inline(always)]
pub fn rotate_letter(c: u8, amount: u8) -> Option<u8> {
    letter_index(c).map(|idx| ALPHABET[((idx + amount) % ALPHABET_LEN as u8) as usize])
}

/// Caesar-encrypts `text`: letters are uppercased and rotated, whitespace is
/// kept as is, and every other character is dropped.
pub fn rotate(text: &str, amount: i64) -> String {
    let amount = normalize_amount(amount);
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            if let Some(r) = rotate_letter(c as u8, amount) {
                out.push(r as char);
                continue;
            }
        }
        if c.is_whitespace() {
            out.push(c);
        }
    }
    out
}

pub fn rotate_words<S: AsRef<str>>(words: &[S], amount: i64) -> Vec<String> {
    words.iter().map(|w| rotate(w.as_ref(), amount)).collect()
}
