use super::{index_letter, letter_index, ALPHABET_LEN};
use crate::error::{CfResult, CipherError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A permutation of the alphabet.
///
/// Position `i` maps the `i`-th letter to `map[i]`. Used as an encryption key
/// (plaintext -> ciphertext) or, when produced by the substitution breaker, as
/// the decryption key applied directly to ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CipherKey {
    map: [u8; ALPHABET_LEN],
}

impl CipherKey {
    pub fn identity() -> Self {
        let mut map = [0u8; ALPHABET_LEN];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { map }
    }

    /// Builds a key from alphabet positions, rejecting anything that is not a
    /// strict permutation of `0..26`.
    pub fn from_indices(map: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let mut seen = [false; ALPHABET_LEN];
        for &v in &map {
            let v = v as usize;
            if v >= ALPHABET_LEN {
                return Err(CipherError::Validation(format!(
                    "key value {} is outside the alphabet",
                    v
                )));
            }
            if seen[v] {
                return Err(CipherError::Validation(format!(
                    "key repeats letter '{}'",
                    index_letter(v as u8)
                )));
            }
            seen[v] = true;
        }
        Ok(Self { map })
    }

    pub(crate) fn from_indices_unchecked(map: [u8; ALPHABET_LEN]) -> Self {
        debug_assert!(Self::from_indices(map).is_ok());
        Self { map }
    }

    /// Parses a 26-letter key such as `"QWERTYUIOPASDFGHJKLZXCVBNM"`.
    pub fn parse(s: &str) -> CfResult<Self> {
        let s = s.trim();
        if s.len() != ALPHABET_LEN {
            return Err(CipherError::Validation(format!(
                "key must have {} letters, got {}",
                ALPHABET_LEN,
                s.len()
            )));
        }
        let mut map = [0u8; ALPHABET_LEN];
        for (slot, b) in map.iter_mut().zip(s.bytes()) {
            *slot = letter_index(b).ok_or_else(|| {
                CipherError::Validation(format!("key contains non-letter '{}'", b as char))
            })?;
        }
        Self::from_indices(map)
    }

    pub fn indices(&self) -> &[u8; ALPHABET_LEN] {
        &self.map
    }

    pub fn into_indices(self) -> [u8; ALPHABET_LEN] {
        self.map
    }

    /// Substitute for the letter at alphabet position `idx`.
    #[inline(always)]
    pub fn get(&self, idx: usize) -> u8 {
        self.map[idx]
    }

    /// Exchanges two positions; the result is still a permutation.
    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.map.swap(a, b);
    }

    pub fn inverse(&self) -> Self {
        let mut inv = [0u8; ALPHABET_LEN];
        for (i, &v) in self.map.iter().enumerate() {
            inv[v as usize] = i as u8;
        }
        Self { map: inv }
    }

    /// Transliterates `text`. Letters are uppercased and substituted, every
    /// other character passes through unchanged.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii() {
                    match letter_index(c as u8) {
                        Some(idx) => index_letter(self.map[idx as usize]),
                        None => c,
                    }
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Default for CipherKey {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &v in &self.map {
            write!(f, "{}", index_letter(v))?;
        }
        Ok(())
    }
}

impl FromStr for CipherKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CipherKey {
    type Error = CipherError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CipherKey> for String {
    fn from(key: CipherKey) -> Self {
        key.to_string()
    }
}
