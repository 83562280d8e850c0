use crate::cipher::caesar::rotate_words;
use crate::cipher::{clean, join_words, split_words, ALPHABET_LEN};
use crate::dictionary::Dictionary;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaesarCandidate {
    pub rotation: u8,
    pub text: String,
    pub matches: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CaesarReport {
    pub word_count: usize,
    pub candidates: Vec<CaesarCandidate>,
}

impl CaesarReport {
    pub fn found(&self) -> bool {
        !self.candidates.is_empty()
    }
}

/// Exhaustive Caesar search accepted by majority dictionary membership.
pub struct CaesarBreaker<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> CaesarBreaker<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Tries all 26 rotations of `text`. The text is split on whitespace and
    /// each word is cleaned on its own; a rotation is reported
    /// when more than half of its words are dictionary entries. Candidates
    /// come back in rotation order.
    pub fn break_text(&self, text: &str) -> CaesarReport {
        let words: Vec<String> = split_words(text).iter().map(|w| clean(w)).collect();
        let word_count = words.len();

        let candidates: Vec<CaesarCandidate> = (0..ALPHABET_LEN as u8)
            .into_par_iter()
            .filter_map(|rotation| {
                let rotated = rotate_words(&words, rotation as i64);
                let matches = self.dictionary.count_matches(&rotated);
                if 2 * matches > word_count {
                    Some(CaesarCandidate {
                        rotation,
                        text: join_words(&rotated),
                        matches,
                    })
                } else {
                    None
                }
            })
            .collect();

        debug!(
            "Caesar: {} words, {} rotations accepted",
            word_count,
            candidates.len()
        );

        CaesarReport {
            word_count,
            candidates,
        }
    }
}
