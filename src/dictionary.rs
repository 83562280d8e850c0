use std::collections::HashSet;

/// Known English words, uppercased, used for membership tests only.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Exact match against an already uppercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn count_matches<S: AsRef<str>>(&self, words: &[S]) -> usize {
        words.iter().filter(|w| self.contains(w.as_ref())).count()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
