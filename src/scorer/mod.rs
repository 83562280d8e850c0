pub mod loader;
pub mod types;

pub use self::types::{QuadgramStats, WindowScore};
use crate::cipher::text::letter_indices;
use crate::cipher::{index_letter, letter_index, CipherKey, ALPHABET_LEN};
use crate::config::ScoringParams;
use crate::error::{CfResult, CipherError};
use std::fmt;
use std::path::Path;
use tracing::debug;

pub const QUADGRAM_LEN: usize = 4;
pub const TABLE_SIZE: usize = ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;

/// Base-26 index of four alphabet positions.
#[inline(always)]
fn quad_index(a: u8, b: u8, c: u8, d: u8) -> usize {
    ((a as usize * ALPHABET_LEN + b as usize) * ALPHABET_LEN + c as usize) * ALPHABET_LEN
        + d as usize
}

/// Log-probability quadgram model.
///
/// Every one of the 26^4 quadgrams has a slot in a flat table. Slots for
/// quadgrams seen in the corpus hold `log(count / total)`; the rest hold the
/// floor score `log(floor_count / total)`, so any string of four or more
/// letters is scorable.
pub struct QuadgramScorer {
    table: Vec<f64>,
    known: Vec<bool>,
    floor: f64,
    stats: QuadgramStats,
}

// The table itself is too large to print.
impl fmt::Debug for QuadgramScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadgramScorer")
            .field("floor", &self.floor)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl QuadgramScorer {
    /// Builds the table from parallel sequences of quadgrams and counts.
    /// Quadgrams are case-normalized; entries that are not exactly four
    /// letters, or whose count is zero, are skipped. Repeats accumulate.
    pub fn new<S: AsRef<str>>(
        quadgrams: &[S],
        counts: &[u64],
        params: &ScoringParams,
    ) -> CfResult<Self> {
        if quadgrams.len() != counts.len() {
            return Err(CipherError::Validation(format!(
                "{} quadgrams but {} counts",
                quadgrams.len(),
                counts.len()
            )));
        }
        params.validate()?;

        let mut merged = vec![0u64; TABLE_SIZE];
        let mut skipped = 0;
        let mut total: u64 = 0;

        for (quad, &count) in quadgrams.iter().zip(counts) {
            let bytes = quad.as_ref().as_bytes();
            let idx = match bytes {
                [a, b, c, d] if count > 0 => match (
                    letter_index(*a),
                    letter_index(*b),
                    letter_index(*c),
                    letter_index(*d),
                ) {
                    (Some(a), Some(b), Some(c), Some(d)) => quad_index(a, b, c, d),
                    _ => {
                        skipped += 1;
                        continue;
                    }
                },
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            merged[idx] = merged[idx].saturating_add(count);
            total = total.saturating_add(count);
        }

        // An empty table has no total; treat it as one so the floor stays finite
        // and identical for every quadgram.
        let denom = if total > 0 { total as f64 } else { 1.0 };
        let ln_base = params.log_base.ln();
        let floor = (params.floor_count / denom).ln() / ln_base;

        let mut table = vec![floor; TABLE_SIZE];
        let mut known = vec![false; TABLE_SIZE];
        let mut distinct = 0;
        for (i, &count) in merged.iter().enumerate() {
            if count > 0 {
                table[i] = (count as f64 / denom).ln() / ln_base;
                known[i] = true;
                distinct += 1;
            }
        }

        if skipped > 0 {
            debug!("   ⚠️  Skipped {} quadgram records.", skipped);
        }
        debug!(
            "   -> Quadgram table: {} distinct, total {}, floor {:.4}",
            distinct, total, floor
        );

        Ok(Self {
            table,
            known,
            floor,
            stats: QuadgramStats {
                distinct,
                total,
                skipped,
                floor,
            },
        })
    }

    pub fn from_pairs<I, S>(pairs: I, params: &ScoringParams) -> CfResult<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let (quadgrams, counts): (Vec<S>, Vec<u64>) = pairs.into_iter().unzip();
        Self::new(&quadgrams, &counts, params)
    }

    pub fn empty(params: &ScoringParams) -> CfResult<Self> {
        Self::new::<&str>(&[], &[], params)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P, params: &ScoringParams) -> CfResult<Self> {
        let raw = loader::load_quadgrams_from_path(path)?;
        Self::new(&raw.quadgrams, &raw.counts, params)
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn stats(&self) -> QuadgramStats {
        self.stats
    }

    /// Score of a single quadgram given as alphabet positions.
    #[inline(always)]
    pub fn quadgram_score(&self, q: [u8; QUADGRAM_LEN]) -> f64 {
        self.table[quad_index(q[0], q[1], q[2], q[3])]
    }

    /// Sums the score of every overlapping window of `letters` (alphabet
    /// positions). Returns 0.0 when there is no complete window.
    pub fn score_letters(&self, letters: &[u8]) -> f64 {
        letters
            .windows(QUADGRAM_LEN)
            .map(|w| self.quadgram_score([w[0], w[1], w[2], w[3]]))
            .sum()
    }

    /// Scores `letters` as they would read after applying `key`, without
    /// materializing the transliterated text.
    #[inline]
    pub fn score_with_key(&self, letters: &[u8], key: &CipherKey) -> f64 {
        if letters.len() < QUADGRAM_LEN {
            return 0.0;
        }
        let mut idx = 0usize;
        let mut sum = 0.0;
        for (i, &c) in letters.iter().enumerate() {
            idx = (idx * ALPHABET_LEN + key.get(c as usize) as usize) % TABLE_SIZE;
            if i + 1 >= QUADGRAM_LEN {
                sum += self.table[idx];
            }
        }
        sum
    }

    /// Cleans `text` and scores it.
    pub fn score_str(&self, text: &str) -> CfResult<f64> {
        let letters = require_quadgram(text)?;
        Ok(self.score_letters(&letters))
    }

    /// Per-window breakdown of `score_str`.
    pub fn window_scores(&self, text: &str) -> CfResult<Vec<WindowScore>> {
        let letters = require_quadgram(text)?;
        Ok(letters
            .windows(QUADGRAM_LEN)
            .map(|w| {
                let q = [w[0], w[1], w[2], w[3]];
                WindowScore {
                    quadgram: w.iter().map(|&c| index_letter(c)).collect(),
                    score: self.quadgram_score(q),
                    known: self.known[quad_index(q[0], q[1], q[2], q[3])],
                }
            })
            .collect())
    }
}

/// Letters of `text` as alphabet positions, rejecting anything too short to
/// hold a single quadgram.
pub fn require_quadgram(text: &str) -> CfResult<Vec<u8>> {
    let letters = letter_indices(text);
    if letters.len() < QUADGRAM_LEN {
        return Err(CipherError::InvalidInput(format!(
            "need at least {} letters to score, got {}",
            QUADGRAM_LEN,
            letters.len()
        )));
    }
    Ok(letters)
}
