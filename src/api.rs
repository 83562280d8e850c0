use crate::breaker::{BreakResult, CaesarBreaker, CaesarReport, SearchObserver, SubstitutionBreaker};
use crate::cipher::caesar::rotate;
use crate::cipher::CipherKey;
use crate::config::{Config, SearchParams};
use crate::dictionary::Dictionary;
use crate::error::{CfResult, CipherError};
use crate::random::RandomSource;
use crate::scorer::loader::load_dictionary_from_path;
use crate::scorer::QuadgramScorer;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Runtime context for the services below: resolved configuration plus the
/// one random source every randomized command draws from.
pub struct Session {
    pub config: Config,
    pub rng: RandomSource,
}

impl Session {
    pub fn new(config: Config, seed: Option<u64>) -> CfResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: RandomSource::from_option(seed),
        })
    }

    /// Reseeds from user text, e.g. the value typed for `--seed`.
    pub fn set_seed(&mut self, raw: &str) -> CfResult<u64> {
        let seed = parse_seed(raw)?;
        self.rng.reseed(seed);
        Ok(seed)
    }

    pub fn load_scorer(&self) -> CfResult<QuadgramScorer> {
        QuadgramScorer::load_from_file(&self.config.data.quadgrams, &self.config.scoring)
    }

    pub fn load_dictionary(&self) -> CfResult<Dictionary> {
        load_dictionary_from_path(&self.config.data.dictionary)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Decryption {
    pub plaintext: String,
    #[serde(flatten)]
    pub result: BreakResult,
}

pub fn parse_rotation(raw: &str) -> CfResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        CipherError::InvalidInput(format!("rotation amount '{}' is not an integer", raw.trim()))
    })
}

pub fn parse_seed(raw: &str) -> CfResult<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        CipherError::InvalidInput(format!(
            "seed '{}' is not a non-negative integer",
            raw.trim()
        ))
    })
}

pub fn caesar_encrypt(text: &str, amount: i64) -> String {
    rotate(text, amount)
}

pub fn caesar_decrypt(dictionary: &Dictionary, text: &str) -> CaesarReport {
    CaesarBreaker::new(dictionary).break_text(text)
}

/// Quadgram score of the cleaned text.
pub fn englishness(scorer: &QuadgramScorer, text: &str) -> CfResult<f64> {
    scorer.score_str(text)
}

/// Encrypts with a fresh random key and returns that key with the ciphertext.
pub fn encrypt_random(rng: &mut RandomSource, text: &str) -> (CipherKey, String) {
    let key = rng.random_permutation();
    let ciphertext = key.apply(text);
    (key, ciphertext)
}

/// Breaks the substitution cipher on the letters of `text`, then applies the
/// key to the full input so spacing and punctuation survive.
pub fn decrypt_text<O: SearchObserver + ?Sized>(
    scorer: &QuadgramScorer,
    rng: &mut RandomSource,
    params: &SearchParams,
    text: &str,
    observer: &O,
) -> CfResult<Decryption> {
    let breaker = SubstitutionBreaker::new(scorer, params.clone())?;
    let result = breaker.solve(rng, text, observer)?;
    let plaintext = result.key.apply(text);
    Ok(Decryption { plaintext, result })
}

/// Decrypts a whole file in one search and writes the result line by line.
pub fn decrypt_file<O: SearchObserver + ?Sized>(
    scorer: &QuadgramScorer,
    rng: &mut RandomSource,
    params: &SearchParams,
    input: &Path,
    output: &Path,
    observer: &O,
) -> CfResult<Decryption> {
    let file = File::open(input).map_err(|e| CipherError::load(input, e))?;
    let mut ciphertext = String::new();
    let mut line_count = 0;
    for line in BufReader::new(file).lines() {
        ciphertext.push_str(&line?);
        ciphertext.push('\n');
        line_count += 1;
    }
    info!(
        "📄 Read {} lines ({} bytes) from {}",
        line_count,
        ciphertext.len(),
        input.display()
    );

    let decryption = decrypt_text(scorer, rng, params, &ciphertext, observer)?;

    let mut out = BufWriter::new(File::create(output)?);
    for line in decryption.plaintext.lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    info!("💾 Wrote decryption to {}", output.display());

    Ok(decryption)
}
