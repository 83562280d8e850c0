use crate::dictionary::Dictionary;
use crate::error::{CfResult, CipherError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Quadgram records exactly as read, as parallel sequences.
#[derive(Debug, Clone, Default)]
pub struct RawQuadgrams {
    pub quadgrams: Vec<String>,
    pub counts: Vec<u64>,
}

impl RawQuadgrams {
    pub fn len(&self) -> usize {
        self.quadgrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quadgrams.is_empty()
    }
}

/// Splits `TION,13168375` style tokens; the separator may be any single
/// non-alphanumeric character.
fn split_inline(token: &str) -> Option<(&str, &str)> {
    let bytes = token.as_bytes();
    if bytes.len() > 5 && bytes[..4].iter().all(u8::is_ascii_alphabetic) {
        let sep = bytes[4];
        if sep.is_ascii() && !sep.is_ascii_alphanumeric() {
            return Some((&token[..4], &token[5..]));
        }
    }
    None
}

fn parse_count(quad: &str, raw: &str, line: u64) -> CfResult<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        CipherError::Validation(format!(
            "line {}: invalid count '{}' for quadgram '{}'",
            line, raw, quad
        ))
    })
}

/// Reads whitespace separated quadgram records. A record is either a single
/// `QUAD<sep>COUNT` token or a `QUAD` token followed by a `COUNT` token;
/// commas split fields as well.
pub fn load_quadgrams<R: Read>(reader: R) -> CfResult<RawQuadgrams> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut raw = RawQuadgrams::default();
    let mut pending: Option<(String, u64)> = None;
    let mut lines_read = 0;

    for result in rdr.records() {
        let rec = result?;
        lines_read += 1;
        let line = rec.position().map(|p| p.line()).unwrap_or(lines_read);

        for token in rec.iter().flat_map(str::split_whitespace) {
            if let Some((quad, quad_line)) = pending.take() {
                let count = parse_count(&quad, token, quad_line)?;
                raw.quadgrams.push(quad);
                raw.counts.push(count);
            } else if let Some((quad, count)) = split_inline(token) {
                let count = parse_count(quad, count, line)?;
                raw.quadgrams.push(quad.to_string());
                raw.counts.push(count);
            } else {
                pending = Some((token.to_string(), line));
            }
        }
    }

    if let Some((quad, line)) = pending {
        return Err(CipherError::Validation(format!(
            "line {}: quadgram '{}' has no count",
            line, quad
        )));
    }

    debug!(
        "   -> Scanned {} lines. Loaded {} quadgram records.",
        lines_read,
        raw.len()
    );

    Ok(raw)
}

pub fn load_quadgrams_from_path<P: AsRef<Path>>(path: P) -> CfResult<RawQuadgrams> {
    let path = path.as_ref();
    info!("📂 Loading Quadgrams: {}", path.display());
    let file = File::open(path).map_err(|e| CipherError::load(path, e))?;
    let raw = load_quadgrams(file)?;
    if raw.is_empty() {
        warn!(
            "⚠️  Quadgram file '{}' has no records; every window scores at the floor.",
            path.display()
        );
    }
    Ok(raw)
}

/// Reads whitespace separated words. Case is normalized here so lookups can
/// compare against cleaned, uppercased text.
pub fn load_dictionary<R: Read>(mut reader: R) -> CfResult<Dictionary> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let dict = Dictionary::from_words(content.split_whitespace());
    debug!("   -> Loaded {} dictionary words.", dict.len());
    Ok(dict)
}

pub fn load_dictionary_from_path<P: AsRef<Path>>(path: P) -> CfResult<Dictionary> {
    let path = path.as_ref();
    info!("📖 Loading Dictionary: {}", path.display());
    let file = File::open(path).map_err(|e| CipherError::load(path, e))?;
    let dict = load_dictionary(file)?;
    if dict.is_empty() {
        warn!(
            "⚠️  Dictionary '{}' is empty; no Caesar rotation can be accepted.",
            path.display()
        );
    }
    Ok(dict)
}
