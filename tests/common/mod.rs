#![allow(dead_code)]

use cipherforge::cipher::clean;
use cipherforge::config::ScoringParams;
use cipherforge::scorer::QuadgramScorer;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Plain English prose used to train small quadgram tables for tests.
pub const CORPUS: &str = "\
It was a bright cold morning in the early spring, and the people of the small \
town by the river were already at work in their fields and shops. The baker had \
opened his doors before the sun came over the hills, and the smell of fresh bread \
drifted along the narrow streets where children were walking to school. Nobody \
in the town could remember a time when the river had been so high, for the snow \
on the mountains had melted quickly after a long and hard winter. The old men \
who sat on the bench outside the church said that the water would reach the \
bridge before the end of the week, and the farmers listened to them with worried \
faces. There was nothing anyone could do about the weather, but they made their \
plans all the same. Some of them moved their animals to the higher ground behind \
the mill, and others carried sacks of grain into the attics of their houses. \
The mayor called a meeting in the town hall that evening, and almost everyone \
came to hear what he had to say. He told them that help was coming from the city \
and that they should not be afraid. He said that the council had asked for boats \
and for men who knew how to handle them in strong water. When the meeting was \
over the people went home through the rain, talking quietly among themselves \
about their homes and their families and the long night that was ahead of them. \
In the morning the river had risen again, and the first of the lower gardens \
were under water. The schoolmaster closed the school and sent the children home, \
and the shopkeepers began to move their goods away from the windows. By the \
afternoon the boats had arrived, and the men from the city worked with the \
farmers to build a wall of sand along the bank. They worked through the whole \
of that day and most of the next, and when the water finally reached the top \
of the wall it held. The town was saved, and for many years afterwards the \
people would tell the story of the flood and of the strangers who had come \
to help them when they needed it most.";

/// A passage of `CORPUS`, long enough for the substitution breaker.
pub fn sample_plaintext() -> String {
    let start = CORPUS
        .find("The mayor called")
        .expect("passage present in corpus");
    CORPUS[start..start + 480].to_string()
}

/// Quadgram counts of the cleaned corpus.
pub fn quadgram_counts(text: &str) -> BTreeMap<String, u64> {
    let letters = clean(text);
    let bytes = letters.as_bytes();
    let mut counts = BTreeMap::new();
    for w in bytes.windows(4) {
        let quad = String::from_utf8(w.to_vec()).expect("ascii letters");
        *counts.entry(quad).or_insert(0u64) += 1;
    }
    counts
}

pub fn corpus_scorer() -> QuadgramScorer {
    QuadgramScorer::from_pairs(quadgram_counts(CORPUS), &ScoringParams::default())
        .expect("corpus scorer builds")
}

/// Writes `QUAD,COUNT` records, one per line.
pub fn write_quadgram_file(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("quadgrams.txt");
    let mut file = File::create(&path).unwrap();
    for (quad, count) in quadgram_counts(text) {
        writeln!(file, "{},{}", quad, count).unwrap();
    }
    path
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    write!(file, "{}", content).unwrap();
    path
}

/// Fraction of positions where two strings of letters agree.
pub fn agreement(a: &str, b: &str) -> f64 {
    let a = clean(a);
    let b = clean(b);
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let same = a.bytes().zip(b.bytes()).filter(|(x, y)| x == y).count();
    same as f64 / a.len() as f64
}
