use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct QuadgramStats {
    // Distinct quadgrams with a learned score
    pub distinct: usize,
    // Sum of every accepted count
    pub total: u64,
    // Records dropped because they were not four letters or had a zero count
    pub skipped: usize,
    pub floor: f64,
}

/// One overlapping window of a scored string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowScore {
    pub quadgram: String,
    pub score: f64,
    pub known: bool,
}
