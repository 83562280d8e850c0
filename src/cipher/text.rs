use super::letter_index;

/// Keeps ASCII letters only, uppercased.
pub fn clean(s: &str) -> String {
    s.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase() as char)
        .collect()
}

/// Letters of `s` as alphabet positions, everything else dropped.
pub fn letter_indices(s: &str) -> Vec<u8> {
    s.bytes().filter_map(letter_index).collect()
}

pub fn split_words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
