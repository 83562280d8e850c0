use cipherforge::error::CipherError;
use cipherforge::scorer::loader::{
    load_dictionary, load_dictionary_from_path, load_quadgrams, load_quadgrams_from_path,
};
use std::io::Cursor;
use std::io::Write;
use tempfile::NamedTempFile;

// --- QUADGRAM LOAD TESTS ---

#[test]
fn test_loader_parses_inline_records() {
    let raw = load_quadgrams(Cursor::new("TION,13168375\nNTHE,11234972\n")).unwrap();
    assert_eq!(raw.quadgrams, vec!["TION", "NTHE"]);
    assert_eq!(raw.counts, vec![13168375, 11234972]);
}

#[test]
fn test_loader_parses_space_separated_records() {
    let raw = load_quadgrams(Cursor::new("TION 100\nTHER 50")).unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.quadgrams[1], "THER");
    assert_eq!(raw.counts[1], 50);
}

#[test]
fn test_loader_handles_several_records_per_line() {
    let raw = load_quadgrams(Cursor::new("AAAA:1 BBBB:2\tCCCC 3\n\n  DDDD,4  \n")).unwrap();
    assert_eq!(raw.quadgrams, vec!["AAAA", "BBBB", "CCCC", "DDDD"]);
    assert_eq!(raw.counts, vec![1, 2, 3, 4]);
}

#[test]
fn test_loader_rejects_bad_count() {
    let err = load_quadgrams(Cursor::new("TION,12x\n")).unwrap_err();
    assert!(matches!(err, CipherError::Validation(_)), "got {:?}", err);
    assert!(err.to_string().contains("TION"));
}

#[test]
fn test_loader_rejects_dangling_quadgram() {
    let err = load_quadgrams(Cursor::new("TION 5\nTHER")).unwrap_err();
    assert!(matches!(err, CipherError::Validation(_)));
}

#[test]
fn test_loader_empty_input_is_empty_table() {
    let raw = load_quadgrams(Cursor::new("")).unwrap();
    assert!(raw.is_empty());
}

#[test]
fn test_loader_missing_file_is_load_error() {
    let err = load_quadgrams_from_path("definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, CipherError::Load { .. }), "got {:?}", err);
}

#[test]
fn test_loader_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ABCD,10").unwrap();
    writeln!(file, "BCDE,20").unwrap();
    let raw = load_quadgrams_from_path(file.path()).unwrap();
    assert_eq!(raw.counts.iter().sum::<u64>(), 30);
}

// --- DICTIONARY LOAD TESTS ---

#[test]
fn test_dictionary_normalizes_case() {
    let dict = load_dictionary(Cursor::new("the Quick\nbrown  FOX\n")).unwrap();
    assert_eq!(dict.len(), 4);
    assert!(dict.contains("QUICK"));
    assert!(dict.contains("THE"));
    assert!(!dict.contains("the"));
}

#[test]
fn test_dictionary_missing_file_is_load_error() {
    let err = load_dictionary_from_path("nope/dictionary.txt").unwrap_err();
    assert!(matches!(err, CipherError::Load { .. }));
    assert!(err.to_string().contains("nope/dictionary.txt"));
}
