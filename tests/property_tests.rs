use cipherforge::cipher::caesar::rotate;
use cipherforge::cipher::{clean, CipherKey};
use cipherforge::config::ScoringParams;
use cipherforge::random::RandomSource;
use cipherforge::scorer::QuadgramScorer;
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_key()(seed in any::<u64>()) -> CipherKey {
        RandomSource::new(seed).random_permutation()
    }
}

prop_compose! {
    fn arb_letters(min: usize)(s in proptest::string::string_regex(
        &format!("[A-Za-z]{{{},80}}", min)
    ).unwrap()) -> String {
        s
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_rotation_round_trip(text in "[ -~]{0,60}", amount in -200i64..200) {
        let expected = rotate(&text, 0);
        let back = rotate(&rotate(&text, amount), -amount);
        prop_assert_eq!(back, expected);
    }

    #[test]
    fn test_rotation_is_periodic(text in "[a-zA-Z ]{0,40}", amount in -100i64..100) {
        prop_assert_eq!(rotate(&text, amount), rotate(&text, amount + 26));
    }

    #[test]
    fn test_inverse_key_undoes_encryption(key in arb_key(), text in "[ -~]{0,80}") {
        let ciphertext = key.apply(&text);
        prop_assert_eq!(key.inverse().apply(&ciphertext), text.to_ascii_uppercase());
    }

    #[test]
    fn test_random_key_is_permutation(key in arb_key()) {
        let mut seen = [false; 26];
        for &i in key.indices().iter() {
            prop_assert!(!seen[i as usize]);
            seen[i as usize] = true;
        }
        prop_assert!(CipherKey::parse(&key.to_string()).is_ok());
    }

    #[test]
    fn test_swap_keeps_permutation(key in arb_key(), a in 0usize..26, b in 0usize..26) {
        let mut swapped = key;
        swapped.swap(a, b);
        prop_assert!(CipherKey::from_indices(swapped.into_indices()).is_ok());
        swapped.swap(a, b);
        prop_assert_eq!(swapped, key);
    }

    #[test]
    fn test_empty_table_scores_only_length(a in arb_letters(4), b in arb_letters(4)) {
        let scorer = QuadgramScorer::empty(&ScoringParams::default()).unwrap();
        let sa = scorer.score_str(&a).unwrap();
        let sb = scorer.score_str(&b).unwrap();
        if clean(&a).len() == clean(&b).len() {
            prop_assert!((sa - sb).abs() < 1e-9);
        }
        let windows = (clean(&a).len() - 3) as f64;
        prop_assert!((sa - windows * scorer.floor()).abs() < 1e-6);
    }

    #[test]
    fn test_score_with_key_matches_applied_text(key in arb_key(), text in arb_letters(4)) {
        let scorer = QuadgramScorer::from_pairs(
            [("THAT", 5u64), ("HERE", 3), ("ABCD", 1)],
            &ScoringParams::default(),
        ).unwrap();
        let letters = cipherforge::cipher::text::letter_indices(&text);
        let direct = scorer.score_with_key(&letters, &key);
        let applied = scorer.score_str(&key.apply(&text)).unwrap();
        prop_assert!((direct - applied).abs() < 1e-9);
    }
}
