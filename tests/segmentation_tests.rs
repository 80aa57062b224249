//! Tests for word segmentation, alternate resolution and run classification.

mod common;

use domseg::*;
use proptest::prelude::*;

#[test]
fn test_segmentations_against_fixture() {
    let words = common::dictionary();
    let test_cases: Vec<(&str, Vec<Vec<&str>>)> = vec![
        ("example", vec![vec!["example"]]),
        ("shits", vec![vec!["shits"], vec!["shit", "s"]]),
        ("paypal", vec![vec!["paypal"], vec!["pay", "pal"]]),
        ("facebook", vec![vec!["facebook"], vec!["face", "book"]]),
        ("appstore", vec![vec!["app", "store"]]),
        ("applestore", vec![vec!["apple", "store"], vec!["app", "l", "e", "store"]]),
        ("mybank", vec![vec!["my", "bank"]]),
        ("com", vec![vec!["com"], vec!["co", "m"]]),
        ("xqz", vec![vec!["x", "q", "z"]]),
    ];

    for (run, expected) in test_cases {
        assert_eq!(segment_letters(run, &words), expected, "segmentation failed for: {}", run);
    }
}

#[test]
fn test_primary_is_longest_first_word() {
    let words = common::dictionary();
    let segmentations = segment_letters("facebookshop", &words);

    let resolution = resolve(segmentations, 2, 12, false).unwrap();
    assert_eq!(resolution.primary, ["facebook", "shop"]);
    assert_eq!(resolution.alternate, Some(vec!["face".to_string(), "book".to_string(), "shop".to_string()]));
}

#[test]
fn test_resolution_respects_level() {
    let words = common::dictionary();
    let resolution = resolve(segment_letters("paypal", &words), 1, 6, false).unwrap();
    assert_eq!(resolution.primary, ["paypal"]);
    assert!(resolution.alternate.is_none());
}

#[test]
fn test_non_letter_classification() {
    let tokens = classify_non_letter_run(2, "24-7??_");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Number, TokenKind::Dash, TokenKind::Number, TokenKind::Symbol, TokenKind::Dash]
    );
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["24", "-", "7", "??", "_"]);
}

#[test]
fn test_pathological_label() {
    let words = common::dictionary();
    let suffixes = common::suffixes();
    let label = "q".repeat(63);
    let input = format!("{}.{}.{}.{}", label, label, label, "com");

    let domain = Domain::parse(&input, &words, &suffixes).unwrap();
    assert_eq!(domain.primary().get(2).unwrap()[0].parts.len(), 63);
    assert!(domain.alternate().is_none());
}

proptest! {
    #[test]
    fn prop_every_segmentation_covers_run(run in "[a-z]{1,40}") {
        let words = common::dictionary();
        let segmentations = segment_letters(&run, &words);

        prop_assert!(!segmentations.is_empty());
        for words in &segmentations {
            prop_assert_eq!(words.concat(), run.clone());
        }
    }

    #[test]
    fn prop_unknown_letters_split_into_characters(run in "[jqvxz]{1,30}") {
        let words = common::dictionary();
        let segmentations = segment_letters(&run, &words);

        prop_assert_eq!(segmentations.len(), 1);
        prop_assert!(segmentations[0].iter().all(|w| w.len() == 1));
    }
}
