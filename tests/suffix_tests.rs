//! Tests for public suffix loading and longest-match lookup.

mod common;

use domseg::*;

#[test]
fn test_fixture_suffix_list() {
    let suffixes = common::suffixes();
    assert!(suffixes.contains("co.uk"));
    assert!(suffixes.contains("blogspot.com"));
    assert!(suffixes.contains("ck"));
    assert!(suffixes.contains("www.ck"));
    assert!(!suffixes.contains("example.com"));
}

#[test]
fn test_longest_match() {
    let suffixes = common::suffixes();
    let test_cases = vec![
        (vec!["com", "example"], "com"),
        (vec!["uk", "co", "example"], "co.uk"),
        (vec!["uk", "ac", "oxford", "www"], "ac.uk"),
        (vec!["com", "blogspot", "myblog"], "blogspot.com"),
        (vec!["io", "github", "user"], "github.io"),
        (vec!["test", "example"], "test"),
    ];

    for (labels, expected) in test_cases {
        assert_eq!(match_suffix(&labels, &suffixes), expected, "suffix failed for: {:?}", labels);
    }
}

#[test]
fn test_builtin_list_matches_domains() {
    let words = Dictionary::from_words(["shop", "bank"]);
    let builtin = BuiltinSuffixes;

    let domain = Domain::parse("shop.example.co.uk", &words, &builtin).unwrap();
    assert_eq!(domain.suffix(), "co.uk");

    let domain = Domain::parse("bank.com", &words, &builtin).unwrap();
    assert_eq!(domain.suffix(), "com");
}

#[test]
fn test_max_suffix_labels() {
    assert_eq!(MAX_SUFFIX_LABELS, 5);
}

#[test]
fn test_internationalized_suffix_never_matches() {
    let words = Dictionary::from_words(["shop"]);
    let list = SuffixList::from_reader("cn\n公司.cn\n".as_bytes()).unwrap();
    assert!(list.contains("xn--55qx5d.cn"));

    let domain = Domain::parse("shop.公司.cn", &words, &list).unwrap();
    assert_eq!(domain.labels(), ["cn", "??", "shop"]);
    assert_eq!(domain.suffix(), "cn");

    let domain = Domain::parse("shop.公司.cn", &words, &BuiltinSuffixes).unwrap();
    assert_eq!(domain.suffix(), "cn");
}
