//! Shared fixtures for integration tests.

#![allow(dead_code)]

use domseg::{Dictionary, SuffixList};

pub const WORDS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/words.txt");
pub const SUFFIXES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/public_suffix_list.dat");

pub fn dictionary() -> Dictionary {
    Dictionary::load(WORDS).expect("fixture dictionary")
}

pub fn suffixes() -> SuffixList {
    SuffixList::load(SUFFIXES).expect("fixture suffix list")
}
