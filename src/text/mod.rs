//! Character-level processing of domain text.
//!
//! This module contains:
//! - Canonicalization into the structural and canonical alphabets
//! - The canonical bigram index
//! - Classification of non-letter runs inside a label

pub mod canonical;
pub mod classifier;

pub use canonical::{
    bigram_index, bigram_position, canonicalize, is_structural, CanonicalMode, CANONICAL_ALPHABET,
};
pub use classifier::classify_non_letter_run;
