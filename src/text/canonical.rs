//! Canonicalization of domain text into constrained alphabets.
//!
//! The canonical alphabet and the bigram enumeration order are part of the
//! downstream feature layout and must not change.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The 19 symbols of the canonical alphabet, in feature order.
pub const CANONICAL_ALPHABET: [char; 19] = [
    '.', '-', '0', 'a', 'c', 'd', 'e', 'g', 'i', 'l', 'm', 'o', 'p', 'r', 's', 't', 'u', 'w', '?',
];

/// Replacement for any character outside the target alphabet.
pub const UNKNOWN: char = '?';

/// Canonicalization modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalMode {
    /// Fold digits and underscores, then fold similar-looking letters onto
    /// the canonical alphabet.
    FoldSimilar,
    /// Fold digits to `0` and `_` to `-` only.
    FoldDigits,
    /// Replace characters outside `[.-0-9a-z]` and nothing else.
    Structural,
}

/// Canonicalize `text` under `mode`.
///
/// Total over any input; the result has one character per input character.
///
/// # Examples
///
/// ```
/// use domseg::{canonicalize, CanonicalMode};
///
/// assert_eq!(canonicalize("my_site42.com", CanonicalMode::FoldDigits), "my-site00.com");
/// assert_eq!(canonicalize("my_site42.com", CanonicalMode::FoldSimilar), "mi-site00.com");
/// assert_eq!(canonicalize("my_site42.com", CanonicalMode::Structural), "my?site42.com");
/// ```
pub fn canonicalize(text: &str, mode: CanonicalMode) -> String {
    text.chars().map(|ch| canonicalize_char(ch, mode)).collect()
}

fn canonicalize_char(ch: char, mode: CanonicalMode) -> char {
    match mode {
        CanonicalMode::Structural => structural(ch),
        CanonicalMode::FoldDigits => structural(fold_digit(ch)),
        CanonicalMode::FoldSimilar => {
            let folded = fold_letter(fold_digit(ch));
            if CANONICAL_ALPHABET.contains(&folded) {
                folded
            } else {
                UNKNOWN
            }
        }
    }
}

fn fold_digit(ch: char) -> char {
    match ch {
        '1'..='9' => '0',
        '_' => '-',
        other => other,
    }
}

fn fold_letter(ch: char) -> char {
    match ch {
        'k' => 'c',
        'b' => 'd',
        'j' => 'g',
        'y' => 'i',
        'h' => 'l',
        'n' => 'm',
        'q' => 'p',
        'x' => 'r',
        'z' => 's',
        'f' => 't',
        'v' => 'w',
        other => other,
    }
}

fn structural(ch: char) -> char {
    if is_structural(ch) {
        ch
    } else {
        UNKNOWN
    }
}

/// Whether `ch` is in the structural alphabet `[.-0-9a-z]`.
pub fn is_structural(ch: char) -> bool {
    matches!(ch, '.' | '-' | '0'..='9' | 'a'..='z')
}

static BIGRAMS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut pairs = Vec::with_capacity(CANONICAL_ALPHABET.len() * CANONICAL_ALPHABET.len() - 1);
    for first in CANONICAL_ALPHABET {
        for second in CANONICAL_ALPHABET {
            if first == '.' && second == '.' {
                continue;
            }
            pairs.push([first, second].iter().collect());
        }
    }
    pairs
});

static BIGRAM_POSITIONS: LazyLock<HashMap<(char, char), usize>> = LazyLock::new(|| {
    BIGRAMS
        .iter()
        .enumerate()
        .filter_map(|(index, pair)| {
            let mut chars = pair.chars();
            Some(((chars.next()?, chars.next()?), index))
        })
        .collect()
});

/// All ordered pairs of canonical symbols except `".."`, row-major over
/// [`CANONICAL_ALPHABET`]. There are 360 of them.
pub fn bigram_index() -> &'static [String] {
    &BIGRAMS
}

/// Position of the pair `(first, second)` in [`bigram_index`].
pub fn bigram_position(first: char, second: char) -> Option<usize> {
    BIGRAM_POSITIONS.get(&(first, second)).copied()
}
