//! Dictionary-covering word segmentation of letter runs.
//!
//! A letter run is scanned with every candidate first-word length, longest
//! first. Each accepted first word is completed greedily, so the result is
//! one full segmentation per accepted first word, in scan order. The first
//! segmentation is the one with the longest first word.

use crate::lexicon::WordSet;

/// Byte offsets of every character boundary in `text`, including the end.
fn char_bounds(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Whether `words` together are at least `run_len` characters long.
fn covers(words: &[String], run_len: usize) -> bool {
    words.iter().map(|w| w.chars().count()).sum::<usize>() >= run_len
}

/// Enumerate full segmentations of `run` into dictionary words.
///
/// For each first-word length `e` from the run length down to 1, the prefix
/// is accepted if it is a dictionary word, or if `e == 1` and no prefix has
/// been accepted during this scan. An accepted prefix is completed with
/// [`complete_greedy`] and recorded once it covers the run.
///
/// Returns an empty vector only for an empty run.
///
/// # Examples
///
/// ```
/// use domseg::{segment_letters, Dictionary};
///
/// let words = Dictionary::from_words(["shit", "shits"]);
/// let segmentations = segment_letters("shits", &words);
/// assert_eq!(segmentations, vec![vec!["shits"], vec!["shit", "s"]]);
/// ```
pub fn segment_letters(run: &str, words: &dyn WordSet) -> Vec<Vec<String>> {
    let bounds = char_bounds(run);
    let run_len = bounds.len() - 1;

    let mut segmentations: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut accepted_any = false;

    for e in (1..=run_len).rev() {
        let prefix = &run[..bounds[e]];
        let forced = e == 1 && !accepted_any;
        if !forced && !words.contains(prefix) {
            continue;
        }
        accepted_any = true;

        current = vec![prefix.to_string()];
        if e < run_len {
            current.extend(complete_greedy(&run[bounds[e]..], words));
        }

        if covers(&current, run_len) || e == run_len {
            segmentations.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() && (segmentations.is_empty() || covers(&current, run_len)) {
        segmentations.push(current);
    }

    segmentations
}

/// Split `text` into words along a single path: at each step take the
/// longest dictionary prefix, or one character when none matches.
pub fn complete_greedy(text: &str, words: &dyn WordSet) -> Vec<String> {
    let mut result = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let bounds = char_bounds(rest);
        let len = (1..bounds.len())
            .rev()
            .find(|&e| words.contains(&rest[..bounds[e]]))
            .unwrap_or(1);

        result.push(rest[..bounds[len]].to_string());
        rest = &rest[bounds[len]..];
    }

    result
}
