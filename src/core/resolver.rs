//! Selection of primary and alternate segmentations for a letter run.

use crate::types::rating;

/// The segmentations chosen for one letter run.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The first segmentation found
    pub primary: Vec<String>,
    /// A second-best segmentation, when the run diverges
    pub alternate: Option<Vec<String>>,
}

/// Choose the primary and alternate segmentations of a letter run.
///
/// The primary is always the first segmentation. An alternate is only
/// considered for runs with several segmentations at levels above 1. The
/// remaining candidates are scanned from last found to first found and the
/// lowest-rated one wins; a candidate replaces the current best only on a
/// strict improvement, and only if `alternate_exists` or its rating is below
/// the run length in characters.
///
/// Returns `None` for an empty segmentation list.
pub fn resolve(
    mut segmentations: Vec<Vec<String>>,
    level: usize,
    run_len: usize,
    alternate_exists: bool,
) -> Option<Resolution> {
    if segmentations.is_empty() {
        return None;
    }

    let candidates = segmentations.split_off(1);
    let primary = segmentations.pop()?;

    if candidates.is_empty() || level <= 1 {
        return Some(Resolution {
            primary,
            alternate: None,
        });
    }

    let mut best: Option<(Vec<String>, f64)> = None;
    for candidate in candidates.into_iter().rev() {
        let candidate_rating = rating(&candidate);
        let improves = best
            .as_ref()
            .map_or(true, |(_, best_rating)| candidate_rating < *best_rating);
        if improves && (alternate_exists || candidate_rating < run_len as f64) {
            best = Some((candidate, candidate_rating));
        }
    }

    Some(Resolution {
        primary,
        alternate: best.map(|(words, _)| words),
    })
}
