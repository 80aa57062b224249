//! Longest-match public suffix lookup over a reversed label list.

use crate::host::psl::SuffixSet;

/// Maximum number of labels a suffix candidate may span.
pub const MAX_SUFFIX_LABELS: usize = 5;

/// Find the longest public suffix at the end of a domain.
///
/// `labels` are in reversed order: index 0 is the rightmost label. Candidates
/// of up to [`MAX_SUFFIX_LABELS`] labels are joined in DNS order and tested
/// longest first.
///
/// When nothing matches, the rightmost label is returned anyway, so a
/// non-empty result does not imply list membership.
///
/// Labels come from the structural canonical form, where non-ASCII
/// characters are already `?`, so internationalized suffixes such as
/// `公司.cn` never match and the lookup settles on a shorter ASCII suffix.
///
/// # Examples
///
/// ```
/// use domseg::{match_suffix, SuffixList};
///
/// let suffixes = SuffixList::from_suffixes(["com", "co.uk"]);
/// assert_eq!(match_suffix(&["uk", "co", "example"], &suffixes), "co.uk");
/// assert_eq!(match_suffix(&["com", "example"], &suffixes), "com");
/// ```
pub fn match_suffix<S: AsRef<str>>(labels: &[S], suffixes: &dyn SuffixSet) -> String {
    let longest = labels.len().min(MAX_SUFFIX_LABELS);

    for count in (2..=longest).rev() {
        let candidate = join_reversed(&labels[..count]);
        if suffixes.contains(&candidate) {
            return candidate;
        }
    }

    labels
        .first()
        .map(|label| label.as_ref().to_string())
        .unwrap_or_default()
}

fn join_reversed<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .rev()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(".")
}
