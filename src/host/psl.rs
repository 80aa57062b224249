//! Public suffix sets used by the suffix matcher.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use psl::{List, Psl};
use tracing::{info, warn};

use crate::error::DomsegError;

/// A set of public suffixes (lowercase ASCII, dot-joined in DNS order),
/// queried by exact match only.
pub trait SuffixSet: Send + Sync {
    /// Whether `suffix` is a known public suffix.
    fn contains(&self, suffix: &str) -> bool;
}

/// Suffix set loaded from a file in Public Suffix List format.
#[derive(Debug, Clone, Default)]
pub struct SuffixList {
    suffixes: HashSet<String>,
}

impl SuffixList {
    /// Build a list from suffix strings. Entries are trimmed and lowercased.
    pub fn from_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { suffixes }
    }

    /// Parse Public Suffix List text.
    ///
    /// `//` comments and blank lines are skipped, only the first token of a
    /// line is read, and `!` exception markers and `*.` wildcard prefixes are
    /// stripped. Unicode rules are stored in their IDNA ASCII form.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DomsegError> {
        let mut suffixes = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|e| DomsegError::SuffixDataUnavailable(e.to_string()))?;
            let Some(rule) = line.split_whitespace().next() else {
                continue;
            };
            if rule.starts_with("//") {
                continue;
            }

            let rule = rule.trim_start_matches('!').trim_start_matches("*.");
            if rule.is_empty() {
                continue;
            }

            if rule.is_ascii() {
                suffixes.insert(rule.to_lowercase());
                continue;
            }

            match idna::domain_to_ascii(rule) {
                Ok(ascii) => {
                    suffixes.insert(ascii);
                }
                Err(e) => warn!(rule, error = %e, "skipping unconvertible suffix rule"),
            }
        }

        if suffixes.is_empty() {
            return Err(DomsegError::SuffixDataUnavailable(
                "suffix list is empty".to_string(),
            ));
        }

        Ok(Self { suffixes })
    }

    /// Load a suffix list from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DomsegError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DomsegError::SuffixDataUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let list = Self::from_reader(file)?;
        info!(path = %path.display(), suffixes = list.len(), "loaded suffix list");
        Ok(list)
    }

    /// Number of suffixes.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Whether the list holds no suffixes.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl SuffixSet for SuffixList {
    fn contains(&self, suffix: &str) -> bool {
        self.suffixes.contains(suffix)
    }
}

/// Exact-membership view over the Public Suffix List compiled into the
/// `psl` crate.
///
/// A candidate is a member when the list's known suffix of the candidate
/// is the candidate itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSuffixes;

impl SuffixSet for BuiltinSuffixes {
    fn contains(&self, suffix: &str) -> bool {
        match List.suffix(suffix.as_bytes()) {
            Some(found) => found.is_known() && found.as_bytes() == suffix.as_bytes(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
// ===BEGIN ICANN DOMAINS===
com
uk
co.uk

// wildcard and exception rules
*.ck
!www.ck
公司.cn
";

    #[test]
    fn test_parse_psl_format() {
        let list = SuffixList::from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(list.contains("com"));
        assert!(list.contains("co.uk"));
        assert!(list.contains("ck"));
        assert!(list.contains("www.ck"));
        assert!(list.contains("xn--55qx5d.cn"));
        assert!(!list.contains("// ===BEGIN"));
        assert_eq!(list.len(), 6);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_empty_list_is_unavailable() {
        let result = SuffixList::from_reader("// only comments\n\n".as_bytes());
        assert!(matches!(result, Err(DomsegError::SuffixDataUnavailable(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SuffixList::load("/nonexistent/public_suffix_list.dat");
        assert!(matches!(result, Err(DomsegError::SuffixDataUnavailable(_))));
    }

    #[test]
    fn test_builtin_membership() {
        let builtin = BuiltinSuffixes;
        assert!(builtin.contains("com"));
        assert!(builtin.contains("co.uk"));
        assert!(!builtin.contains("example.com"));
        assert!(!builtin.contains("uk.co"));
    }
}
