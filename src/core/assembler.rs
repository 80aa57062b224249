//! Domain assembly: validation, label splitting and per-level segmentation.
//!
//! This module provides the main API for turning a raw domain string into a
//! [`Domain`] with primary and alternate token lists per level.

use serde::Serialize;
use tracing::trace;

use crate::core::resolver::resolve;
use crate::core::segmenter::segment_letters;
use crate::core::suffix::match_suffix;
use crate::error::DomsegError;
use crate::host::normalizer::normalize_host;
use crate::host::psl::SuffixSet;
use crate::lexicon::WordSet;
use crate::text::canonical::{canonicalize, CanonicalMode};
use crate::text::classifier::classify_non_letter_run;
use crate::types::{LevelMap, Token};

/// A parsed and segmented domain name.
///
/// Built once by [`DomainParser::parse`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    name: String,
    ascii: String,
    idn: bool,
    labels: Vec<String>,
    suffix: String,
    primary: LevelMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternate: Option<LevelMap>,
}

impl Domain {
    /// Parse `raw` with the given word and suffix sets.
    ///
    /// Shorthand for `DomainParser::new(words, suffixes).parse(raw)`.
    pub fn parse(raw: &str, words: &dyn WordSet, suffixes: &dyn SuffixSet) -> Result<Self, DomsegError> {
        DomainParser::new(words, suffixes).parse(raw)
    }

    /// Normalized name in its Unicode form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized name in its IDNA ASCII form.
    pub fn ascii(&self) -> &str {
        &self.ascii
    }

    /// Whether the name needed non-ASCII to ASCII transliteration.
    pub fn is_idn(&self) -> bool {
        self.idn
    }

    /// Labels in reversed order; index 0 is the rightmost label (level 1).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Longest matching public suffix, or the rightmost label when none
    /// matched.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Most likely token lists per level.
    pub fn primary(&self) -> &LevelMap {
        &self.primary
    }

    /// Second-best token lists per level, present only when some letter run
    /// had a qualifying alternate segmentation.
    pub fn alternate(&self) -> Option<&LevelMap> {
        self.alternate.as_ref()
    }

    /// Number of labels.
    pub fn level_count(&self) -> usize {
        self.labels.len()
    }

    /// The Unicode name canonicalized under `mode`.
    pub fn canonical(&self, mode: CanonicalMode) -> String {
        canonicalize(&self.name, mode)
    }
}

/// Parses domains against injected, read-only word and suffix sets.
///
/// A parser holds no per-call state and can be shared across threads.
#[derive(Clone, Copy)]
pub struct DomainParser<'a> {
    words: &'a dyn WordSet,
    suffixes: &'a dyn SuffixSet,
}

impl<'a> DomainParser<'a> {
    /// Create a parser over a dictionary and a suffix set.
    pub fn new(words: &'a dyn WordSet, suffixes: &'a dyn SuffixSet) -> Self {
        Self { words, suffixes }
    }

    /// Validate, normalize and segment a raw domain string.
    ///
    /// # Examples
    ///
    /// ```
    /// use domseg::{Dictionary, DomainParser, SuffixList};
    ///
    /// let words = Dictionary::from_words(["com", "mail", "box"]);
    /// let suffixes = SuffixList::from_suffixes(["com"]);
    /// let parser = DomainParser::new(&words, &suffixes);
    ///
    /// let domain = parser.parse("MailBox.com:443").unwrap();
    /// assert_eq!(domain.labels(), ["com", "mailbox"]);
    /// assert_eq!(domain.suffix(), "com");
    /// assert_eq!(domain.primary().get(2).unwrap()[0].parts, ["mail", "box"]);
    /// ```
    pub fn parse(&self, raw: &str) -> Result<Domain, DomsegError> {
        // Step 1: Normalize and validate
        let host = normalize_host(raw)?;

        // Step 2: Split labels, rightmost first
        let structural = canonicalize(&host.unicode, CanonicalMode::Structural);
        let labels: Vec<String> = structural.split('.').rev().map(str::to_string).collect();
        if labels.iter().any(String::is_empty) {
            return Err(DomsegError::EmptyLabel);
        }

        // Step 3: Suffix and per-level segmentation
        let suffix = match_suffix(&labels, self.suffixes);

        let mut builder = VariantBuilder::new(labels.len());
        for (index, label) in labels.iter().enumerate() {
            self.segment_label(label, index + 1, &mut builder);
        }
        let (primary, alternate) = builder.finish();

        Ok(Domain {
            name: host.unicode,
            ascii: host.ascii,
            idn: host.idn,
            labels,
            suffix,
            primary,
            alternate,
        })
    }

    fn segment_label(&self, label: &str, level: usize, builder: &mut VariantBuilder) {
        for (is_letters, run) in split_letter_runs(label) {
            if !is_letters {
                for token in classify_non_letter_run(level, run) {
                    builder.push_shared(token);
                }
                continue;
            }

            let segmentations = segment_letters(run, self.words);
            trace!(run, level, count = segmentations.len(), "segmented letter run");

            let run_len = run.chars().count();
            let Some(resolution) = resolve(segmentations, level, run_len, builder.has_diverged()) else {
                continue;
            };

            let primary = Token::latin(run, level, resolution.primary);
            match resolution.alternate {
                Some(words) => {
                    trace!(run, level, alternate = ?words, "alternate segmentation");
                    builder.push_diverging(primary, Token::latin(run, level, words));
                }
                None => builder.push_shared(primary),
            }
        }
    }
}

/// Split a label into maximal runs of ASCII lowercase letters and of
/// everything else, tagged with whether the run is letters.
fn split_letter_runs(label: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (index, ch) in label.char_indices() {
        let is_letter = ch.is_ascii_lowercase();
        match current {
            Some(kind) if kind == is_letter => {}
            Some(kind) => {
                runs.push((kind, &label[start..index]));
                start = index;
                current = Some(is_letter);
            }
            None => current = Some(is_letter),
        }
    }

    if let Some(kind) = current {
        runs.push((kind, &label[start..]));
    }

    runs
}

/// Accumulates primary and alternate token lists per level.
///
/// Both variants are filled in lockstep; the alternate only differs where a
/// diverging token was pushed. It is materialized by [`finish`] only if at
/// least one divergence was recorded.
///
/// [`finish`]: VariantBuilder::finish
struct VariantBuilder {
    primary: Vec<Vec<Token>>,
    alternate: Vec<Vec<Token>>,
    diverged: bool,
}

impl VariantBuilder {
    fn new(levels: usize) -> Self {
        Self {
            primary: vec![Vec::new(); levels],
            alternate: vec![Vec::new(); levels],
            diverged: false,
        }
    }

    fn has_diverged(&self) -> bool {
        self.diverged
    }

    fn push_shared(&mut self, token: Token) {
        let index = token.level - 1;
        self.alternate[index].push(token.clone());
        self.primary[index].push(token);
    }

    fn push_diverging(&mut self, primary: Token, alternate: Token) {
        self.diverged = true;
        self.primary[primary.level - 1].push(primary);
        self.alternate[alternate.level - 1].push(alternate);
    }

    fn finish(self) -> (LevelMap, Option<LevelMap>) {
        let alternate = self.diverged.then(|| LevelMap::new(self.alternate));
        (LevelMap::new(self.primary), alternate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::psl::SuffixList;
    use crate::lexicon::Dictionary;
    use crate::types::TokenKind;

    #[test]
    fn test_split_letter_runs() {
        assert_eq!(
            split_letter_runs("mp3shits"),
            vec![(true, "mp"), (false, "3"), (true, "shits")]
        );
        assert_eq!(split_letter_runs("a-b"), vec![(true, "a"), (false, "-"), (true, "b")]);
        assert_eq!(split_letter_runs("42"), vec![(false, "42")]);
        assert!(split_letter_runs("").is_empty());
    }

    #[test]
    fn test_variant_builder_without_divergence() {
        let mut builder = VariantBuilder::new(2);
        builder.push_shared(Token::run("7", 2, TokenKind::Number));
        let (primary, alternate) = builder.finish();
        assert_eq!(primary.len(), 2);
        assert!(alternate.is_none());
    }

    #[test]
    fn test_variant_builder_backfills_alternate() {
        let mut builder = VariantBuilder::new(2);
        builder.push_shared(Token::latin("com", 1, vec!["com".to_string()]));
        builder.push_diverging(
            Token::latin("ab", 2, vec!["ab".to_string()]),
            Token::latin("ab", 2, vec!["a".to_string(), "b".to_string()]),
        );
        let (primary, alternate) = builder.finish();
        let alternate = alternate.unwrap();

        assert_eq!(primary.get(1), alternate.get(1));
        assert_ne!(primary.get(2), alternate.get(2));
    }

    #[test]
    fn test_parse_mp3() {
        let words = Dictionary::from_words(["com", "shit", "shits"]);
        let suffixes = SuffixList::from_suffixes(["com"]);
        let domain = Domain::parse("mp3shits.com", &words, &suffixes).unwrap();

        assert_eq!(domain.labels(), ["com", "mp3shits"]);
        assert_eq!(domain.suffix(), "com");

        let level2 = domain.primary().get(2).unwrap();
        assert_eq!(level2.len(), 3);
        assert_eq!(level2[0].parts, ["m", "p"]);
        assert_eq!(level2[1].kind, TokenKind::Number);
        assert_eq!(level2[2].parts, ["shits"]);

        let alternate = domain.alternate().unwrap();
        assert_eq!(alternate.get(2).unwrap()[2].parts, ["shit", "s"]);
        assert_eq!(alternate.get(1), domain.primary().get(1));
    }

    #[test]
    fn test_empty_label_rejected() {
        let words = Dictionary::from_words(["com"]);
        let suffixes = SuffixList::from_suffixes(["com"]);
        let result = Domain::parse("example.com.", &words, &suffixes);
        assert_eq!(result.unwrap_err(), DomsegError::EmptyLabel);
    }
}
