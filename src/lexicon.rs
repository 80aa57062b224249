//! Dictionary word set used by the word segmenter.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::error::DomsegError;

/// A set of known words, queried by exact match only.
pub trait WordSet: Send + Sync {
    /// Whether `word` is a known word.
    fn contains(&self, word: &str) -> bool;
}

/// In-memory dictionary of lowercase ASCII words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from an iterator of words. Words are trimmed and
    /// lowercased; empty entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read one word per line. Blank lines and lines starting with `#` are
    /// skipped.
    ///
    /// Fails with [`DomsegError::DictionaryDataUnavailable`] if the reader
    /// errors or yields no words.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DomsegError> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|e| DomsegError::DictionaryDataUnavailable(e.to_string()))?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
        }

        if words.is_empty() {
            return Err(DomsegError::DictionaryDataUnavailable(
                "word list is empty".to_string(),
            ));
        }

        Ok(Self { words })
    }

    /// Load a word list from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DomsegError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DomsegError::DictionaryDataUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let dictionary = Self::from_reader(file)?;
        info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSet for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
