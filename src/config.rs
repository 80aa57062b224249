//! Configuration and one-time resource loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DomsegError;
use crate::host::psl::{BuiltinSuffixes, SuffixList, SuffixSet};
use crate::lexicon::Dictionary;

/// Top-level configuration, read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Resource locations
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the dictionary and suffix list are read from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ResourceConfig {
    /// Word list, one word per line
    pub dictionary: Option<PathBuf>,

    /// Public Suffix List file; the compiled-in list is used when unset
    pub suffix_list: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty: bool,

    /// Emit the alternate segmentation when present
    pub include_alternate: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            include_alternate: true,
        }
    }
}

/// Logging-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, DomsegError> {
        toml::from_str(text).map_err(|e| DomsegError::Config(e.to_string()))
    }

    /// Read a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DomsegError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| DomsegError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Load the dictionary and suffix set this configuration points to.
    pub fn load_resources(&self) -> Result<Resources, DomsegError> {
        let dictionary_path = self.resources.dictionary.as_ref().ok_or_else(|| {
            DomsegError::DictionaryDataUnavailable("no dictionary configured".to_string())
        })?;
        let dictionary = Dictionary::load(dictionary_path)?;

        let suffixes: Box<dyn SuffixSet> = match &self.resources.suffix_list {
            Some(path) => Box::new(SuffixList::load(path)?),
            None => {
                info!("using compiled-in public suffix list");
                Box::new(BuiltinSuffixes)
            }
        };

        Ok(Resources::new(dictionary, suffixes))
    }
}

/// Read-only word and suffix data, loaded once and shared by every parse.
pub struct Resources {
    /// Dictionary used by the word segmenter
    pub dictionary: Dictionary,
    /// Suffix set used by the suffix matcher
    pub suffixes: Box<dyn SuffixSet>,
}

impl Resources {
    /// Bundle already-loaded resources.
    pub fn new(dictionary: Dictionary, suffixes: Box<dyn SuffixSet>) -> Self {
        Self {
            dictionary,
            suffixes,
        }
    }

    /// A parser borrowing these resources.
    pub fn parser(&self) -> crate::core::DomainParser<'_> {
        crate::core::DomainParser::new(&self.dictionary, self.suffixes.as_ref())
    }
}
