//! domseg - Domain name normalization and label segmentation
//!
//! This crate normalizes an internet domain name, splits it into labels and
//! decomposes every label into dictionary words, digit runs, dash runs and
//! leftover symbol runs. Each label gets two parallel segmentations: a
//! primary (most likely) and, where the words are ambiguous, an alternate
//! (second best). The output is meant as input features for classifiers
//! that separate legitimate names from generated or disguised ones.
//!
//! # Features
//!
//! - **Deterministic**: Same input and word list always give the same tokens
//! - **IDNA aware**: Unicode names are validated through their ASCII form
//! - **Public Suffix List**: Longest-match suffix lookup over up to 5 labels
//! - **Injected data**: Dictionary and suffix sets are loaded once and shared
//!
//! # Quick Start
//!
//! ```
//! use domseg::{Dictionary, DomainParser, SuffixList, TokenKind};
//!
//! let words = Dictionary::from_words(["com", "shit", "shits"]);
//! let suffixes = SuffixList::from_suffixes(["com", "co.uk"]);
//! let parser = DomainParser::new(&words, &suffixes);
//!
//! let domain = parser.parse("mp3shits.com")?;
//! assert_eq!(domain.suffix(), "com");
//!
//! // Level 2 is "mp3shits": letters, a number, letters
//! let tokens = domain.primary().get(2).unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::Number);
//! assert_eq!(tokens[2].parts, ["shits"]);
//!
//! // The ambiguous run also gets a second-best split
//! let alternate = domain.alternate().unwrap().get(2).unwrap();
//! assert_eq!(alternate[2].parts, ["shit", "s"]);
//! # Ok::<(), domseg::DomsegError>(())
//! ```
//!
//! # Token Kinds
//!
//! | Kind     | Content                                   |
//! |----------|-------------------------------------------|
//! | `LATIN`  | Letter run, split into dictionary words   |
//! | `NUMBER` | Digit run                                 |
//! | `DASH`   | Run of `-` / `_`                          |
//! | `SYMBOL` | Anything else, e.g. `?` for non-ASCII     |
//! | `DOT`    | Reserved, never emitted                   |
//!
//! # Error Handling
//!
//! All functions return `Result<T, DomsegError>`. Common error cases:
//!
//! - Names longer than 255 characters
//! - IPv4 literals and already ACE-encoded (`xn--`) input
//! - Empty labels and characters invalid in host names
//! - Missing or empty dictionary and suffix files

// Re-export the main parsing API
pub use crate::core::{Domain, DomainParser};

// Re-export engine building blocks
pub use crate::core::{complete_greedy, match_suffix, resolve, segment_letters, Resolution, MAX_SUFFIX_LABELS};

// Re-export public types
pub use config::{Config, Resources};
pub use error::DomsegError;
pub use host::{normalize_host, BuiltinSuffixes, NormalizedHost, SuffixList, SuffixSet};
pub use lexicon::{Dictionary, WordSet};
pub use text::{bigram_index, bigram_position, canonicalize, classify_non_letter_run, CanonicalMode, CANONICAL_ALPHABET};
pub use types::{rating, LevelMap, Token, TokenKind};

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod lexicon;
pub mod text;
pub mod types;
