//! Host-level processing ahead of segmentation.
//!
//! This module contains:
//! - Host normalization and validation (IDNA, length, IPv4, ACE input)
//! - Public suffix sets (file-backed and compiled-in)
//! - Host string helpers (port stripping, URL host extraction)

pub mod normalizer;
pub mod psl;
pub mod utils;

pub use self::normalizer::{normalize_host, is_ipv4_literal, NormalizedHost, ACE_PREFIX, MAX_DOMAIN_LENGTH};
pub use self::psl::{BuiltinSuffixes, SuffixList, SuffixSet};
pub use self::utils::{host_from_url, looks_like_url, strip_port};
