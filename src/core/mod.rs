//! Core segmentation engine.
//!
//! This module contains the main domain operations:
//! - Word segmentation of letter runs
//! - Primary/alternate resolution by rating
//! - Longest-match public suffix lookup
//! - Domain assembly from a raw string

pub mod assembler;
pub mod resolver;
pub mod segmenter;
pub mod suffix;

pub use assembler::{Domain, DomainParser};
pub use resolver::{resolve, Resolution};
pub use segmenter::{complete_greedy, segment_letters};
pub use suffix::{match_suffix, MAX_SUFFIX_LABELS};
