//! Host normalization and validation ahead of segmentation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::DomsegError;
use crate::host::utils::strip_port;
use crate::text::canonical::is_structural;

/// Maximum length of the input and of its decoded Unicode form.
pub const MAX_DOMAIN_LENGTH: usize = 255;

/// Prefix of an ASCII-compatible encoded label.
pub const ACE_PREFIX: &str = "xn--";

// Literal pattern; compilation is checked by `test_ipv4_pattern_compiles`.
static IPV4_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}").expect("static regex")
});

/// A host that passed validation, in both its ASCII and Unicode forms.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedHost {
    /// Lowercased, trimmed input without port
    pub input: String,
    /// IDNA ASCII form
    pub ascii: String,
    /// IDNA Unicode form
    pub unicode: String,
    /// Whether the ASCII form differs from the input
    pub idn: bool,
}

/// Normalize and validate a raw domain string.
///
/// This function:
/// 1. Strips a trailing `:port`, lowercases and trims
/// 2. Applies IDNA ASCII conversion and checks the structural alphabet
/// 3. Applies IDNA Unicode conversion and checks lengths
/// 4. Rejects pre-encoded (`xn--`) input and IPv4 literals
pub fn normalize_host(raw: &str) -> Result<NormalizedHost, DomsegError> {
    let input = strip_port(raw.trim()).to_lowercase().trim().to_string();

    if input.chars().count() > MAX_DOMAIN_LENGTH {
        return Err(reject(&input, DomsegError::InputTooLong));
    }

    if input.is_ascii() && !input.chars().all(is_structural) {
        return Err(reject(&input, DomsegError::InvalidCharacters));
    }

    let ascii = idna::domain_to_ascii(&input).map_err(|e| reject(&input, e.into()))?;
    if !ascii.chars().all(is_structural) {
        return Err(reject(&input, DomsegError::InvalidCharacters));
    }

    let (unicode, result) = idna::domain_to_unicode(&ascii);
    result.map_err(|e| reject(&input, e.into()))?;
    if unicode.chars().count() > MAX_DOMAIN_LENGTH {
        return Err(reject(&input, DomsegError::InputTooLong));
    }

    if input.contains(ACE_PREFIX) {
        return Err(reject(&input, DomsegError::PreEncodedIdnRejected));
    }

    if is_ipv4_literal(&ascii) {
        return Err(reject(&input, DomsegError::IpLiteralRejected));
    }

    let idn = ascii != input;

    Ok(NormalizedHost {
        input,
        ascii,
        unicode,
        idn,
    })
}

/// Whether `host` contains a dotted-quad IPv4 literal anywhere.
pub fn is_ipv4_literal(host: &str) -> bool {
    IPV4_LITERAL.is_match(host)
}

fn reject(input: &str, err: DomsegError) -> DomsegError {
    debug!(input, reason = %err, "rejected domain");
    err
}
