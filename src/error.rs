//! Error types for domain parsing and resource loading.

use thiserror::Error;

/// Errors that can occur while parsing a domain or loading the word and
/// suffix resources.
///
/// Every variant is terminal: a failed parse never yields a partial
/// [`Domain`](crate::Domain).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomsegError {
    /// The input or its decoded Unicode form exceeds 255 characters.
    #[error("Domain exceeds maximum length of 255 characters")]
    InputTooLong,

    /// The ASCII form of the domain contains characters outside `[.-0-9a-z]`.
    #[error("Domain contains invalid characters")]
    InvalidCharacters,

    /// The domain contains an IPv4 literal.
    #[error("Domain must not contain an IPv4 literal")]
    IpLiteralRejected,

    /// The input already contains an ASCII-compatible encoded (`xn--`) label.
    #[error("Domain is already ACE encoded; supply the Unicode form")]
    PreEncodedIdnRejected,

    /// A label between two separators is empty.
    #[error("Domain contains an empty label")]
    EmptyLabel,

    /// The public suffix data could not be loaded.
    #[error("Public suffix data unavailable: {0}")]
    SuffixDataUnavailable(String),

    /// The dictionary word list could not be loaded.
    #[error("Dictionary data unavailable: {0}")]
    DictionaryDataUnavailable(String),

    /// The IDNA encoder or decoder rejected the domain.
    #[error("IDNA conversion failed: {0}")]
    Encoding(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),

    /// The configuration file is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for DomsegError {
    fn from(err: url::ParseError) -> Self {
        DomsegError::UrlParseError(err.to_string())
    }
}

impl From<idna::Errors> for DomsegError {
    fn from(err: idna::Errors) -> Self {
        DomsegError::Encoding(err.to_string())
    }
}
