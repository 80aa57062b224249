//! Host string helpers.

use url::Url;

use crate::error::DomsegError;

/// Remove a trailing `:port` suffix, if present.
///
/// Only an all-digit suffix counts as a port; anything else is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use domseg::host::strip_port;
///
/// assert_eq!(strip_port("example.com:8443"), "example.com");
/// assert_eq!(strip_port("example.com"), "example.com");
/// ```
pub fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Extract the host from a full URL.
///
/// The host is returned as written (lowercased by the URL parser). IDNA
/// hosts come back ASCII encoded by the `url` crate, so they are decoded to
/// Unicode again here; the domain parser expects human-readable input.
///
/// # Examples
///
/// ```
/// use domseg::host::host_from_url;
///
/// assert_eq!(host_from_url("https://Mail.Example.com:8080/inbox").unwrap(), "mail.example.com");
/// ```
pub fn host_from_url(url: &str) -> Result<String, DomsegError> {
    let parsed = Url::parse(url)?;
    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(DomsegError::UrlParseError("URL has no host".to_string())),
    };

    let (unicode, result) = idna::domain_to_unicode(host);
    result?;
    Ok(unicode)
}

/// Whether the input looks like a URL rather than a bare domain.
pub fn looks_like_url(input: &str) -> bool {
    input.contains("://")
}
