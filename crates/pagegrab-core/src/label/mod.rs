//! Domain-label derivation.
//!
//! Turns a URL into the filename stem its page is saved under: the authority
//! (host, plus `:port` when present) with any leading `www.` removed, cut
//! before the first remaining dot, sanitized for Linux filesystems.

mod sanitize;

use anyhow::{bail, Result};

pub use sanitize::sanitize_label;

/// Derives the domain label used as the output file's base name.
///
/// Fails if the URL does not parse or has no host; the caller logs and skips
/// that URL. Two URLs sharing a label overwrite each other's output with no
/// defined winner.
///
/// # Examples
///
/// - `https://www.example.com/page` → `example`
/// - `http://localhost/` → `localhost` (no dot: the full authority)
/// - `http://127.0.0.1:8080/` → `127` (cut at the first dot, port and all)
pub fn derive_label(url_str: &str) -> Result<String> {
    let parsed = url::Url::parse(url_str)?;
    let authority = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => bail!("no host in URL: {}", url_str),
    };

    let mut domain = authority.strip_prefix("www.").unwrap_or(&authority);
    if domain.is_empty() {
        bail!("no host in URL: {}", url_str);
    }
    if let Some(dot) = domain.find('.') {
        domain = &domain[..dot];
    }

    let label = sanitize_label(domain);
    if label.is_empty() {
        bail!("no usable domain label in URL: {}", url_str);
    }
    Ok(label)
}
