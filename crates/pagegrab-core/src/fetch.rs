//! HTTP fetch: one blocking GET per unit of work.
//!
//! Uses the curl crate (libcurl) with one `Easy` handle per call. Follows
//! redirects; the body is collected in memory and only handed back once the
//! final status is known, so a failed request never produces an output file.

use std::time::Duration;
use thiserror::Error;

/// Per-request options, derived from the global config.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// User-Agent header sent with the GET.
    pub user_agent: String,
    /// Maximum redirects libcurl will follow.
    pub max_redirects: u32,
    /// Optional connect timeout. There is no overall transfer timeout.
    pub connect_timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: format!("pagegrab/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
            connect_timeout: None,
        }
    }
}

/// Why a single GET failed. Both variants are per-URL: the batch logs them
/// and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl-level failure: DNS, connect, TLS, or a broken transfer.
    #[error("error fetching URL {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The final response status (after redirects) was outside 2xx.
    #[error("unexpected status code for URL {url}: {code}")]
    Status { url: String, code: u32 },
}

/// Performs a GET and returns the raw response body.
///
/// Runs in the current thread and blocks for the duration of the transfer.
pub fn fetch_page(url: &str, options: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.useragent(&options.user_agent).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(options.max_redirects).map_err(transport)?;
    if let Some(timeout) = options.connect_timeout {
        easy.connect_timeout(timeout).map_err(transport)?;
    }

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    Ok(body)
}
