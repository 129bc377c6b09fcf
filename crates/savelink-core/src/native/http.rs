//! GET for `http:`/`https:` locators via libcurl.

use crate::config::HttpConfig;
use crate::error::HostError;
use std::time::Duration;

/// Fetches `url` into memory. Follows redirects; non-2xx is an error.
/// Runs in the current thread.
pub fn get(url: &str, cfg: &HttpConfig) -> Result<Vec<u8>, HostError> {
    let mut body: Vec<u8> = Vec::new();
    let mut over_limit = false;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if let Some(limit) = cfg.max_bytes {
                if (body.len() + data.len()) as u64 > limit {
                    over_limit = true;
                    // Short count aborts the transfer.
                    return Ok(0);
                }
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };

    if over_limit {
        return Err(HostError::TooLarge {
            limit: cfg.max_bytes.unwrap_or_default(),
        });
    }
    performed?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(HostError::Http(code));
    }
    tracing::debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}
