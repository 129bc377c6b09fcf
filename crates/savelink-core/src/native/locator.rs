//! Resolve a resource locator to bytes.

use super::{data_url, http};
use crate::config::HttpConfig;
use crate::error::HostError;
use std::fs;

/// Reads the resource behind `locator`.
///
/// Supports `data:`, `file:` and `http(s):`; `max_bytes` applies to all three. Anything else, notably `blob:`,
/// only exists inside a browser and yields [`HostError::UnsupportedLocator`].
pub fn fetch(locator: &str, http_cfg: &HttpConfig) -> Result<Vec<u8>, HostError> {
    let parsed =
        url::Url::parse(locator).map_err(|e| HostError::invalid_locator(locator, e.to_string()))?;

    let data = match parsed.scheme() {
        "data" => {
            let data = data_url::decode(locator)?.data;
            check_limit(data.len() as u64, http_cfg)?;
            data
        }
        "file" => {
            let path = parsed
                .to_file_path()
                .map_err(|_| HostError::invalid_locator(locator, "not a local file path"))?;
            check_limit(fs::metadata(&path)?.len(), http_cfg)?;
            fs::read(&path)?
        }
        "http" | "https" => http::get(locator, http_cfg)?,
        other => return Err(HostError::UnsupportedLocator(other.to_string())),
    };
    Ok(data)
}

fn check_limit(len: u64, cfg: &HttpConfig) -> Result<(), HostError> {
    match cfg.max_bytes {
        Some(limit) if len > limit => Err(HostError::TooLarge { limit }),
        _ => Ok(()),
    }
}
