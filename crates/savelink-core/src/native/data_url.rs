//! `data:` URL decoding (RFC 2397).

use crate::error::HostError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::percent_decode_str;

const DEFAULT_MEDIA_TYPE: &str = "text/plain;charset=US-ASCII";

/// A decoded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Decodes `data:[<media type>][;base64],<data>[#fragment]`, dropping the fragment.
pub fn decode(locator: &str) -> Result<DataUrl, HostError> {
    let rest = locator
        .get(..5)
        .filter(|scheme| scheme.eq_ignore_ascii_case("data:"))
        .map(|_| &locator[5..])
        .ok_or_else(|| HostError::invalid_locator(locator, "not a data: URL"))?;

    // The fragment is not part of the resource.
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);

    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| HostError::invalid_locator(locator, "missing `,` before payload"))?;

    let (media_type, is_base64) = match meta.rsplit_once(';') {
        Some((head, tail)) if tail.trim().eq_ignore_ascii_case("base64") => (head, true),
        _ => (meta, false),
    };
    let media_type = match media_type.trim() {
        "" => DEFAULT_MEDIA_TYPE.to_string(),
        mt if mt.starts_with(';') => format!("text/plain{mt}"),
        mt => mt.to_string(),
    };

    let raw: Vec<u8> = percent_decode_str(payload).collect();
    let data = if is_base64 {
        let compact: Vec<u8> = raw
            .into_iter()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        STANDARD
            .decode(&compact)
            .map_err(|e| HostError::invalid_locator(locator, format!("bad base64 payload: {e}")))?
    } else {
        raw
    };

    Ok(DataUrl { media_type, data })
}
