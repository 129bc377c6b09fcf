//! Host-side filename policy: sanitize the suggested name, derive one from the
//! locator when nothing usable was suggested, and pick a free name on disk.

use std::path::{Path, PathBuf};

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Highest `(n)` tried before giving up on a name.
pub const MAX_NUMBERED: u32 = 9999;

fn is_edge_junk(c: char) -> bool {
    c.is_whitespace() || c == '.'
}

/// Sanitizes a candidate filename for safe use on Linux.
///
/// - Replaces NUL, `/`, `\` and control characters with `_`
/// - Collapses runs of replaced characters into one `_`
/// - Trims leading/trailing whitespace and dots
/// - Limits length to 255 bytes
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut replaced = false;

    for c in name.chars() {
        if c == '/' || c == '\\' || c.is_control() {
            if !replaced {
                out.push('_');
            }
            replaced = true;
        } else {
            out.push(c);
            replaced = false;
        }
    }

    let trimmed = out.trim_matches(is_edge_junk);
    truncate_to_boundary(trimmed, NAME_MAX)
        .trim_end_matches(is_edge_junk)
        .to_string()
}

fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}

/// Last path segment of a hierarchical locator (`file:`, `http:`), percent-decoded.
///
/// Returns `None` for opaque locators like `data:` and for empty/root paths.
pub fn filename_from_locator(locator: &str) -> Option<String> {
    let parsed = url::Url::parse(locator).ok()?;
    if parsed.cannot_be_a_base() {
        return None;
    }
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let decoded = percent_encoding::percent_decode_str(segment)
        .decode_utf8_lossy()
        .into_owned();
    Some(decoded)
}

/// Chooses the on-disk name for a save.
///
/// Prefers the suggested name; falls back to the locator's last path segment,
/// then to `default_name`. Each candidate is sanitized; candidates that
/// sanitize to nothing are skipped.
pub fn choose_filename(suggested: Option<&str>, locator: &str, default_name: &str) -> String {
    suggested
        .map(sanitize_filename)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            filename_from_locator(locator)
                .map(|s| sanitize_filename(&s))
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| default_name.to_string())
}

/// Candidate paths for `name` in `dir`: `name`, then `stem (1).ext` up to
/// `stem (MAX_NUMBERED).ext`. The stem is shortened so every candidate stays
/// within NAME_MAX.
pub fn candidates<'a>(dir: &'a Path, name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    std::iter::once(dir.join(name))
        .chain((1..=MAX_NUMBERED).map(move |n| dir.join(numbered_name(name, n))))
}

fn numbered_name(name: &str, n: u32) -> String {
    let (stem, ext) = split_extension(name);
    let (stem, tail) = match ext {
        Some(ext) if ext.len() + 8 < NAME_MAX => (stem, format!(" ({n}).{ext}")),
        // Extension alone would not fit; number the whole name instead.
        _ => (name, format!(" ({n})")),
    };
    let stem = truncate_to_boundary(stem, NAME_MAX - tail.len()).trim_end();
    format!("{stem}{tail}")
}

/// Splits at the last dot, keeping `.tar.gz`-style double extensions whole
/// and leaving dotfiles (`.bashrc`) without an extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    if let Some(stem) = name.strip_suffix(".tar.gz") {
        if !stem.is_empty() {
            return (stem, Some("tar.gz"));
        }
    }
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}
