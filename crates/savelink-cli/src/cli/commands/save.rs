//! `savelink save <locator>`: run the download trigger against the native host.

use anyhow::{Context, Result};
use savelink_core::config::SaveConfig;
use savelink_core::native::{SaveToDirectory, SavedFile};
use savelink_core::trigger;
use std::path::Path;

#[derive(Debug)]
pub struct SaveArgs<'a> {
    pub locator: &'a str,
    pub name: Option<&'a str>,
    pub dir: &'a Path,
    /// Forces overwrite on; never turns a configured overwrite off.
    pub overwrite: bool,
}

/// Saves and returns what was written. A missing name is passed to the
/// trigger as an empty suggestion, leaving the choice to the host.
pub fn save(cfg: &SaveConfig, args: &SaveArgs<'_>) -> Result<Vec<SavedFile>> {
    let host = SaveToDirectory::from_config(args.dir, cfg)
        .with_overwrite(cfg.overwrite || args.overwrite)
        .into_host();
    trigger(&host, args.name.unwrap_or(""), args.locator)
        .with_context(|| format!("failed to save {}", args.locator))?;
    Ok(host.activation().saved())
}

pub fn run_save(cfg: &SaveConfig, args: &SaveArgs<'_>) -> Result<()> {
    for saved in save(cfg, args)? {
        println!(
            "{}  {} ({} bytes)",
            saved.sha256,
            saved.path.display(),
            saved.bytes
        );
    }
    Ok(())
}
