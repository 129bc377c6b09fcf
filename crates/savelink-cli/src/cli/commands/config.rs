//! `savelink config`: where the config lives and what is in effect.

use anyhow::Result;
use savelink_core::config::{self, SaveConfig};

pub fn run_config(cfg: &SaveConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
