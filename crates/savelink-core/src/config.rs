//! Configuration for the native host, loaded from `~/.config/savelink/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name used when neither the suggested filename nor the locator yields one.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Transfer limits (optional `[http]` section). Timeouts apply to `http:`/`https:`;
/// `max_bytes` applies to every locator the native host resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Refuse `data:`, `file:` or `http(s):` resources larger than this many bytes (None = no cap).
    pub max_bytes: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            max_bytes: None,
        }
    }
}

/// Global configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Where saved files land (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Fallback filename.
    #[serde(default = "default_filename")]
    pub default_filename: String,
    /// Replace existing files instead of picking `name (1).ext`.
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            default_filename: default_filename(),
            overwrite: false,
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("savelink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SaveConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SaveConfig> {
    if !path.exists() {
        let default_cfg = SaveConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SaveConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SaveConfig::default();
        assert_eq!(cfg.download_dir, None);
        assert_eq!(cfg.default_filename, "download.bin");
        assert!(!cfg.overwrite);
        assert_eq!(cfg.http.connect_timeout_secs, 15);
        assert_eq!(cfg.http.timeout_secs, 60);
        assert_eq!(cfg.http.max_bytes, None);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SaveConfig {
            download_dir: Some(PathBuf::from("/srv/downloads")),
            overwrite: true,
            ..SaveConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SaveConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: SaveConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, SaveConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            download_dir = "/tmp/dl"
            default_filename = "blob.dat"

            [http]
            timeout_secs = 5
            max_bytes = 1_000_000
        "#;
        let cfg: SaveConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.download_dir.as_deref(), Some(Path::new("/tmp/dl")));
        assert_eq!(cfg.default_filename, "blob.dat");
        assert!(!cfg.overwrite);
        assert_eq!(cfg.http.timeout_secs, 5);
        assert_eq!(cfg.http.connect_timeout_secs, 15);
        assert_eq!(cfg.http.max_bytes, Some(1_000_000));
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, SaveConfig::default());

        fs::write(&path, "overwrite = true\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert!(loaded.overwrite);
    }

    #[test]
    fn load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "overwrite = \"maybe\"\n").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
