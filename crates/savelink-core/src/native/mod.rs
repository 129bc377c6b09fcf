//! Native host: clicking a download link saves the resource into a directory.
//!
//! The document side is the in-memory [`Document`]; the activation resolves
//! the link's `href` (`data:`, `file:`, `http(s):`) and writes the bytes into
//! the download directory under a sanitized, collision-free name. Like a
//! browser, the host (not the trigger) owns filename policy.

mod data_url;
mod filename;
mod http;
mod locator;

pub use data_url::{decode as decode_data_url, DataUrl};
pub use filename::{choose_filename, filename_from_locator, sanitize_filename};
pub use locator::fetch;

use crate::checksum;
use crate::config::{HttpConfig, SaveConfig, DEFAULT_FILENAME};
use crate::document::{Activation, ClickEvent, Document, DocumentHost};
use crate::error::HostError;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A native host: an in-memory document whose link clicks save to disk.
pub type DirectoryHost = DocumentHost<SaveToDirectory>;

/// One completed save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the content.
    pub sha256: String,
}

/// Link activation that writes the linked resource into `dir`.
#[derive(Debug)]
pub struct SaveToDirectory {
    dir: PathBuf,
    default_filename: String,
    overwrite: bool,
    http: HttpConfig,
    saved: RefCell<Vec<SavedFile>>,
}

impl SaveToDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            default_filename: DEFAULT_FILENAME.to_string(),
            overwrite: false,
            http: HttpConfig::default(),
            saved: RefCell::new(Vec::new()),
        }
    }

    /// Takes filename, overwrite and transfer settings from `cfg`; `dir` wins
    /// over `cfg.download_dir`.
    pub fn from_config(dir: impl Into<PathBuf>, cfg: &SaveConfig) -> Self {
        Self {
            default_filename: cfg.default_filename.clone(),
            overwrite: cfg.overwrite,
            http: cfg.http.clone(),
            ..Self::new(dir)
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Wrap in a fresh document to get a [`crate::Host`].
    pub fn into_host(self) -> DirectoryHost {
        DocumentHost::new(Document::new(), self)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves completed so far, oldest first.
    pub fn saved(&self) -> Vec<SavedFile> {
        self.saved.borrow().clone()
    }

    fn save(&self, suggested: Option<&str>, href: &str) -> Result<SavedFile, HostError> {
        let data = fetch(href, &self.http)?;
        let name = choose_filename(suggested, href, &self.default_filename);
        let path = self.write(&name, &data)?;
        Ok(SavedFile {
            path,
            bytes: data.len() as u64,
            sha256: checksum::sha256_bytes(&data),
        })
    }

    /// Writes to a temp file in `dir`, then renames it into place. Without
    /// `overwrite`, existing names are skipped (`name (1).ext`, ...).
    fn write(&self, name: &str, data: &[u8]) -> Result<PathBuf, HostError> {
        fs::create_dir_all(&self.dir)?;
        let mut tmp = tempfile::Builder::new()
            .prefix(".savelink-")
            .suffix(".part")
            .tempfile_in(&self.dir)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;

        if self.overwrite {
            let path = self.dir.join(name);
            tmp.persist(&path).map_err(|e| e.error)?;
            return Ok(path);
        }

        for (attempt, path) in filename::candidates(&self.dir, name).enumerate() {
            match tmp.persist_noclobber(&path) {
                Ok(_) => {
                    if attempt > 0 {
                        tracing::warn!(
                            requested = name,
                            saved_as = %path.display(),
                            "name taken, saved under a numbered name"
                        );
                    }
                    return Ok(path);
                }
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => tmp = e.file,
                Err(e) => return Err(e.error.into()),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "no free name for {name:?} in {} after {} attempts",
                self.dir.display(),
                filename::MAX_NUMBERED
            ),
        )
        .into())
    }
}

impl Activation for SaveToDirectory {
    fn on_click(&self, event: &ClickEvent) -> Result<(), HostError> {
        let Some(href) = event.href.as_deref() else {
            tracing::debug!("link without href clicked; nothing to save");
            return Ok(());
        };
        let saved = self.save(event.download.as_deref(), href)?;
        tracing::info!(
            path = %saved.path.display(),
            bytes = saved.bytes,
            sha256 = %saved.sha256,
            "saved download"
        );
        self.saved.borrow_mut().push(saved);
        Ok(())
    }
}
