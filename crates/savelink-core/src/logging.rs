//! Tracing setup for the `savelink` binary.
//!
//! Events go to `~/.local/state/savelink/savelink.log`; if that file cannot be
//! opened they go to stderr instead, and the caller is told which one won.

use anyhow::{Context, Result};
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,savelink=debug,savelink_core=debug";
const LOG_FILE: &str = "savelink.log";

/// Where log events ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::File(path) => write!(f, "{}", path.display()),
            LogSink::Stderr => f.write_str("stderr"),
        }
    }
}

/// Install the global subscriber. Never fails: an unusable state dir
/// downgrades to stderr. Filter comes from `RUST_LOG` when set.
pub fn init() -> LogSink {
    let opened = xdg::BaseDirectories::with_prefix("savelink")
        .context("locate XDG state dir")
        .and_then(|dirs| open_log_file(&dirs.get_state_home()));

    match opened {
        Ok((path, file)) => {
            install(Mutex::new(file));
            tracing::info!("savelink logging to {}", path.display());
            LogSink::File(path)
        }
        Err(err) => {
            install(io::stderr);
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
            LogSink::Stderr
        }
    }
}

/// Opens (creating `dir` if needed) the log file in append mode.
pub fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((path, file))
}

fn install<W>(writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be set (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
}
