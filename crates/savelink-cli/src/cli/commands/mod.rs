//! CLI command handlers, one per file.

mod checksum;
mod config;
mod save;

pub use checksum::run_checksum;
pub use config::run_config;
pub use save::{run_save, SaveArgs};
