//! savelink: hand a resource URL to the host's native "save file" flow.
//!
//! The [`trigger`] function is host-agnostic; hosts implement [`Host`] and
//! [`Anchor`]. Three hosts ship with the crate: an in-memory [`document`], a
//! native host that writes into a download directory, and (on wasm32) the
//! browser DOM.

pub mod document;
pub mod error;
pub mod host;
pub mod trigger;

#[cfg(not(target_arch = "wasm32"))]
pub mod checksum;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::HostError;
pub use host::{Anchor, Host};
pub use trigger::trigger;
