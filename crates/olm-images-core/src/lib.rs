//! Core types and configuration for olm-images.
//!
//! This crate defines the image table ([`ImageTable`]) with its optional
//! `containers.toml` overrides, the Go version reader ([`read_go_version`]),
//! and shared error types.

pub mod config;
pub mod error;
pub mod version;

pub use config::{DEFAULT_CONFIG_FILE, ImageConfig, ImageTable, ImageType};
pub use error::{Error, Result};
pub use version::{DEFAULT_VERSION_FILE, read_go_version};
