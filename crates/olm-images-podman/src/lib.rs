pub mod client;
pub mod command;
pub mod executor;
pub mod podman;

pub use client::{BuildError, PodmanClient};
pub use command::{BuildCommand, DEFAULT_TOOL};
pub use executor::{BuildExecutor, RealExecutor};
pub use podman::PodmanError;
