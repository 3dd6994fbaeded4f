mod build;

pub use build::{build, exit_code};
