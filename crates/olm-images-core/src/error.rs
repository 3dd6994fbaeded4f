use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Go version ──
    #[error("failed to read Go version from {path}")]
    VersionRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Go version file {path} is empty")]
    EmptyVersion { path: PathBuf },
}
