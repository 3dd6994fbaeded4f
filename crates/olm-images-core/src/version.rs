use std::path::Path;

/// Version file consulted when no other path is given.
pub const DEFAULT_VERSION_FILE: &str = ".go-version";

/// Read the Go version from `path`, trimmed of surrounding whitespace.
///
/// Fails with [`Error::VersionRead`](crate::Error::VersionRead) when the file
/// cannot be read and [`Error::EmptyVersion`](crate::Error::EmptyVersion) when
/// it holds only whitespace.
pub fn read_go_version(path: &Path) -> crate::Result<String> {
    tracing::debug!(path = %path.display(), "reading Go version");

    let content = std::fs::read_to_string(path).map_err(|e| crate::Error::VersionRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let version = content.trim();
    if version.is_empty() {
        return Err(crate::Error::EmptyVersion {
            path: path.to_path_buf(),
        });
    }

    Ok(version.to_owned())
}
