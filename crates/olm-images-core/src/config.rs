use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Table file consulted when no other path is given.
pub const DEFAULT_CONFIG_FILE: &str = "containers.toml";

/// Containerfile used when an image does not name one.
pub const DEFAULT_CONTAINERFILE: &str = "Containerfile";

/// One of the two image variants this project builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    Debug,
    Production,
}

impl ImageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build parameters for a single image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub image_type: ImageType,
    /// Tag passed to `-t`
    pub tag: String,
    /// Build stage passed to `--target`; omitted from the command when `None`
    pub target: Option<String>,
    /// Containerfile passed to `-f`, relative to the working directory
    pub containerfile: PathBuf,
}

impl ImageConfig {
    pub fn new(image_type: ImageType, tag: impl Into<String>) -> Self {
        Self {
            image_type,
            tag: tag.into(),
            target: None,
            containerfile: PathBuf::from(DEFAULT_CONTAINERFILE),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_containerfile(mut self, containerfile: impl Into<PathBuf>) -> Self {
        self.containerfile = containerfile.into();
        self
    }

    fn apply(mut self, overrides: ImageOverride) -> Self {
        if let Some(tag) = overrides.tag {
            self.tag = tag;
        }
        if let Some(target) = overrides.target {
            self.target = Some(target);
        }
        if let Some(containerfile) = overrides.containerfile {
            self.containerfile = containerfile;
        }
        self
    }
}

/// The images to build, in build order: debug first, then production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTable {
    debug: ImageConfig,
    production: ImageConfig,
}

impl Default for ImageTable {
    fn default() -> Self {
        Self {
            debug: ImageConfig::new(ImageType::Debug, "local/bootstrap-olm:debug")
                .with_target("debug"),
            production: ImageConfig::new(ImageType::Production, "local/bootstrap-olm:prod"),
        }
    }
}

/// containers.toml
#[derive(Debug, Default, Deserialize)]
struct ContainersToml {
    #[serde(default)]
    debug: ImageOverride,
    #[serde(default)]
    production: ImageOverride,
}

#[derive(Debug, Default, Deserialize)]
struct ImageOverride {
    tag: Option<String>,
    target: Option<String>,
    containerfile: Option<PathBuf>,
}

impl ImageTable {
    /// Load from the given containers.toml, or return the built-in table if not found.
    ///
    /// Fields present in the file replace the built-in value for that image;
    /// everything else keeps its default.
    pub fn load(config_path: &Path) -> crate::Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no image config, using built-in table");
            return Ok(Self::default());
        }
        Self::load_required(config_path)
    }

    /// Load from a containers.toml that must exist.
    ///
    /// A missing file is [`Error::ConfigLoad`](crate::Error::ConfigLoad).
    pub fn load_required(config_path: &Path) -> crate::Result<Self> {
        let content =
            std::fs::read_to_string(config_path).map_err(|e| crate::Error::ConfigLoad {
                path: config_path.to_path_buf(),
                source: e,
            })?;
        let parsed: ContainersToml =
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(path = %config_path.display(), "loaded image config");

        let defaults = Self::default();
        Ok(Self {
            debug: defaults.debug.apply(parsed.debug),
            production: defaults.production.apply(parsed.production),
        })
    }

    pub fn get(&self, image_type: ImageType) -> &ImageConfig {
        match image_type {
            ImageType::Debug => &self.debug,
            ImageType::Production => &self.production,
        }
    }

    /// Iterate in build order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageConfig> {
        [&self.debug, &self.production].into_iter()
    }
}
