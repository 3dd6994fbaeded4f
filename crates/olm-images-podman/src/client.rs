use crate::command::{BuildCommand, DEFAULT_TOOL};
use crate::executor::{BuildExecutor, RealExecutor};
use crate::podman::PodmanError;
use olm_images_core::{ImageConfig, ImageType};
use std::path::PathBuf;

/// Image build client, parameterized over the executor for testability.
pub struct PodmanClient<E: BuildExecutor = RealExecutor> {
    executor: E,
    tool: String,
}

impl PodmanClient<RealExecutor> {
    pub fn new() -> Self {
        Self::with_executor(RealExecutor)
    }
}

impl Default for PodmanClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BuildExecutor> PodmanClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self {
            executor,
            tool: DEFAULT_TOOL.to_owned(),
        }
    }

    /// Use a different container CLI (e.g. `docker`) in place of podman.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    // ── Build ──

    /// Check the image's Containerfile and assemble its build command.
    ///
    /// The Containerfile is looked up relative to the working directory at the
    /// moment of the call, so each image is checked right before it is built.
    pub fn prepare_build(
        &self,
        config: &ImageConfig,
        go_version: &str,
    ) -> Result<BuildCommand, BuildError> {
        if !config.containerfile.exists() {
            return Err(BuildError::MissingContainerfile {
                image_type: config.image_type,
                path: config.containerfile.clone(),
            });
        }

        Ok(BuildCommand::new(config, go_version)?.with_program(&self.tool))
    }

    /// Run a prepared build command to completion.
    pub async fn build(
        &self,
        image_type: ImageType,
        command: &BuildCommand,
    ) -> Result<(), BuildError> {
        tracing::debug!(%image_type, command = %command, "building image");

        self.executor
            .exec_streaming(command)
            .await
            .map_err(|e| BuildError::Command {
                image_type,
                source: e,
            })
    }
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Containerfile not found at {}", path.display())]
    MissingContainerfile { image_type: ImageType, path: PathBuf },

    #[error("Containerfile path for {image_type} image is not valid UTF-8: {}", path.display())]
    InvalidPath { image_type: ImageType, path: PathBuf },

    #[error("failed to build {image_type} image")]
    Command {
        image_type: ImageType,
        source: PodmanError,
    },
}

impl BuildError {
    /// Process exit code to report for this failure.
    ///
    /// A failed build passes the tool's own exit code through; everything else is 1,
    /// including a build killed by a signal (no 128+n shell convention).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Command {
                source: PodmanError::CommandFailed {
                    code: Some(code), ..
                },
                ..
            } => *code,
            _ => 1,
        }
    }
}
