use crate::command::BuildCommand;
use crate::podman::PodmanError;

/// Abstraction over container CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait BuildExecutor: Send + Sync {
    /// Run a build command, streaming its output to the terminal.
    async fn exec_streaming(&self, command: &BuildCommand) -> Result<(), PodmanError>;
}

/// Real container CLI executor.
pub struct RealExecutor;

impl BuildExecutor for RealExecutor {
    async fn exec_streaming(&self, command: &BuildCommand) -> Result<(), PodmanError> {
        use std::process::Stdio;

        tracing::debug!(program = command.program(), args = ?command.args(), "spawning build");

        let status = tokio::process::Command::new(command.program())
            .args(command.args())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| PodmanError::NotFound {
                program: command.program().to_owned(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PodmanError::CommandFailed {
                command: command.render(),
                code: status.code(),
            })
        }
    }
}
