#[derive(Debug, thiserror::Error)]
pub enum PodmanError {
    #[error("failed to start {program} — is it installed? https://podman.io/docs/installation")]
    NotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("error running command: {command} ({})", describe_code(*code))]
    CommandFailed { command: String, code: Option<i32> },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_owned(),
    }
}
