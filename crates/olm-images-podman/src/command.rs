use std::fmt;

use crate::client::BuildError;
use olm_images_core::ImageConfig;

/// Container build CLI invoked when no other tool is given.
pub const DEFAULT_TOOL: &str = "podman";

/// A `<tool> build` invocation for one image.
///
/// The command is executed from its argument vector, never through a shell.
/// [`render`](Self::render) produces the single-line form used in progress
/// output and diagnostics; it performs no quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl BuildCommand {
    /// `podman build --build-arg GO_VERSION=<v> [--target <t>] -t <tag> -f <file> .`
    ///
    /// Fails with [`BuildError::InvalidPath`] when the Containerfile path is not UTF-8.
    pub fn new(config: &ImageConfig, go_version: &str) -> Result<Self, BuildError> {
        let containerfile = config
            .containerfile
            .to_str()
            .ok_or_else(|| BuildError::InvalidPath {
                image_type: config.image_type,
                path: config.containerfile.clone(),
            })?;

        let mut args = strings(["build", "--build-arg", &format!("GO_VERSION={go_version}")]);
        if let Some(target) = &config.target {
            args.extend(strings(["--target", target]));
        }
        args.extend(strings(["-t", &config.tag, "-f"]));
        args.extend(strings([containerfile, "."]));

        Ok(Self {
            program: DEFAULT_TOOL.to_owned(),
            args,
        })
    }

    /// Run a different container CLI with the same arguments.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn render(&self) -> String {
        let mut rendered = self.program.clone();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn strings<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
