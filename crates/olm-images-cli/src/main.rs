mod commands;

use clap::{Parser, ValueEnum};
use olm_images_core::{DEFAULT_VERSION_FILE, ImageType};
use olm_images_podman::DEFAULT_TOOL;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "olm-images",
    about = "Build the debug and production container images with podman"
)]
#[command(version)]
struct Cli {
    /// Image to build
    #[arg(value_enum, default_value = "all")]
    image: ImageSelection,

    /// File holding the Go version passed as the GO_VERSION build arg
    #[arg(long, default_value = DEFAULT_VERSION_FILE)]
    go_version_file: PathBuf,

    /// Image table overrides; must exist when given (otherwise containers.toml is read if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container build CLI to invoke
    #[arg(long, default_value = DEFAULT_TOOL)]
    tool: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum ImageSelection {
    /// Debug image only
    Debug,
    /// Production image only
    Production,
    /// Debug, then production
    All,
}

impl ImageSelection {
    fn image_type(self) -> Option<ImageType> {
        match self {
            Self::Debug => Some(ImageType::Debug),
            Self::Production => Some(ImageType::Production),
            Self::All => None,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match commands::build(
        cli.image.image_type(),
        &cli.go_version_file,
        cli.config.as_deref(),
        &cli.tool,
    )
    .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            commands::exit_code(&e)
        }
    }
}
