use olm_images_core::{DEFAULT_CONFIG_FILE, ImageTable, ImageType, read_go_version};
use olm_images_podman::{BuildError, PodmanClient};
use std::path::Path;
use std::process::ExitCode;

/// Build the selected images in table order, stopping at the first failure.
///
/// `image` of `None` builds every image in the table. An explicit
/// `config_path` must exist; without one, `containers.toml` is used if present.
pub async fn build(
    image: Option<ImageType>,
    go_version_file: &Path,
    config_path: Option<&Path>,
    tool: &str,
) -> anyhow::Result<()> {
    let go_version = read_go_version(go_version_file)?;
    println!("Building images with Go version: {go_version}");

    let table = match config_path {
        Some(path) => ImageTable::load_required(path)?,
        None => ImageTable::load(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    let client = PodmanClient::new().with_tool(tool);
    tracing::debug!(?image, tool, "image table ready");

    for config in table
        .iter()
        .filter(|c| image.is_none_or(|selected| selected == c.image_type))
    {
        let command = client.prepare_build(config, &go_version)?;

        println!("Building {} image...", config.image_type);
        client.build(config.image_type, &command).await?;
        println!("Successfully built {} image", config.image_type);
    }

    Ok(())
}

/// Map a failed run to the process exit code.
///
/// Build failures pass the tool's exit code through; every other error is 1.
/// Codes outside 1..=255 are clamped into that range.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    let code = err
        .downcast_ref::<BuildError>()
        .map_or(1, BuildError::exit_code);
    ExitCode::from(code.clamp(1, 255) as u8)
}
