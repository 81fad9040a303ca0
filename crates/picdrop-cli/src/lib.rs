use std::path::{Component, Path};

use anyhow::{Context, Result};
use picdrop_core::SelectedFile;

/// Media type for a path, guessed from its extension.
pub fn guess_media_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Read a local file into a [`SelectedFile`].
///
/// `content_type` overrides the extension-based guess.
pub fn load_selected_file(path: &Path, content_type: Option<&str>) -> Result<SelectedFile> {
    if path.components().any(|c| c == Component::ParentDir) {
        return Err(anyhow::anyhow!("Invalid input: {}", path.display()));
    }

    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("File name is not valid UTF-8")?;

    let media_type = content_type
        .map(str::to_string)
        .unwrap_or_else(|| guess_media_type(path));

    Ok(SelectedFile::new(name, media_type, data))
}

/// Initialize tracing for the CLI. Logs go to stderr so stdout stays machine-readable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn guesses_image_types() {
        assert_eq!(guess_media_type(Path::new("cat.png")), "image/png");
        assert_eq!(guess_media_type(Path::new("dir/photo.JPG")), "image/jpeg");
        assert_eq!(
            guess_media_type(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn loads_file_with_guessed_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0u8; 2048])
            .unwrap();

        let file = load_selected_file(&path, None).unwrap();
        assert_eq!(file.name, "cat.png");
        assert_eq!(file.media_type, "image/png");
        assert_eq!(file.size, 2048);
    }

    #[test]
    fn explicit_content_type_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.bin");
        std::fs::write(&path, b"GIF89a").unwrap();

        let file = load_selected_file(&path, Some("image/gif")).unwrap();
        assert_eq!(file.media_type, "image/gif");
    }

    #[test]
    fn parent_dir_components_rejected() {
        let err = load_selected_file(Path::new("../secret.png"), None).unwrap_err();
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        let err = load_selected_file(&path, None).unwrap_err();
        assert!(err.to_string().contains("missing.png"));
    }
}
