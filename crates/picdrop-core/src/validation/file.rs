//! Pre-flight checks on the selected file. Nothing here touches the network.

use crate::error::UploadError;
use crate::models::SelectedFile;

/// Ensure a file is selected and declares an `image/*` media type.
pub fn validate_selected_file(file: Option<&SelectedFile>) -> Result<&SelectedFile, UploadError> {
    let file = file.ok_or_else(UploadError::no_file_selected)?;
    if !file.is_image() {
        return Err(UploadError::not_an_image());
    }
    Ok(file)
}
