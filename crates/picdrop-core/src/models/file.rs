use bytes::Bytes;

/// A file chosen by the user, held in memory until the upload starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Display name (used as the `filename` sent to the issuer)
    pub name: String,
    /// Declared media type (e.g. `image/png`)
    pub media_type: String,
    /// Byte size of `data`
    pub size: u64,
    /// Raw file payload
    pub data: Bytes,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size: data.len() as u64,
            data,
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type
            .starts_with(crate::constants::IMAGE_MEDIA_TYPE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_follows_payload() {
        let file = SelectedFile::new("cat.png", "image/png", vec![0u8; 2048]);
        assert_eq!(file.size, 2048);
        assert!(file.is_image());
    }

    #[test]
    fn non_image_media_type() {
        let file = SelectedFile::new("notes.txt", "text/plain", "hello");
        assert!(!file.is_image());
        assert!(!SelectedFile::new("x", "IMAGE/png", "x").is_image());
    }
}
