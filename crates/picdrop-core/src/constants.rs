//! Shared constants.

/// Media type prefix every uploadable file must carry.
pub const IMAGE_MEDIA_TYPE_PREFIX: &str = "image/";

/// Default backend base URL (issuer and metadata-writer live behind it).
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Default path of the presigned URL issuer.
pub const DEFAULT_UPLOAD_URL_PATH: &str = "/api/upload-url";

/// Default path of the image metadata writer.
pub const DEFAULT_IMAGES_PATH: &str = "/api/images";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Header carrying the optional backend API key.
pub const API_KEY_HEADER: &str = "X-API-Key";
