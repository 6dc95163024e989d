//! Upload payloads and responses.

use serde::{Deserialize, Serialize};

/// An image selected by the caller, validated client-side before any
/// request is sent.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Successful upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    #[serde(alias = "avatar_url", alias = "url")]
    pub image_url: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
}
