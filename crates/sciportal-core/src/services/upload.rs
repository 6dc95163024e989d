//! Image upload with client-side validation.
//!
//! Type and size are checked before anything is sent; a rejected file
//! never reaches the network.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::auth::Session;
use crate::models::{ImageFile, UploadedImage};

/// Upload cap for general images.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Upload cap for avatars.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct UploadService {
    api: ApiClient,
}

impl UploadService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST /api/common/upload/image`, multipart field `image`.
    pub async fn upload_image(
        &self,
        session: &Session,
        file: ImageFile,
    ) -> ApiResult<UploadedImage> {
        Self::validate(&file, MAX_IMAGE_BYTES, "file size must not exceed 5MB")?;
        self.send("/api/common/upload/image", "image", session, file)
            .await
    }

    /// `POST /api/common/upload/avatar`, multipart field `avatar`, with the
    /// tighter 2 MiB cap.
    pub async fn upload_avatar(
        &self,
        session: &Session,
        file: ImageFile,
    ) -> ApiResult<UploadedImage> {
        Self::validate(&file, MAX_AVATAR_BYTES, "avatar size must not exceed 2MB")?;
        self.send("/api/common/upload/avatar", "avatar", session, file)
            .await
    }

    /// `POST /api/common/delete/image`.
    pub async fn delete_image(&self, session: &Session, image_url: &str) -> ApiResult<()> {
        if image_url.trim().is_empty() {
            return Err(ApiError::validation("image URL must not be empty"));
        }
        let request = self
            .api
            .authed(Method::POST, "/api/common/delete/image", session)
            .json(&serde_json::json!({ "image_url": image_url }));
        self.api.execute_empty(request).await
    }

    fn validate(file: &ImageFile, max_bytes: usize, size_message: &str) -> ApiResult<()> {
        if file.bytes.is_empty() {
            return Err(ApiError::validation("no file selected"));
        }
        if !file.mime_type.starts_with("image/") {
            return Err(ApiError::validation("only image files can be uploaded"));
        }
        if file.bytes.len() > max_bytes {
            return Err(ApiError::validation(size_message));
        }
        Ok(())
    }

    async fn send(
        &self,
        path: &str,
        field: &'static str,
        session: &Session,
        file: ImageFile,
    ) -> ApiResult<UploadedImage> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(field, part);
        let request = self.api.authed(Method::POST, path, session).multipart(form);
        self.api.execute(request).await
    }
}
