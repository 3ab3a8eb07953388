use async_trait::async_trait;
use common_types::PDF_CONTENT_TYPE;
use reqwest::{header, Client};

use crate::error::UploadError;

/// Destination for the direct upload
#[async_trait]
pub trait ObjectUploader: Send + Sync {
    /// PUTs `bytes` as `application/pdf` to a presigned `url`
    ///
    /// # Errors
    ///
    /// Returns `UploadError::StorageRequest` on transport failure and
    /// `UploadError::StorageRejected` on a non-success status
    async fn put_pdf(&self, url: &str, bytes: Vec<u8>) -> Result<(), UploadError>;
}

/// Uploads straight to object storage over HTTP
pub struct HttpObjectUploader {
    http_client: Client,
}

impl HttpObjectUploader {
    /// Creates an uploader sharing the given HTTP client
    #[must_use]
    pub const fn new(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ObjectUploader for HttpObjectUploader {
    async fn put_pdf(&self, url: &str, bytes: Vec<u8>) -> Result<(), UploadError> {
        let response = self
            .http_client
            .put(url)
            .header(header::CONTENT_TYPE, PDF_CONTENT_TYPE)
            .body(bytes)
            .send()
            .await
            .map_err(UploadError::StorageRequest)?;

        if !response.status().is_success() {
            return Err(UploadError::StorageRejected(response.status()));
        }

        Ok(())
    }
}
