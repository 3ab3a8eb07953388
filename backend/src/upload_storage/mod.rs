//! Presigned upload URL issuance

mod client;
mod error;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use client::S3UploadSigner;
pub use error::{BucketError, BucketResult};

/// Presigned URL with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL for PUT operations
    pub url: String,
    /// UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Mints presigned PUT URLs for PDF objects.
///
/// Implementations hold their own credentials and bucket configuration; the
/// route handler only sees `Arc<dyn UploadSigner>`.
#[async_trait]
pub trait UploadSigner: Send + Sync {
    /// Presigns a single PUT of `application/pdf` content to `key`
    ///
    /// No object is created; only the signed URL is produced.
    ///
    /// # Errors
    ///
    /// Returns `BucketError` when the signer is misconfigured or signing fails
    async fn presign_pdf_put(&self, key: &str) -> BucketResult<PresignedUrl>;
}

/// Resolves the object key for a ticket request.
///
/// A non-empty requested name is used verbatim. Otherwise a random
/// `upload-<uuid>.pdf` name is generated.
#[must_use]
pub fn resolve_object_name(requested: Option<&str>) -> String {
    match requested {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("upload-{}.pdf", Uuid::new_v4()),
    }
}
