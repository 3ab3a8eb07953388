//! S3-backed upload signer

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{
    error::{DisplayErrorContext, SdkError},
    presigning::PresigningConfig,
    Client as S3Client,
};
use chrono::{DateTime, Utc};
use common_types::PDF_CONTENT_TYPE;
use tracing::debug;

use super::{BucketError, BucketResult, PresignedUrl, UploadSigner};

/// Presigns PUT requests against a single S3 bucket
pub struct S3UploadSigner {
    s3_client: Arc<S3Client>,
    bucket_name: Option<String>,
    presigned_url_expiry_secs: u64,
}

impl S3UploadSigner {
    /// Creates a new upload signer
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - Target bucket; `None` makes every issuance fail with `ConfigError`
    /// * `presigned_url_expiry_secs` - Lifetime of issued URLs
    #[must_use]
    pub const fn new(
        s3_client: Arc<S3Client>,
        bucket_name: Option<String>,
        presigned_url_expiry_secs: u64,
    ) -> Self {
        Self {
            s3_client,
            bucket_name,
            presigned_url_expiry_secs,
        }
    }
}

#[async_trait]
impl UploadSigner for S3UploadSigner {
    /// Generates a presigned URL for a PDF PUT operation
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ConfigError` if no bucket is configured or the presigning config is invalid
    /// Returns `BucketError::AwsError` if credentials cannot be resolved
    /// Returns `BucketError::S3Error` for any other signing failure
    async fn presign_pdf_put(&self, key: &str) -> BucketResult<PresignedUrl> {
        let bucket_name = self.bucket_name.as_deref().ok_or_else(|| {
            BucketError::ConfigError("S3_BUCKET_NAME environment variable not set".to_string())
        })?;

        debug!("Generating presigned URL for object: {key} in bucket: {bucket_name}");

        let presigned_config =
            PresigningConfig::expires_in(Duration::from_secs(self.presigned_url_expiry_secs))
                .map_err(|e| {
                    BucketError::ConfigError(format!("Failed to create presigning config: {e}"))
                })?;

        let presigned_request = self
            .s3_client
            .put_object()
            .bucket(bucket_name)
            .key(key)
            .content_type(PDF_CONTENT_TYPE)
            .presigned(presigned_config)
            .await
            .map_err(|e| match e {
                SdkError::ConstructionFailure(_) => BucketError::AwsError(format!(
                    "Failed to sign request: {}",
                    DisplayErrorContext(&e)
                )),
                _ => BucketError::S3Error(format!(
                    "Failed to generate presigned URL: {}",
                    DisplayErrorContext(&e)
                )),
            })?;

        let expires_at: DateTime<Utc> =
            Utc::now() + Duration::from_secs(self.presigned_url_expiry_secs);

        debug!("Generated presigned URL for object: {key} expires at: {expires_at}");

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at,
        })
    }
}
