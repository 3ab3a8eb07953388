//! Error types for upload URL issuance

use thiserror::Error;

/// Result type for bucket operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Errors that can occur while minting an upload URL
#[derive(Error, Debug)]
pub enum BucketError {
    /// S3 rejected or failed to sign the request
    #[error("S3 service error: {0}")]
    S3Error(String),

    /// Signer configuration is missing or invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// AWS SDK error outside the service itself (credentials, dispatch)
    #[error("AWS SDK error: {0}")]
    AwsError(String),
}

