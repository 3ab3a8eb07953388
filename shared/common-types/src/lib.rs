//! Wire types shared by the upload ticket issuer and its clients

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Route that issues upload tickets
pub const UPLOAD_ROUTE: &str = "/api/upload";

/// The only content type a ticket authorizes
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Lifetime of an issued upload URL, in seconds
pub const UPLOAD_URL_TTL_SECS: u64 = 5 * 60;

/// Message returned to callers whenever ticket issuance fails
pub const UPLOAD_URL_FAILED_MESSAGE: &str = "Failed to generate upload URL";

/// Request body for `POST /api/upload`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    /// Desired object key. A random `.pdf` name is generated when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Successful response for `POST /api/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    /// Presigned URL authorizing a single PUT of `application/pdf` content
    pub url: String,
    /// Object key the URL is scoped to
    pub file_name: String,
}

/// Error envelope returned by the issuer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Fixed, caller-safe error message
    pub error: String,
}
