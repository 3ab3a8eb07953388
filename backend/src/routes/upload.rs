use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Json};
use common_types::{UploadUrlRequest, UploadUrlResponse};
use tracing::instrument;

use crate::{
    types::{AppError, JsonBody},
    upload_storage::{resolve_object_name, UploadSigner},
};

/// Upper bound on a single issuance, including credential resolution
pub const ISSUANCE_TIMEOUT: Duration = Duration::from_secs(5);

/// Issues a presigned URL for uploading a single PDF
///
/// 1. Uses the requested `fileName` verbatim, or generates `upload-<uuid>.pdf`
/// 2. Presigns a PUT of `application/pdf` content to that key, valid for 5 minutes
///
/// Caller identity is not checked.
///
/// # Errors
///
/// Every failure (unreadable body, missing configuration, signing error,
/// issuance taking longer than `ISSUANCE_TIMEOUT`)
/// answers 500 with `{ "error": "Failed to generate upload URL" }`. The cause
/// is logged and never returned.
#[instrument(skip_all)]
pub async fn create_upload_url(
    Extension(signer): Extension<Arc<dyn UploadSigner>>,
    JsonBody(payload): JsonBody<UploadUrlRequest>,
) -> Result<Json<UploadUrlResponse>, AppError> {
    let file_name = resolve_object_name(payload.file_name.as_deref());

    let presigned_url = tokio::time::timeout(ISSUANCE_TIMEOUT, signer.presign_pdf_put(&file_name))
        .await
        .map_err(|_| {
            tracing::error!(
                "Generating upload URL for {file_name} timed out after {ISSUANCE_TIMEOUT:?}"
            );
            AppError::upload_url_failed("timeout")
        })??;

    tracing::info!(
        file_name = %file_name,
        expires_at = %presigned_url.expires_at,
        "Issued upload URL"
    );

    Ok(Json(UploadUrlResponse {
        url: presigned_url.url,
        file_name,
    }))
}
