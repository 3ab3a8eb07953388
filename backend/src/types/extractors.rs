//! Custom extractors for request parsing

use aide::operation::OperationInput;
use aide::OperationOutput;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::types::error::AppError;

/// JSON body extractor that ignores the `Content-Type` header.
///
/// Any failure to read or decode the body is rejected with the generic
/// issuance error instead of axum's 4xx rejections.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let payload = serde_json::from_slice(&bytes)?;
        Ok(Self(payload))
    }
}

impl<T> OperationInput for JsonBody<T>
where
    T: JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        // Delegate to Json<T>'s implementation since JsonBody has the same structure
        Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AppError::inferred_responses(ctx, operation)
    }
}
