mod docs;
/// Health check
pub mod health;
/// Upload ticket issuance
pub mod upload;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};
use common_types::UPLOAD_ROUTE;

/// Creates the router with all handler routes
///
/// Docs, health and the upload ticket route; dependencies are attached as
/// `Extension`s by `server::app`.
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route(UPLOAD_ROUTE, post(upload::create_upload_url))
}
