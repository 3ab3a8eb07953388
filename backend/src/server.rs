use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{Extension, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::{types::Environment, upload_storage::UploadSigner};

/// Builds the application router with its dependencies attached
///
/// The signer is injected rather than constructed here so tests can swap in
/// a fake backend.
pub fn app(environment: Environment, signer: Arc<dyn UploadSigner>) -> Router {
    let mut openapi = OpenApi::default();

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(signer))
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(environment: Environment, signer: Arc<dyn UploadSigner>) -> anyhow::Result<()> {
    // The issuance deadline lives in the upload handler
    let router = app(environment, signer).layer(TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from((
        [0, 0, 0, 0],
        std::env::var("PORT").map_or(Ok(8001), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 Talkify upload backend started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating graceful shutdown..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
