use axum::{body::Body, http::Request, response::Response, Router};
use backend::{server, types::Environment, upload_storage::UploadSigner};
use std::sync::Arc;
use tower::ServiceExt;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router wired to the given signer, driven in-process with `oneshot`
pub struct TestSetup {
    pub router: Router,
    pub environment: Environment,
}

impl TestSetup {
    pub fn new(signer: Arc<dyn UploadSigner>) -> Self {
        Self::with_environment(Environment::Development, signer)
    }

    pub fn with_environment(environment: Environment, signer: Arc<dyn UploadSigner>) -> Self {
        setup_test_env();

        Self {
            router: server::app(environment, signer),
            environment,
        }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_raw_post_request(route, Some("application/json"), payload.to_string())
            .await
    }

    pub async fn send_raw_post_request(
        &self,
        route: &str,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let mut builder = Request::builder().uri(route).method("POST");
        if let Some(content_type) = content_type {
            builder = builder.header("Content-Type", content_type);
        }
        let request = builder.body(body.into())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}
