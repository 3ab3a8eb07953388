use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use backend::{
    server,
    types::Environment,
    upload_storage::{S3UploadSigner, UploadSigner},
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON logs for staging/production, plain text for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let bucket_name = environment.s3_bucket();
    if bucket_name.is_none() {
        tracing::warn!("S3_BUCKET_NAME is not set, upload URL requests will fail");
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let signer: Arc<dyn UploadSigner> = Arc::new(S3UploadSigner::new(
        s3_client,
        bucket_name,
        environment.presigned_url_expiry_secs(),
    ));

    server::start(environment, signer).await
}
