use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::{config::Region, Client as S3Client};
use backend::upload_storage::{
    BucketError, BucketResult, PresignedUrl, S3UploadSigner, UploadSigner,
};
use chrono::Utc;

pub const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
pub const TEST_BUCKET: &str = "talkify-uploads";

/// In-memory signer that records every key it is asked to sign
#[derive(Default)]
pub struct FakeSigner {
    failure: Option<String>,
    keys: Mutex<Vec<String>>,
}

impl FakeSigner {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every call fails with an S3 error carrying `cause`
    pub fn failing(cause: &str) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(cause.to_string()),
            keys: Mutex::default(),
        })
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl UploadSigner for FakeSigner {
    async fn presign_pdf_put(&self, key: &str) -> BucketResult<PresignedUrl> {
        let call = {
            let mut keys = self.keys.lock().unwrap();
            keys.push(key.to_string());
            keys.len()
        };

        if let Some(cause) = &self.failure {
            return Err(BucketError::S3Error(cause.clone()));
        }

        Ok(PresignedUrl {
            url: format!("https://fake-bucket.example/{key}?X-Amz-Expires=300&call={call}"),
            expires_at: Utc::now() + Duration::from_secs(300),
        })
    }
}

/// Signer that takes `delay` before answering, e.g. a slow credential lookup
pub struct SlowSigner {
    delay: Duration,
}

impl SlowSigner {
    pub fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self { delay })
    }
}

#[async_trait]
impl UploadSigner for SlowSigner {
    async fn presign_pdf_put(&self, key: &str) -> BucketResult<PresignedUrl> {
        tokio::time::sleep(self.delay).await;
        Ok(PresignedUrl {
            url: format!("https://fake-bucket.example/{key}?X-Amz-Expires=300"),
            expires_at: Utc::now() + Duration::from_secs(300),
        })
    }
}

/// Real S3 signer with static credentials pointed at LocalStack.
///
/// Presigning is computed locally, so no LocalStack instance is needed.
pub fn local_s3_signer(bucket: Option<&str>) -> Arc<S3UploadSigner> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version_latest()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new(
            "AKIDTALKIFYTEST",
            "talkify-test-secret",
            None,
            None,
            "talkify-tests",
        ))
        .endpoint_url(LOCALSTACK_ENDPOINT)
        .force_path_style(true)
        .build();

    Arc::new(S3UploadSigner::new(
        Arc::new(S3Client::from_conf(config)),
        bucket.map(ToString::to_string),
        300,
    ))
}
