use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common_types::{UploadUrlRequest, UploadUrlResponse, UPLOAD_ROUTE, UPLOAD_URL_TTL_SECS};
use reqwest::Client;

use crate::error::UploadError;

/// Presigned upload URL handed out by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    /// Object key the URL is scoped to
    pub object_name: String,
    /// Presigned PUT URL
    pub url: String,
    /// When the client received the ticket. The server signed it slightly
    /// earlier, so `expires_at` is an upper bound on the real deadline.
    pub received_at: DateTime<Utc>,
}

impl UploadTicket {
    /// Five minutes after receipt; storage rejects the PUT no later than this
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.received_at + Duration::from_secs(UPLOAD_URL_TTL_SECS)
    }
}

impl From<UploadUrlResponse> for UploadTicket {
    fn from(response: UploadUrlResponse) -> Self {
        Self {
            object_name: response.file_name,
            url: response.url,
            received_at: Utc::now(),
        }
    }
}

/// Source of upload tickets
#[async_trait]
pub trait TicketApi: Send + Sync {
    /// Requests a ticket for `file_name`
    ///
    /// # Errors
    ///
    /// Returns `UploadError::TicketRequest` on transport or decoding failure
    /// and `UploadError::TicketRejected` on a non-success status
    async fn request_ticket(&self, file_name: &str) -> Result<UploadTicket, UploadError>;
}

/// Requests tickets from the backend's `POST /api/upload`
pub struct HttpTicketClient {
    base_url: String,
    http_client: Client,
}

impl HttpTicketClient {
    /// Creates a ticket client for the backend at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{UPLOAD_ROUTE}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TicketApi for HttpTicketClient {
    async fn request_ticket(&self, file_name: &str) -> Result<UploadTicket, UploadError> {
        let request = UploadUrlRequest {
            file_name: Some(file_name.to_string()),
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(UploadError::TicketRequest)?;

        if !response.status().is_success() {
            return Err(UploadError::TicketRejected(response.status()));
        }

        let response_data = response
            .json::<UploadUrlResponse>()
            .await
            .map_err(UploadError::TicketRequest)?;

        Ok(response_data.into())
    }
}
