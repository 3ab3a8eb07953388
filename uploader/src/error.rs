use reqwest::StatusCode;
use thiserror::Error;

/// Why an upload attempt failed.
///
/// Every variant except the validation ones is shown to the user as the same
/// "Upload failed." message; the variant itself is only logged.
#[derive(Debug, Error)]
pub enum UploadError {
    /// A drop carried no file
    #[error("no file was dropped")]
    NoFile,

    /// The declared media type is not `application/pdf`
    #[error("declared media type {0:?} is not application/pdf")]
    NotPdf(String),

    /// The ticket request could not be sent or its response not decoded
    #[error("upload ticket request failed: {0}")]
    TicketRequest(#[source] reqwest::Error),

    /// The issuer answered with a non-success status
    #[error("upload ticket request rejected with status {0}")]
    TicketRejected(StatusCode),

    /// The PUT to storage could not be sent
    #[error("storage upload failed: {0}")]
    StorageRequest(#[source] reqwest::Error),

    /// Storage answered the PUT with a non-success status, e.g. an expired URL
    #[error("storage rejected upload with status {0}")]
    StorageRejected(StatusCode),
}

impl UploadError {
    /// Machine-readable kind, for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoFile => "no_file",
            Self::NotPdf(_) => "not_pdf",
            Self::TicketRequest(_) => "ticket_request",
            Self::TicketRejected(_) => "ticket_rejected",
            Self::StorageRequest(_) => "storage_request",
            Self::StorageRejected(_) => "storage_rejected",
        }
    }

    /// Whether the file was rejected before any network call
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::NoFile | Self::NotPdf(_))
    }
}
