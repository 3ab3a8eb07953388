use std::fmt;

/// Where an upload attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    /// A file was selected, nothing sent yet
    #[default]
    Idle,
    /// Waiting for the backend to issue an upload ticket
    AwaitingTicket,
    /// PUT to the presigned URL in flight
    Uploading,
    /// Storage accepted the upload
    Succeeded,
    /// Validation, ticket or upload failed
    Failed,
}

impl UploadState {
    /// Whether the attempt is over
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            Self::Idle => "idle",
            Self::AwaitingTicket => "awaiting_ticket",
            Self::Uploading => "uploading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(state)
    }
}

/// Message shown to the user once an attempt ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// The file is in storage
    Succeeded,
    /// Any ticket or transport failure
    Failed,
    /// The selected file was not a PDF
    NotPdf,
}

impl UploadStatus {
    /// User-facing text
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Succeeded => "Upload successful!",
            Self::Failed => "Upload failed.",
            Self::NotPdf => "Please upload a PDF file.",
        }
    }

    /// Success is rendered green, everything else red
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
