use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    error::UploadError,
    file::SelectedFile,
    status::{UploadState, UploadStatus},
    storage::ObjectUploader,
    ticket::TicketApi,
};

/// Drives one upload per selected file: validate, request a ticket, PUT.
///
/// The two network steps are strictly sequential. Attempts are not
/// serialized against each other: selecting a new file while one is in
/// flight starts a second, independent attempt, and nothing is cancelled.
/// The published state and status reflect whichever attempt moved last.
pub struct UploadFlow<T, U> {
    tickets: T,
    uploader: U,
    state: watch::Sender<UploadState>,
    status: watch::Sender<Option<UploadStatus>>,
}

impl<T, U> UploadFlow<T, U>
where
    T: TicketApi,
    U: ObjectUploader,
{
    /// Creates an idle flow
    #[must_use]
    pub fn new(tickets: T, uploader: U) -> Self {
        let (state, _) = watch::channel(UploadState::Idle);
        let (status, _) = watch::channel(None);
        Self {
            tickets,
            uploader,
            state,
            status,
        }
    }

    /// Subscribes to state transitions
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UploadState> {
        self.state.subscribe()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> UploadState {
        *self.state.borrow()
    }

    /// Message from the last finished attempt, if any
    #[must_use]
    pub fn status(&self) -> Option<UploadStatus> {
        *self.status.borrow()
    }

    /// Files dropped on the zone. An empty drop counts as a non-PDF.
    pub async fn on_drop(&self, file: Option<SelectedFile>) -> UploadStatus {
        match file {
            Some(file) => self.upload(file).await,
            None => self.finish(Err(UploadError::NoFile)),
        }
    }

    /// File chosen with the picker. Cancelling the picker does nothing.
    pub async fn on_browse(&self, file: Option<SelectedFile>) -> Option<UploadStatus> {
        match file {
            Some(file) => Some(self.upload(file).await),
            None => None,
        }
    }

    /// Runs one full attempt for `file` and returns the message to show
    #[instrument(skip_all, fields(file_name = %file.name))]
    pub async fn upload(&self, file: SelectedFile) -> UploadStatus {
        self.state.send_replace(UploadState::Idle);

        if !file.is_pdf() {
            return self.finish(Err(UploadError::NotPdf(file.media_type)));
        }

        let result = self.ticket_then_put(file).await;
        self.finish(result)
    }

    async fn ticket_then_put(&self, file: SelectedFile) -> Result<(), UploadError> {
        self.state.send_replace(UploadState::AwaitingTicket);
        let ticket = self.tickets.request_ticket(&file.name).await?;

        debug!(
            object_name = %ticket.object_name,
            expires_at = %ticket.expires_at(),
            "Received upload ticket"
        );

        self.state.send_replace(UploadState::Uploading);
        self.uploader.put_pdf(&ticket.url, file.bytes).await
    }

    fn finish(&self, result: Result<(), UploadError>) -> UploadStatus {
        let status = match result {
            Ok(()) => {
                info!("Upload succeeded");
                UploadStatus::Succeeded
            }
            Err(e) if e.is_validation() => {
                warn!(kind = e.kind(), "Rejected file: {e}");
                UploadStatus::NotPdf
            }
            Err(e) => {
                error!(kind = e.kind(), "Error uploading file: {e}");
                UploadStatus::Failed
            }
        };

        let state = if status.is_success() {
            UploadState::Succeeded
        } else {
            UploadState::Failed
        };

        self.status.send_replace(Some(status));
        self.state.send_replace(state);
        status
    }
}
