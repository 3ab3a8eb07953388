//! Client side of the Talkify upload flow: validate a PDF, request an upload
//! ticket from the backend, then PUT the bytes straight to object storage.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Drag-and-drop highlight state
pub mod drop_zone;

/// Upload errors
pub mod error;

/// Files selected for upload
pub mod file;

/// The ticket-then-upload state machine
pub mod flow;

/// User-visible status and flow state
pub mod status;

/// Direct uploads to presigned URLs
pub mod storage;

/// Upload ticket requests
pub mod ticket;

pub use drop_zone::DropZone;
pub use error::UploadError;
pub use file::SelectedFile;
pub use flow::UploadFlow;
pub use status::{UploadState, UploadStatus};
pub use storage::{HttpObjectUploader, ObjectUploader};
pub use ticket::{HttpTicketClient, TicketApi, UploadTicket};
