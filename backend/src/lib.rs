//! Talkify upload backend: issues short-lived presigned URLs for PDF uploads

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// HTTP routes
pub mod routes;

/// Server bootstrap
pub mod server;

/// Configuration, errors and extractors
pub mod types;

/// Presigned upload URL issuance
pub mod upload_storage;
