use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uploader::{HttpObjectUploader, HttpTicketClient, SelectedFile, UploadFlow, UploadState};

/// Upload a PDF to Talkify through a presigned URL
#[derive(Debug, Parser)]
#[command(name = "talkify-upload", version)]
struct Args {
    /// PDF file to upload
    file: PathBuf,

    /// Base URL of the Talkify backend
    #[arg(long, env = "TALKIFY_SERVER_URL", default_value = "http://localhost:8001")]
    server_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout only carries the status message
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let file = SelectedFile::from_path(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let http_client = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let flow = UploadFlow::new(
        HttpTicketClient::new(args.server_url, http_client.clone()),
        HttpObjectUploader::new(http_client),
    );

    let mut states = flow.subscribe();
    let progress = async {
        while states.changed().await.is_ok() {
            let state = *states.borrow_and_update();
            tracing::info!(%state, "Upload state changed");
            if state.is_terminal() {
                return state;
            }
        }
        UploadState::Failed
    };

    let (status, final_state) = tokio::join!(flow.upload(file), progress);
    println!("{status}");

    Ok(if final_state == UploadState::Succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

