use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use telnyx_api::Client;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub command: MediaCommand,
}

#[derive(Subcommand)]
pub enum MediaCommand {
    /// Download stored media to a file
    Download(DownloadArgs),
}

#[derive(Args)]
pub struct DownloadArgs {
    /// Media name as stored
    pub media_name: String,

    /// Destination path (default: the media name in the current directory)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(args: &MediaArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        MediaCommand::Download(download) => run_download(download, client, format).await,
    }
}

async fn run_download(args: &DownloadArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let binary = client
        .media()
        .download(&args.media_name)
        .await
        .with_context(|| format!("failed to download media {}", args.media_name))?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&args.media_name));
    std::fs::write(&out, &binary.bytes)
        .with_context(|| format!("failed to write {}", out.display()))?;

    match format {
        OutputFormat::Table => println!(
            "Saved {} bytes ({}) to {}",
            binary.bytes.len(),
            binary.content_type.as_deref().unwrap_or("unknown type"),
            out.display()
        ),
        OutputFormat::Json => print_json(&serde_json::json!({
            "media_name": args.media_name,
            "path": out.display().to_string(),
            "bytes": binary.bytes.len(),
            "content_type": binary.content_type,
        })),
    }
    Ok(())
}
