use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use telnyx_api::params::SendMessageParams;
use telnyx_api::{Client, RequestOptions};

use crate::output::{print_json, print_message_table, OutputFormat};

#[derive(Args)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub command: MessagesCommand,
}

#[derive(Subcommand)]
pub enum MessagesCommand {
    /// Send an SMS or MMS
    Send(SendArgs),
}

#[derive(Args)]
pub struct SendArgs {
    /// Destination number in E.164 format
    #[arg(long)]
    pub to: String,

    /// Sending number; required unless --messaging-profile-id is set
    #[arg(long)]
    pub from: Option<String>,

    /// Messaging profile whose number pool picks the sender
    #[arg(long)]
    pub messaging_profile_id: Option<String>,

    #[arg(long)]
    pub text: Option<String>,

    /// MMS subject
    #[arg(long)]
    pub subject: Option<String>,

    /// Media URL to attach; repeat for several
    #[arg(long = "media-url")]
    pub media_urls: Vec<String>,

    /// Sent as the Idempotency-Key header
    #[arg(long)]
    pub idempotency_key: Option<String>,
}

pub async fn run(args: &MessagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        MessagesCommand::Send(send) => run_send(send, client, format).await,
    }
}

async fn run_send(args: &SendArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut params = SendMessageParams::new(&args.to);
    if let Some(from) = &args.from {
        params = params.with_from(from);
    }
    if let Some(profile) = &args.messaging_profile_id {
        params = params.with_messaging_profile_id(profile);
    }
    if let Some(text) = &args.text {
        params = params.with_text(text);
    }
    if let Some(subject) = &args.subject {
        params = params.with_subject(subject);
    }
    for url in &args.media_urls {
        params = params.with_media_url(url);
    }

    let mut options = RequestOptions::new();
    if let Some(key) = &args.idempotency_key {
        options = options.with_idempotency_key(key);
    }

    let resp = client
        .messages()
        .with_options(options)
        .send(params)
        .await
        .with_context(|| format!("failed to send message to {}", args.to))?;
    match format {
        OutputFormat::Table => print_message_table(&resp.data),
        OutputFormat::Json => print_json(&resp.data),
    }
    Ok(())
}
