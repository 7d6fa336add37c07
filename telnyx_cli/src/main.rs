mod commands;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use telnyx_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "telnyx")]
#[command(about = "Work with a Telnyx account from the command line")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Override the API base URL (default: TELNYX_BASE_URL or https://api.telnyx.com/v2)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the account balance
    Balance,
    /// Manage phone numbers
    PhoneNumbers(commands::phone_numbers::PhoneNumbersArgs),
    /// Manage MCP servers for AI assistants
    McpServers(commands::mcp_servers::McpServersArgs),
    /// Send messages
    Messages(commands::messages::MessagesArgs),
    /// Work with stored media
    Media(commands::media::MediaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("telnyx=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let mut config = ClientConfig::from_env().context("failed to load Telnyx configuration")?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = Client::new(config).context("failed to create Telnyx client")?;

    match &cli.command {
        Commands::Balance => commands::balance::run(&client, &format).await?,
        Commands::PhoneNumbers(args) => commands::phone_numbers::run(args, &client, &format).await?,
        Commands::McpServers(args) => commands::mcp_servers::run(args, &client, &format).await?,
        Commands::Messages(args) => commands::messages::run(args, &client, &format).await?,
        Commands::Media(args) => commands::media::run(args, &client, &format).await?,
    }

    Ok(())
}
