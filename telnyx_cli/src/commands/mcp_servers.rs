use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use telnyx_api::params::{McpServerCreateParams, McpServerListParams};
use telnyx_api::{Client, Paginate};

use crate::output::{print_json, print_mcp_servers_table, OutputFormat};

#[derive(Args)]
pub struct McpServersArgs {
    #[command(subcommand)]
    pub command: McpServersCommand,
}

#[derive(Subcommand)]
pub enum McpServersCommand {
    /// List registered MCP servers
    List(ListArgs),
    /// Register a new MCP server
    Create(CreateArgs),
    /// Remove an MCP server
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by transport type (e.g. sse, http)
    #[arg(long = "type")]
    pub server_type: Option<String>,

    /// Filter by server URL
    #[arg(long)]
    pub url: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: i64,
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    /// Transport type (e.g. sse, http)
    #[arg(long = "type")]
    pub server_type: String,

    #[arg(long)]
    pub url: String,

    /// Name of the stored secret holding the server's API key
    #[arg(long)]
    pub api_key_ref: Option<String>,

    /// Tool the assistant may call; repeat for several
    #[arg(long = "allowed-tool")]
    pub allowed_tools: Vec<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// MCP server ID
    pub id: String,
}

pub async fn run(args: &McpServersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let servers = client.ai().mcp_servers();
    match &args.command {
        McpServersCommand::List(list) => {
            let mut params = McpServerListParams::default()
                .with_page(list.page)
                .with_page_size(list.page_size);
            if let Some(server_type) = &list.server_type {
                params = params.with_type(server_type);
            }
            if let Some(url) = &list.url {
                params = params.with_url(url);
            }
            let page = servers
                .list(params)
                .await
                .context("failed to list MCP servers")?;
            match format {
                OutputFormat::Table => print_mcp_servers_table(page.items()),
                OutputFormat::Json => print_json(&page.items()),
            }
        }
        McpServersCommand::Create(create) => {
            let mut params =
                McpServerCreateParams::new(&create.name, &create.server_type, &create.url);
            if let Some(api_key_ref) = &create.api_key_ref {
                params = params.with_api_key_ref(api_key_ref);
            }
            if !create.allowed_tools.is_empty() {
                let tools: Vec<&str> = create.allowed_tools.iter().map(String::as_str).collect();
                params = params.with_allowed_tools(&tools);
            }
            let server = servers
                .create(params)
                .await
                .context("failed to create MCP server")?;
            match format {
                OutputFormat::Table => print_mcp_servers_table(std::slice::from_ref(&server)),
                OutputFormat::Json => print_json(&server),
            }
        }
        McpServersCommand::Delete(delete) => {
            servers
                .delete(&delete.id)
                .await
                .with_context(|| format!("failed to delete MCP server {}", delete.id))?;
            match format {
                OutputFormat::Table => println!("Deleted MCP server {}", delete.id),
                OutputFormat::Json => print_json(&serde_json::json!({ "deleted": delete.id })),
            }
        }
    }
    Ok(())
}
