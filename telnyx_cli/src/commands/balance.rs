use anyhow::{Context, Result};
use telnyx_api::Client;

use crate::output::{print_balance_table, print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client
        .balance()
        .retrieve()
        .await
        .context("failed to fetch balance")?;
    match format {
        OutputFormat::Table => print_balance_table(&resp.data),
        OutputFormat::Json => print_json(&resp.data),
    }
    Ok(())
}
