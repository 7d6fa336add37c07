use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use telnyx_api::params::PhoneNumberListParams;
use telnyx_api::{Client, Paginate};

use crate::output::{print_json, print_phone_numbers_table, OutputFormat};

#[derive(Args)]
pub struct PhoneNumbersArgs {
    #[command(subcommand)]
    pub command: PhoneNumbersCommand,
}

#[derive(Subcommand)]
pub enum PhoneNumbersCommand {
    /// List numbers on the account
    List(ListArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Filter by status (e.g. active, purchase-pending, port-pending)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by full or partial number (e.g. +1312)
    #[arg(long)]
    pub phone_number: Option<String>,

    /// Filter by voice connection ID
    #[arg(long)]
    pub connection_id: Option<String>,

    /// Sort field: purchased_at, -purchased_at, phone_number, connection_name
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: i64,

    /// Keep fetching until the last page
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: &PhoneNumbersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        PhoneNumbersCommand::List(list) => run_list(list, client, format).await,
    }
}

async fn run_list(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut params = PhoneNumberListParams::default()
        .with_page(args.page)
        .with_page_size(args.page_size);

    if let Some(tag) = &args.tag {
        params = params.with_tag(tag);
    }
    if let Some(status) = &args.status {
        params = params.with_status(status.as_str());
    }
    if let Some(phone_number) = &args.phone_number {
        params = params.with_phone_number(phone_number);
    }
    if let Some(connection_id) = &args.connection_id {
        params = params.with_connection_id(connection_id);
    }
    if let Some(sort) = &args.sort {
        params = params.with_sort(sort.as_str());
    }

    let mut page = client
        .phone_numbers()
        .list(params)
        .await
        .context("failed to list phone numbers")?;

    let mut numbers = Vec::new();
    loop {
        let next = if args.all {
            page.next_page()
                .await
                .with_context(|| format!("failed to fetch page {}", page.page_number() + 1))?
        } else {
            None
        };
        if !args.all {
            if let Some(total) = page.total_pages() {
                eprintln!("Page {} of {}", page.page_number(), total);
            }
        }
        numbers.extend(page.into_items());
        match next {
            Some(next) => page = next,
            None => break,
        }
    }

    match format {
        OutputFormat::Table => print_phone_numbers_table(&numbers),
        OutputFormat::Json => print_json(&numbers),
    }
    Ok(())
}
