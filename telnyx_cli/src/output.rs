use tabled::{Table, Tabled};
use telnyx_api::types::{Balance, McpServer, Message, PhoneNumber};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct PhoneNumberRow {
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Connection")]
    connection: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Purchased")]
    purchased: String,
}

#[derive(Tabled)]
struct McpServerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    server_type: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Tools")]
    tools: String,
}

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Credit Limit")]
    credit_limit: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Pending")]
    pending: String,
}

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Type")]
    message_type: String,
    #[tabled(rename = "Parts")]
    parts: String,
}

// -- Row builders --

fn build_phone_number_rows(numbers: &[PhoneNumber]) -> Vec<PhoneNumberRow> {
    numbers
        .iter()
        .map(|n| PhoneNumberRow {
            number: n.phone_number.clone(),
            status: n.status.to_string(),
            connection: n
                .connection_name
                .clone()
                .or_else(|| n.connection_id.clone())
                .unwrap_or_else(|| "-".to_string()),
            tags: n.tags.join(", "),
            purchased: n
                .purchased_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_mcp_server_rows(servers: &[McpServer]) -> Vec<McpServerRow> {
    servers
        .iter()
        .map(|s| McpServerRow {
            id: s.id.clone(),
            name: s.name.clone(),
            server_type: s.server_type.clone(),
            url: s.url.clone(),
            tools: match &s.allowed_tools {
                None => "all".to_string(),
                Some(tools) if tools.is_empty() => "none".to_string(),
                Some(tools) => tools.join(", "),
            },
        })
        .collect()
}

fn build_balance_rows(balance: &Balance) -> Vec<BalanceRow> {
    let money = |amount: &str| format!("{} {}", amount, balance.currency);
    vec![BalanceRow {
        balance: money(&balance.balance),
        credit_limit: money(&balance.credit_limit),
        available: money(&balance.available_credit),
        pending: balance
            .pending
            .as_deref()
            .map(money)
            .unwrap_or_else(|| "-".to_string()),
    }]
}

fn build_message_rows(message: &Message) -> Vec<MessageRow> {
    message
        .to
        .iter()
        .map(|to| MessageRow {
            id: message.id.clone(),
            to: to.phone_number.clone(),
            status: to
                .status
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            message_type: message.message_type.to_string(),
            parts: message
                .parts
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

// -- Table output --

pub fn print_phone_numbers_table(numbers: &[PhoneNumber]) {
    println!("{}", Table::new(build_phone_number_rows(numbers)));
}

pub fn print_mcp_servers_table(servers: &[McpServer]) {
    println!("{}", Table::new(build_mcp_server_rows(servers)));
}

pub fn print_balance_table(balance: &Balance) {
    println!("{}", Table::new(build_balance_rows(balance)));
}

pub fn print_message_table(message: &Message) {
    println!("{}", Table::new(build_message_rows(message)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
