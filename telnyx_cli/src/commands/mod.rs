//! CLI subcommand implementations.

pub mod balance;
pub mod mcp_servers;
pub mod media;
pub mod messages;
pub mod phone_numbers;
