use serde::{Deserialize, Serialize};

/// Account balance. Amounts are decimal strings as sent by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    pub balance: String,
    pub credit_limit: String,
    pub available_credit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
}
