use serde::{Deserialize, Serialize};

/// Page metadata returned alongside offset-paginated lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default, alias = "number", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(default, alias = "size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<i64>,
}

/// The `{"data": ...}` envelope most endpoints wrap their payload in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
}
