//! Generic page wrapper with next-page fetching.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

use crate::{
    client::Client,
    options::RequestOptions,
    request::{ApiRequest, Body},
    response::{decode_json, RawResponse},
    types::PageMeta,
    Error,
};

/// How a list endpoint shapes its pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStyle {
    /// `{"data": [...], "meta": {"page_number", "page_size", "total_pages", "total_results"}}`
    Offset,
    /// A bare array (or `{"data": [...]}`) with no totals.
    Flat,
}

/// The request a page was fetched with, kept so the next page can be requested.
#[derive(Debug, Clone)]
pub(crate) struct PageRequest {
    pub path: Vec<String>,
    pub query: Map<String, Value>,
    pub options: RequestOptions,
}

/// One page of a list result.
///
/// A page never changes once decoded. [`Page::next_page`] issues a new request
/// and returns a separate page.
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    meta: Option<PageMeta>,
    style: PageStyle,
    request: PageRequest,
    client: Client,
}

#[derive(Deserialize)]
struct Enveloped<T> {
    data: Vec<T>,
    #[serde(default)]
    meta: Option<PageMeta>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlatBody<T> {
    Bare(Vec<T>),
    Enveloped(Enveloped<T>),
}

pub(crate) fn decode_page<T: DeserializeOwned>(
    raw: RawResponse,
    style: PageStyle,
    mut request: PageRequest,
    client: Client,
) -> Result<Page<T>, Error> {
    nest_page_keys(&mut request.query);
    let (items, meta) = match style {
        PageStyle::Offset => {
            let body: Enveloped<T> = decode_json(raw)?;
            (body.data, body.meta)
        }
        PageStyle::Flat => match decode_json::<FlatBody<T>>(raw)? {
            FlatBody::Bare(items) => (items, None),
            FlatBody::Enveloped(body) => (body.data, body.meta),
        },
    };
    Ok(Page {
        items,
        meta,
        style,
        request,
        client,
    })
}

/// Moves flat `page[number]`-style keys into the nested `page` object, so a
/// query built either way advances the same page. Flat keys override nested ones.
fn nest_page_keys(query: &mut Map<String, Value>) {
    let flat: Vec<String> = query
        .keys()
        .filter(|key| key.starts_with("page[") && key.ends_with(']') && !key.ends_with("[]"))
        .cloned()
        .collect();
    if flat.is_empty() {
        return;
    }
    let mut page = match query.remove("page") {
        Some(Value::Object(page)) => page,
        _ => Map::new(),
    };
    for key in flat {
        if let Some(value) = query.remove(&key) {
            page.insert(key["page[".len()..key.len() - 1].to_string(), value);
        }
    }
    query.insert("page".to_string(), Value::Object(page));
}

impl<T> Page<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn meta(&self) -> Option<&PageMeta> {
        self.meta.as_ref()
    }

    pub fn style(&self) -> PageStyle {
        self.style
    }

    /// Current page number: from metadata when present, otherwise the requested
    /// number, otherwise 1.
    pub fn page_number(&self) -> i64 {
        self.meta
            .as_ref()
            .and_then(|m| m.page_number)
            .or_else(|| self.requested("number"))
            .unwrap_or(1)
    }

    pub fn page_size(&self) -> Option<i64> {
        self.meta
            .as_ref()
            .and_then(|m| m.page_size)
            .or_else(|| self.requested("size"))
    }

    pub fn total_pages(&self) -> Option<i64> {
        self.meta.as_ref().and_then(|m| m.total_pages)
    }

    pub fn total_results(&self) -> Option<i64> {
        self.meta.as_ref().and_then(|m| m.total_results)
    }

    /// With a known `total_pages` this compares page numbers. Without totals, a
    /// page that came back full (or non-empty when no size was requested) is
    /// assumed to have a successor.
    pub fn has_next_page(&self) -> bool {
        match self.total_pages() {
            Some(total) => self.page_number() < total,
            None => {
                !self.items.is_empty()
                    && self
                        .page_size()
                        .map_or(true, |size| self.items.len() as i64 >= size)
            }
        }
    }

    /// Query map for the next page, or `None` on the last page.
    pub fn next_page_query(&self) -> Option<Map<String, Value>> {
        if !self.has_next_page() {
            return None;
        }
        let mut query = self.request.query.clone();
        let next = self.page_number() + 1;
        let page = query
            .entry("page")
            .or_insert_with(|| Value::Object(Map::new()));
        if !page.is_object() {
            *page = Value::Object(Map::new());
        }
        if let Value::Object(page) = page {
            page.insert("number".to_string(), Value::from(next));
        }
        Some(query)
    }

    fn requested(&self, key: &str) -> Option<i64> {
        let value = self.request.query.get("page")?.get(key)?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Fetches the page after this one. Returns `Ok(None)` on the last page.
    pub async fn next_page(&self) -> Result<Option<Page<T>>, Error> {
        let Some(query) = self.next_page_query() else {
            return Ok(None);
        };
        let request = ApiRequest {
            method: reqwest::Method::GET,
            path: self.request.path.clone(),
            query,
            body: Body::Empty,
            accept: "application/json",
            options: self.request.options.clone(),
        };
        self.client
            .call_page(request, self.style)
            .await
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ClientConfig;

    fn page_request(query: Value) -> PageRequest {
        PageRequest {
            path: vec!["phone_numbers".to_string()],
            query: match query {
                Value::Object(map) => map,
                _ => Map::new(),
            },
            options: RequestOptions::default(),
        }
    }

    fn client() -> Client {
        Client::new(ClientConfig::new("KEY")).unwrap()
    }

    #[test]
    fn offset_page_exposes_meta() {
        let raw = RawResponse::new(
            200,
            r#"{"data":[1,2],"meta":{"page_number":1,"page_size":2,"total_pages":3,"total_results":6}}"#,
        );
        let page: Page<i64> =
            decode_page(raw, PageStyle::Offset, page_request(json!({})), client()).unwrap();
        assert_eq!(page.items(), &[1, 2]);
        assert_eq!(page.total_pages(), Some(3));
        assert_eq!(page.total_results(), Some(6));
        assert!(page.has_next_page());
        assert_eq!(
            page.next_page_query().map(Value::Object),
            Some(json!({"page": {"number": 2}}))
        );
    }

    #[test]
    fn last_offset_page_has_no_successor() {
        let raw = RawResponse::new(
            200,
            r#"{"data":[1],"meta":{"number":3,"size":2,"total_pages":3}}"#,
        );
        let page: Page<i64> =
            decode_page(raw, PageStyle::Offset, page_request(json!({})), client()).unwrap();
        assert_eq!(page.page_number(), 3);
        assert!(!page.has_next_page());
        assert_eq!(page.next_page_query(), None);
    }

    #[test]
    fn flat_page_advances_requested_number_and_keeps_filters() {
        let raw = RawResponse::new(200, r#"[{"id":"a"},{"id":"b"}]"#);
        let request = page_request(json!({"page": {"number": 4, "size": 2}, "type": "sse"}));
        let page: Page<Value> = decode_page(raw, PageStyle::Flat, request, client()).unwrap();
        assert_eq!(page.page_number(), 4);
        assert_eq!(page.total_pages(), None);
        assert_eq!(
            page.next_page_query().map(Value::Object),
            Some(json!({"page": {"number": 5, "size": 2}, "type": "sse"}))
        );
    }

    #[test]
    fn flat_bracket_page_keys_advance_like_nested_ones() {
        let raw = RawResponse::new(200, "[10,11]");
        let request = page_request(json!({"page[number]": 3, "page[size]": 2, "type": "sse"}));
        let page: Page<i64> = decode_page(raw, PageStyle::Flat, request, client()).unwrap();
        assert_eq!(page.page_number(), 3);
        assert_eq!(page.page_size(), Some(2));

        let next = page.next_page_query().unwrap();
        assert_eq!(
            Value::Object(next.clone()),
            json!({"page": {"number": 4, "size": 2}, "type": "sse"})
        );
        let mut pairs = crate::request::flatten_query(&next);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("page[number]".to_string(), "4".to_string()),
                ("page[size]".to_string(), "2".to_string()),
                ("type".to_string(), "sse".to_string()),
            ]
        );
    }

    #[test]
    fn short_or_empty_flat_page_is_the_last() {
        let request = page_request(json!({"page": {"size": 10}}));
        let raw = RawResponse::new(200, "[1,2,3]");
        let page: Page<i64> = decode_page(raw, PageStyle::Flat, request, client()).unwrap();
        assert!(!page.has_next_page());

        let raw = RawResponse::new(200, "[]");
        let page: Page<i64> =
            decode_page(raw, PageStyle::Flat, page_request(json!({})), client()).unwrap();
        assert!(!page.has_next_page());
    }

    #[test]
    fn flat_style_accepts_data_envelope() {
        let page: Page<i64> = decode_page(
            RawResponse::new(200, r#"{"data":[7]}"#),
            PageStyle::Flat,
            page_request(json!({})),
            client(),
        )
        .unwrap();
        assert_eq!(page.items(), &[7]);
    }

    #[test]
    fn offset_body_without_data_is_a_decode_error() {
        let result = decode_page::<i64>(
            RawResponse::new(200, r#"{"meta":{}}"#),
            PageStyle::Offset,
            page_request(json!({})),
            client(),
        );
        assert_eq!(result.unwrap_err().kind(), crate::ErrorKind::Decode);
    }
}
