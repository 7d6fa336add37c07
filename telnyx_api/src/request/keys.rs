//! Wire-name renaming and query-string flattening.

use serde_json::{Map, Value};

/// Renames top-level keys using a `(local, wire)` table. Unmapped keys are kept.
///
/// When a map carries both the local and the wire spelling, the wire one wins.
/// Re-applying the table to its own output changes nothing.
pub fn rename_keys(map: Map<String, Value>, table: &[(&str, &str)]) -> Map<String, Value> {
    if table.is_empty() {
        return map;
    }
    let mut out = Map::new();
    let mut renamed = Vec::new();
    for (key, value) in map {
        match table.iter().find(|(local, _)| *local == key) {
            Some((_, wire)) if *wire != key => renamed.push((wire.to_string(), value)),
            _ => {
                out.insert(key, value);
            }
        }
    }
    for (wire, value) in renamed {
        out.entry(wire).or_insert(value);
    }
    out
}

/// Flattens a normalized map into query pairs.
///
/// Nested objects use bracket notation (`page[number]`), arrays become repeated
/// `key[]` pairs, and `null` values produce nothing.
pub fn flatten_query(map: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in map {
        flatten_into(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten_into(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for item in items {
                flatten_into(format!("{}[]", key), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (name, item) in fields {
                flatten_into(format!("{}[{}]", key, name), item, pairs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn renames_mapped_keys_only() {
        let table = [("metadata_assistant_id", "metadata->assistant_id")];
        let map = object(json!({"metadata_assistant_id": "eq.abc", "name": "eq.support"}));
        let out = rename_keys(map, &table);
        assert_eq!(
            Value::Object(out),
            json!({"metadata->assistant_id": "eq.abc", "name": "eq.support"})
        );
    }

    #[test]
    fn rename_is_idempotent() {
        let table = [("apiKeyRef", "api_key_ref")];
        let once = rename_keys(object(json!({"apiKeyRef": "ref", "url": "u"})), &table);
        let twice = rename_keys(once.clone(), &table);
        assert_eq!(once, twice);
    }

    #[test]
    fn wire_spelling_wins_over_local_spelling() {
        let table = [("apiKeyRef", "api_key_ref")];
        let out = rename_keys(
            object(json!({"apiKeyRef": "local", "api_key_ref": "wire"})),
            &table,
        );
        assert_eq!(Value::Object(out), json!({"api_key_ref": "wire"}));
    }

    #[test]
    fn flattens_nested_objects_and_arrays() {
        let map = object(json!({
            "emergency": true,
            "filter": {"content_type": ["audio/mpeg", "image/png"], "status": "active"},
            "page": {"number": 2, "size": 25},
            "skipped": null
        }));
        let query = flatten_query(&map)
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        insta::assert_snapshot!(query, @"emergency=true&filter[content_type][]=audio/mpeg&filter[content_type][]=image/png&filter[status]=active&page[number]=2&page[size]=25");
    }

    #[test]
    fn flattening_flat_pairs_again_is_a_no_op() {
        let map = object(json!({"page": {"number": 1, "size": 10}, "sort": "-purchased_at"}));
        let first = flatten_query(&map);
        let reflattened: Map<String, Value> = first
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        assert_eq!(flatten_query(&reflattened), first);
    }

    #[test]
    fn postgrest_keys_pass_through() {
        let map = object(json!({"metadata->call_control_id": "eq.v3:abc"}));
        assert_eq!(
            flatten_query(&map),
            vec![(
                "metadata->call_control_id".to_string(),
                "eq.v3:abc".to_string()
            )]
        );
    }
}
