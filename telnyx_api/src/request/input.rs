//! Parameter parsing: typed-or-raw input to a normalized wire map.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{keys::rename_keys, FileUpload};
use crate::{options::RequestOptions, Error};

/// Implemented by every typed parameter object.
pub trait RequestParams: Serialize {
    /// `(local, wire)` renames applied after serialization, so raw maps may use
    /// either spelling.
    const RENAMES: &'static [(&'static str, &'static str)] = &[];

    /// Wire-named values filled in when the caller did not supply them.
    fn defaults() -> Map<String, Value> {
        Map::new()
    }

    /// Local checks that need a value rather than a type, run before serialization.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Moves out file parts for multipart operations.
    fn take_files(&mut self) -> Vec<(String, FileUpload)> {
        Vec::new()
    }
}

/// Input accepted by every operation: a typed parameter object or a raw JSON object.
///
/// Raw objects pass unknown keys through, and missing required keys are left for
/// the server to reject.
#[derive(Debug, Clone)]
pub enum Params<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Params<T> {
    pub fn raw(value: Value) -> Self {
        Params::Raw(value)
    }
}

impl<T: RequestParams> From<T> for Params<T> {
    fn from(params: T) -> Self {
        Params::Typed(params)
    }
}

/// Output of [`parse`]: wire-named fields plus the options for this call.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub fields: Map<String, Value>,
    pub files: Vec<(String, FileUpload)>,
    pub options: RequestOptions,
}

/// Normalizes `input` for the wire.
///
/// Typed input is validated and serialized, leaving out unset optionals through
/// their serde attributes. Raw input has its `null` entries dropped. Both then
/// go through the rename table and get defaults merged for any missing key.
pub fn parse<T: RequestParams>(
    input: Params<T>,
    options: &RequestOptions,
) -> Result<Normalized, Error> {
    let (fields, files) = match input {
        Params::Typed(mut params) => {
            params.validate()?;
            let files = params.take_files();
            let value = serde_json::to_value(&params).map_err(|e| {
                Error::Construction(format!("failed to serialize parameters: {}", e))
            })?;
            match value {
                Value::Object(map) => (map, files),
                other => {
                    return Err(Error::Construction(format!(
                        "parameters must serialize to an object, got {}",
                        other
                    )))
                }
            }
        }
        Params::Raw(Value::Object(map)) => (strip_nulls(map), Vec::new()),
        Params::Raw(other) => {
            return Err(Error::Construction(format!(
                "raw parameters must be a JSON object, got {}",
                other
            )))
        }
    };

    let mut fields = rename_keys(fields, T::RENAMES);
    for (key, value) in T::defaults() {
        fields.entry(key).or_insert(value);
    }

    Ok(Normalized {
        fields,
        files,
        options: options.clone(),
    })
}

fn strip_nulls(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key, strip_nested(value)))
        .collect()
}

fn strip_nested(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(strip_nulls(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nested).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::{json, Map, Value};

    use super::*;

    #[derive(Serialize)]
    struct Widget {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    impl RequestParams for Widget {
        const RENAMES: &'static [(&'static str, &'static str)] = &[("displayName", "name")];

        fn defaults() -> Map<String, Value> {
            let mut defaults = Map::new();
            defaults.insert("model".to_string(), json!("default-model"));
            defaults
        }

        fn validate(&self) -> Result<(), Error> {
            if self.name.is_empty() {
                return Err(Error::Construction("name must not be empty".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn typed_input_omits_unset_optionals_and_merges_defaults() {
        let widget = Widget {
            name: "widget".to_string(),
            note: None,
        };
        let out = parse(Params::from(widget), &RequestOptions::default()).unwrap();
        assert_eq!(
            Value::Object(out.fields),
            json!({"name": "widget", "model": "default-model"})
        );
    }

    #[test]
    fn typed_validation_runs_before_serialization() {
        let widget = Widget {
            name: String::new(),
            note: None,
        };
        let err = parse(Params::from(widget), &RequestOptions::default()).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Construction);
    }

    #[test]
    fn raw_input_drops_nulls_renames_and_keeps_unknown_keys() {
        let raw = json!({
            "displayName": "raw",
            "note": null,
            "future_field": {"nested": null, "kept": 1},
            "model": "custom"
        });
        let out = parse(Params::<Widget>::raw(raw), &RequestOptions::default()).unwrap();
        assert_eq!(
            Value::Object(out.fields),
            json!({"name": "raw", "future_field": {"kept": 1}, "model": "custom"})
        );
    }

    #[test]
    fn raw_input_must_be_an_object() {
        let err = parse(Params::<Widget>::raw(json!([1, 2])), &RequestOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Construction);
    }

    #[test]
    fn options_pass_through_unchanged() {
        let options = RequestOptions::new().with_idempotency_key("k1");
        let out = parse(
            Params::<Widget>::raw(json!({"name": "x"})),
            &options,
        )
        .unwrap();
        assert_eq!(out.options, options);
    }
}
