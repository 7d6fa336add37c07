//! Three-state slot for optional-nullable wire fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that can be absent, explicitly null, or set.
///
/// Use with `#[serde(default, skip_serializing_if = "Field::is_absent")]` so an
/// absent field is omitted from the wire while `Null` is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Field::Value(v),
            None => Field::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::Field;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Slot {
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        connection_id: Field<String>,
    }

    #[test]
    fn absent_null_and_value_serialize_differently() {
        let absent = Slot {
            connection_id: Field::Absent,
        };
        let null = Slot {
            connection_id: Field::Null,
        };
        let set = Slot {
            connection_id: "123".to_string().into(),
        };
        assert_eq!(serde_json::to_value(&absent).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(&null).unwrap(),
            json!({"connection_id": null})
        );
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({"connection_id": "123"})
        );
    }

    #[test]
    fn deserializes_all_three_states() {
        let absent: Slot = serde_json::from_value(json!({})).unwrap();
        let null: Slot = serde_json::from_value(json!({"connection_id": null})).unwrap();
        let set: Slot = serde_json::from_value(json!({"connection_id": "abc"})).unwrap();
        assert!(absent.connection_id.is_absent());
        assert!(null.connection_id.is_null());
        assert_eq!(set.connection_id.value().map(String::as_str), Some("abc"));
    }
}
