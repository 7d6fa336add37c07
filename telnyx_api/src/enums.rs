//! Open string enums: a closed set of known values plus a raw fallback.

/// Declares an enum whose wire form is a string.
///
/// Known strings map to their variants, anything else is kept in `Other`
/// so values added server-side still round-trip. Equality and hashing follow
/// the wire string, so `Other("SMS")` equals `Sms`.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client does not know about.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $wire => Self::$variant, )+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl TryFrom<&serde_json::Value> for $name {
            type Error = $crate::Error;

            fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
                value.as_str().map(Self::from).ok_or_else(|| {
                    $crate::Error::Construction(format!(
                        "{} expects a string, got {}",
                        stringify!($name),
                        value
                    ))
                })
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from(raw))
            }
        }
    };
}

pub(crate) use open_enum;

#[cfg(test)]
mod tests {
    use serde_json::json;

    open_enum! {
        enum Channel {
            Sms => "SMS",
            Mms => "MMS",
        }
    }

    #[test]
    fn variant_and_backing_string_serialize_identically() {
        let from_variant = serde_json::to_value(Channel::Mms).unwrap();
        let from_string = serde_json::to_value(Channel::from("MMS")).unwrap();
        assert_eq!(from_variant, from_string);
        assert_eq!(Channel::from("MMS"), Channel::Mms);
    }

    #[test]
    fn unknown_values_are_preserved() {
        let parsed: Channel = serde_json::from_value(json!("RCS")).unwrap();
        assert_eq!(parsed, Channel::Other("RCS".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!("RCS"));
    }

    #[test]
    fn equality_follows_the_wire_string() {
        use std::collections::HashSet;

        assert_eq!(Channel::Other("SMS".to_string()), Channel::Sms);
        assert_ne!(Channel::Other("sms".to_string()), Channel::Sms);

        let set: HashSet<Channel> = [Channel::Sms, Channel::Other("SMS".to_string())]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn non_string_values_are_rejected() {
        assert!(Channel::try_from(&json!(5)).is_err());
        assert_eq!(Channel::try_from(&json!("SMS")).unwrap(), Channel::Sms);
        assert!(serde_json::from_value::<Channel>(json!(true)).is_err());
    }
}
