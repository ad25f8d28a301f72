//! Contains custom deserialization functions.

use serde::de::{self, Deserializer, Unexpected};

/// Deserializes a 0/1 flag, also accepting booleans and "0"/"1" strings.
pub fn into_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct DeserializeBoolVisitor;

    impl<'de> de::Visitor<'de> for DeserializeBoolVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("zero, one or a boolean")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Unsigned(other),
                    &"zero or one",
                )),
            }
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Signed(other),
                    &"zero or one",
                )),
            }
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                "0" => Ok(false),
                "1" => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"zero or one",
                )),
            }
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }
    }

    deserializer.deserialize_any(DeserializeBoolVisitor)
}

/// Deserializes an empty string as `None`.
pub fn empty_string_is_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = de::Deserialize::deserialize(deserializer)?;

    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserializes an ID where 0 means "not set".
pub fn zero_is_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id: Option<u64> = de::Deserialize::deserialize(deserializer)?;

    Ok(id.filter(|id| *id != 0))
}
