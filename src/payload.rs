//! A flat key-value object read from a response.

use crate::error::FieldError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An immutable JSON object.
///
/// Reads never coerce values on their own. Use [`Payload::field`] to deserialize a value into a
/// concrete type, or [`Payload::get`] to read the value as-is. Two payloads are equal when they
/// contain the same keys with the same values, regardless of the order the keys were received in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Gets the value for `key`.
    pub fn get(&self, key: &str) -> Result<&Value, FieldError> {
        self.0
            .get(key)
            .ok_or_else(|| FieldError::Missing(key.to_owned()))
    }

    /// Deserializes the value for `key` into `T`.
    pub fn field<T>(&self, key: &str) -> Result<T, FieldError>
    where
        T: DeserializeOwned,
    {
        let value = self.get(key)?;

        T::deserialize(value)
            .map_err(|error| FieldError::Invalid {
                field: key.to_owned(),
                error,
            })
    }

    /// Deserializes the value for `key` into `T`, falling back to `default` when the key is not
    /// present. A value which is present but cannot be deserialized is still an error.
    pub fn field_or<T>(&self, key: &str, default: T) -> Result<T, FieldError>
    where
        T: DeserializeOwned,
    {
        if self.contains_key(key) {
            self.field(key)
        } else {
            Ok(default)
        }
    }

    /// Checks whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Deserializes the whole payload into `T`.
    pub fn deserialize_into<T>(self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(Value::Object(self.0))
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Payload {
    type Error = FieldError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(FieldError::NotAnObject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        Payload::try_from(value).unwrap()
    }

    #[test]
    fn reads_values_unchanged() {
        let wrapped = payload(json!({ "a": 1, "b": "two", "c": [3] }));

        assert_eq!(wrapped.get("a").unwrap(), &json!(1));
        assert_eq!(wrapped.get("b").unwrap(), &json!("two"));
        assert_eq!(wrapped.get("c").unwrap(), &json!([3]));
        assert_eq!(wrapped.field::<u32>("a").unwrap(), 1);
    }

    #[test]
    fn missing_key_is_an_error() {
        let wrapped = payload(json!({ "a": 1 }));

        assert!(matches!(wrapped.get("z"), Err(FieldError::Missing(key)) if key == "z"));
        assert!(wrapped.field::<u32>("z").is_err());
    }

    #[test]
    fn field_or_falls_back_only_when_absent() {
        let wrapped = payload(json!({ "a": "not a number" }));

        assert_eq!(wrapped.field_or("b", 7u32).unwrap(), 7);
        assert!(matches!(
            wrapped.field_or("a", 7u32),
            Err(FieldError::Invalid { field, .. }) if field == "a"
        ));
    }

    #[test]
    fn equality_ignores_key_order() {
        let first: Payload = serde_json::from_str(r#"{"a":1,"b":2,"c":3}"#).unwrap();
        let second: Payload = serde_json::from_str(r#"{"c":3,"a":1,"b":2}"#).unwrap();
        let third: Payload = serde_json::from_str(r#"{"a":1,"b":2,"c":4}"#).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn checks_containment() {
        let wrapped = payload(json!({ "a": null }));

        assert!(wrapped.contains_key("a"));
        assert!(!wrapped.contains_key("b"));
    }

    #[test]
    fn rejects_non_objects() {
        assert!(matches!(Payload::try_from(json!([1, 2])), Err(FieldError::NotAnObject)));
    }
}
