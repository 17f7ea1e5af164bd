//! Bridging the value tree into serde and `serde_json`.
//!
//! QlJson has no writer of its own; callers that need to hand a parsed tree
//! to the rest of the world go through JSON. Non-finite floats have no JSON
//! representation and become `null`.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

use crate::types::{Map, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(_) => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            out.serialize_entry(key, value)?;
        }
        out.end()
    }
}

impl Value {
    /// Convert into a `serde_json::Value`, keeping object key order.
    ///
    /// ```
    /// use qljson::{parse, ParseContext};
    ///
    /// let value = parse("{name:\"Alice\", tags:[1, 2.5]}", &ParseContext::default()).unwrap();
    /// assert_eq!(
    ///     value.to_json(),
    ///     serde_json::json!({"name": "Alice", "tags": [1, 2.5]})
    /// );
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::Number((*n).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_matches_to_json() {
        let mut map = Map::new();
        map.insert("z".into(), Value::Integer(1));
        map.insert("a".into(), Value::Array(vec![Value::Null, Value::Bool(true)]));
        let value = Value::Object(map);

        let via_serde = serde_json::to_string(&value).unwrap();
        assert_eq!(via_serde, r#"{"z":1,"a":[null,true]}"#);
        assert_eq!(serde_json::to_string(&value.to_json()).unwrap(), via_serde);
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert_eq!(Value::Float(f64::NAN).to_json(), json!(null));
        assert_eq!(serde_json::to_string(&Value::Float(f64::INFINITY)).unwrap(), "null");
    }
}
