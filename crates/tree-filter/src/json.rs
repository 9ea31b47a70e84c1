//! Bridge between value trees and `serde_json`.
//!
//! JSON documents convert into plain value trees without loss (object key
//! order is preserved). The way back only accepts plain data: dual-view and
//! lazy nodes must be filtered away first, and opaque objects must offer a
//! [`PlainData`](crate::value::PlainData) representation.
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::PlainDataError;
use crate::value::{Scalar, Value};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::NULL,
            JsonValue::Bool(b) => Value::from(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    n.as_f64().map_or(Value::NULL, Value::from)
                }
            }
            JsonValue::String(s) => Value::from(s),
            JsonValue::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = PlainDataError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, item) in map {
                    out.insert(key.clone(), JsonValue::try_from(item)?);
                }
                Ok(JsonValue::Object(out))
            }
            Value::Sequence(items) => {
                items.iter().map(JsonValue::try_from).collect::<Result<_, _>>().map(JsonValue::Array)
            }
            Value::Scalar(scalar) => scalar_to_json(scalar),
            Value::DualView { .. } => Err(PlainDataError::UnfilteredDualView),
            Value::Lazy(_) => Err(PlainDataError::UnfilteredLazy),
        }
    }
}

impl TryFrom<Value> for JsonValue {
    type Error = PlainDataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        JsonValue::try_from(&value)
    }
}

fn scalar_to_json(scalar: &Scalar) -> Result<JsonValue, PlainDataError> {
    Ok(match scalar {
        Scalar::Null => JsonValue::Null,
        Scalar::Bool(b) => JsonValue::Bool(*b),
        Scalar::Integer(i) => JsonValue::Number((*i).into()),
        Scalar::Unsigned(u) => JsonValue::Number((*u).into()),
        Scalar::Number(n) => {
            JsonValue::Number(Number::from_f64(*n).ok_or(PlainDataError::NonFiniteNumber(*n))?)
        }
        Scalar::String(s) => JsonValue::String(s.clone()),
        // Single conversion step, as in the engine.
        Scalar::Object(object) => match object.to_plain_data() {
            None | Some(Value::Scalar(Scalar::Object(_))) => {
                return Err(PlainDataError::Opaque(format!("{object:?}")));
            }
            Some(plain) => JsonValue::try_from(&plain)?,
        },
    })
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        JsonValue::try_from(self).map_err(S::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Value::from)
    }
}
