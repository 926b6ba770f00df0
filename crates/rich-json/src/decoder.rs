//! Decoder — tagged JSON wire text back to a [`Value`] tree.
//!
//! The text is parsed into a generic `serde_json::Value` tree once, then
//! every tagged node is reinterpreted recursively. Decoding either fully
//! succeeds or fails with a [`DecodeError`]; there are no partial results.

use chrono::{DateTime, Utc};
use serde_json::{Map as JsonMap, Value as Json};

use crate::error::DecodeError;
use crate::tags::{
    FIELD_KEY, FIELD_TYPE, FIELD_VALUE, MAX_DEPTH, TAG_ARRAY, TAG_BOOLEAN, TAG_BUFFER, TAG_DATE,
    TAG_MAP, TAG_NUMBER, TAG_OBJECT, TAG_SET, TAG_STRING, TAG_UNDEFINED,
};
use crate::value::Value;

/// Decodes wire text into a fresh value tree.
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    let wire: Json = serde_json::from_str(text)?;
    decode_from_json(&wire)
}

/// Decodes an already-parsed wire tree.
pub fn decode_from_json(wire: &Json) -> Result<Value, DecodeError> {
    read_any(wire, 0)
}

/// `depth` counts wire JSON levels, mirroring the encoder's guard so the
/// two sides accept exactly the same trees.
fn read_any(node: &Json, depth: usize) -> Result<Value, DecodeError> {
    if depth + 2 > MAX_DEPTH {
        return Err(DecodeError::DepthLimit);
    }
    let obj = node.as_object().ok_or(DecodeError::NotAnObject)?;
    let tag = obj
        .get(FIELD_TYPE)
        .and_then(Json::as_str)
        .ok_or(DecodeError::MissingTag)?;
    match tag {
        // A `value` field, if present, is ignored.
        TAG_UNDEFINED => Ok(Value::Undefined),
        TAG_STRING => match payload(obj, TAG_STRING)? {
            Json::String(s) => Ok(Value::Str(s.clone())),
            _ => Err(mismatch(TAG_STRING, "a string")),
        },
        TAG_NUMBER => match payload(obj, TAG_NUMBER)? {
            Json::Number(n) => Ok(number_value(n)),
            _ => Err(mismatch(TAG_NUMBER, "a number")),
        },
        TAG_BOOLEAN => match payload(obj, TAG_BOOLEAN)? {
            Json::Bool(b) => Ok(Value::Bool(*b)),
            _ => Err(mismatch(TAG_BOOLEAN, "a boolean")),
        },
        TAG_DATE => match payload(obj, TAG_DATE)? {
            Json::String(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| Value::Date(dt.with_timezone(&Utc)))
                .map_err(|_| DecodeError::InvalidDate(s.clone())),
            _ => Err(mismatch(TAG_DATE, "an ISO-8601 string")),
        },
        TAG_BUFFER => match payload(obj, TAG_BUFFER)? {
            Json::Array(entries) => {
                let mut bytes = Vec::with_capacity(entries.len());
                for entry in entries {
                    let byte = entry
                        .as_u64()
                        .filter(|b| *b <= u8::MAX as u64)
                        .ok_or_else(|| DecodeError::InvalidByte(entry.clone()))?;
                    bytes.push(byte as u8);
                }
                Ok(Value::Bytes(bytes))
            }
            _ => Err(mismatch(TAG_BUFFER, "an array of bytes")),
        },
        TAG_ARRAY => match payload(obj, TAG_ARRAY)? {
            Json::Array(items) => Ok(Value::Array(read_items(items, depth)?)),
            _ => Err(mismatch(TAG_ARRAY, "an array of wire nodes")),
        },
        TAG_SET => match payload(obj, TAG_SET)? {
            // Later duplicates collapse per the container's uniqueness rule.
            Json::Array(items) => Ok(Value::set(read_items(items, depth)?)),
            _ => Err(mismatch(TAG_SET, "an array of wire nodes")),
        },
        TAG_MAP => match payload(obj, TAG_MAP)? {
            Json::Array(entries) => {
                let mut pairs = Vec::with_capacity(entries.len());
                for entry in entries {
                    let entry = entry
                        .as_object()
                        .ok_or_else(|| mismatch(TAG_MAP, "entries with key and value fields"))?;
                    let key = entry
                        .get(FIELD_KEY)
                        .ok_or_else(|| mismatch(TAG_MAP, "entries with key and value fields"))?;
                    let val = entry
                        .get(FIELD_VALUE)
                        .ok_or_else(|| mismatch(TAG_MAP, "entries with key and value fields"))?;
                    pairs.push((read_any(key, depth + 3)?, read_any(val, depth + 3)?));
                }
                Ok(Value::Map(pairs))
            }
            _ => Err(mismatch(TAG_MAP, "an array of key-value entries")),
        },
        TAG_OBJECT => match payload(obj, TAG_OBJECT)? {
            Json::Null => Ok(Value::Null),
            Json::Object(fields) => {
                let mut out = Vec::with_capacity(fields.len());
                for (key, node) in fields {
                    out.push((key.clone(), read_any(node, depth + 2)?));
                }
                Ok(Value::Object(out))
            }
            _ => Err(mismatch(TAG_OBJECT, "null or an object")),
        },
        other => Err(DecodeError::UnknownTag(other.to_string())),
    }
}

fn read_items(items: &[Json], depth: usize) -> Result<Vec<Value>, DecodeError> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(read_any(item, depth + 2)?);
    }
    Ok(out)
}

fn payload<'a>(obj: &'a JsonMap<String, Json>, tag: &'static str) -> Result<&'a Json, DecodeError> {
    obj.get(FIELD_VALUE).ok_or(DecodeError::MissingValue(tag))
}

fn mismatch(tag: &'static str, expected: &'static str) -> DecodeError {
    DecodeError::PayloadMismatch { tag, expected }
}

/// A JSON number becomes `Int` when it is an exact `i64`, else `Float`.
fn number_value(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else {
        Value::Float(n.as_f64().unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_ignores_a_stray_payload() {
        assert_eq!(
            decode(r#"{"type":"undefined","value":42}"#).unwrap(),
            Value::Undefined
        );
    }

    #[test]
    fn undefined_and_null_stay_distinct() {
        let undefined = decode(r#"{"type":"undefined"}"#).unwrap();
        let null = decode(r#"{"type":"object","value":null}"#).unwrap();
        assert!(undefined.is_undefined());
        assert!(null.is_null());
        assert_ne!(undefined, null);
    }

    #[test]
    fn integers_and_floats_split_on_exactness() {
        assert_eq!(
            decode(r#"{"type":"number","value":1}"#).unwrap(),
            Value::Int(1)
        );
        assert_eq!(
            decode(r#"{"type":"number","value":1.5}"#).unwrap(),
            Value::Float(1.5)
        );
        assert_eq!(
            decode(r#"{"type":"number","value":1.0}"#).unwrap(),
            Value::Float(1.0)
        );
    }

    #[test]
    fn object_null_payload_is_a_null_reference() {
        assert_eq!(
            decode(r#"{"type":"object","value":null}"#).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn empty_object_payload_is_an_empty_record() {
        assert_eq!(
            decode(r#"{"type":"object","value":{}}"#).unwrap(),
            Value::Object(vec![])
        );
    }

    #[test]
    fn set_decode_collapses_duplicates_in_order() {
        let wire = r#"{"type":"set","value":[{"type":"number","value":2},{"type":"number","value":1},{"type":"number","value":2}]}"#;
        assert_eq!(
            decode(wire).unwrap(),
            Value::Set(vec![Value::Int(2), Value::Int(1)])
        );
    }

    #[test]
    fn over_deep_wire_trees_are_rejected() {
        use serde_json::json;
        // Built programmatically; the text path would already fail in the
        // JSON parser before reaching the tag dispatch.
        let mut node = json!({"type": "number", "value": 1});
        for _ in 0..100 {
            node = json!({"type": "array", "value": [node]});
        }
        assert!(matches!(
            decode_from_json(&node),
            Err(DecodeError::DepthLimit)
        ));
    }

    #[test]
    fn date_offset_input_normalizes_to_utc() {
        let v = decode(r#"{"type":"date","value":"2022-12-25T05:27:49.988+01:00"}"#).unwrap();
        assert_eq!(v, Value::date_ms(1_671_942_469_988).unwrap());
    }
}
