//! Encoder — [`Value`] tree to tagged JSON wire text.
//!
//! The whole wire tree is built as a single `serde_json::Value` and rendered
//! to text exactly once at the top level. Every wire node is
//! `{"type": <tag>, "value": <payload>}`, except `undefined` which carries
//! no payload field.

use chrono::SecondsFormat;
use serde_json::{Map as JsonMap, Value as Json};

use crate::error::EncodeError;
use crate::tags::{
    FIELD_KEY, FIELD_TYPE, FIELD_VALUE, MAX_DEPTH, TAG_ARRAY, TAG_BOOLEAN, TAG_BUFFER, TAG_DATE,
    TAG_MAP, TAG_NUMBER, TAG_OBJECT, TAG_SET, TAG_STRING, TAG_UNDEFINED,
};
use crate::value::Value;

/// Encodes a value tree to wire text.
///
/// Total over the value model, failing only on non-finite floats and trees
/// nesting deeper than [`MAX_DEPTH`]. The input is never mutated.
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    Ok(encode_to_json(value)?.to_string())
}

/// Encodes a value tree to its wire tree without rendering text.
pub fn encode_to_json(value: &Value) -> Result<Json, EncodeError> {
    write_any(value, 0)
}

/// `depth` is the number of wire JSON levels consumed by ancestors; this
/// node spends up to two more (envelope plus payload container).
fn write_any(value: &Value, depth: usize) -> Result<Json, EncodeError> {
    if depth + 2 > MAX_DEPTH {
        return Err(EncodeError::DepthLimit);
    }
    Ok(match value {
        Value::Undefined => tag_only(TAG_UNDEFINED),
        // Null shares the `object` tag with records; the payload disambiguates.
        Value::Null => tagged(TAG_OBJECT, Json::Null),
        Value::Bool(b) => tagged(TAG_BOOLEAN, Json::Bool(*b)),
        Value::Int(i) => tagged(TAG_NUMBER, Json::from(*i)),
        Value::Float(f) => {
            let n = serde_json::Number::from_f64(*f).ok_or(EncodeError::NonFiniteNumber(*f))?;
            tagged(TAG_NUMBER, Json::Number(n))
        }
        Value::Str(s) => tagged(TAG_STRING, Json::String(s.clone())),
        Value::Date(dt) => tagged(
            TAG_DATE,
            Json::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ),
        Value::Bytes(bytes) => tagged(
            TAG_BUFFER,
            Json::Array(bytes.iter().map(|b| Json::from(*b)).collect()),
        ),
        Value::Array(items) => tagged(TAG_ARRAY, write_items(items, depth)?),
        Value::Set(items) => tagged(TAG_SET, write_items(items, depth)?),
        Value::Map(entries) => {
            // Entry objects add a third wire level between payload and nodes.
            let mut nodes = Vec::with_capacity(entries.len());
            for (key, val) in entries {
                let mut entry = JsonMap::new();
                entry.insert(FIELD_KEY.to_string(), write_any(key, depth + 3)?);
                entry.insert(FIELD_VALUE.to_string(), write_any(val, depth + 3)?);
                nodes.push(Json::Object(entry));
            }
            tagged(TAG_MAP, Json::Array(nodes))
        }
        Value::Object(fields) => {
            // An empty record still encodes as `{"type":"object","value":{}}`:
            // same tag as null, distinct payload. Kept for wire compatibility.
            let mut payload = JsonMap::new();
            for (key, val) in fields {
                payload.insert(key.clone(), write_any(val, depth + 2)?);
            }
            tagged(TAG_OBJECT, Json::Object(payload))
        }
    })
}

fn write_items(items: &[Value], depth: usize) -> Result<Json, EncodeError> {
    let mut nodes = Vec::with_capacity(items.len());
    for item in items {
        nodes.push(write_any(item, depth + 2)?);
    }
    Ok(Json::Array(nodes))
}

fn tagged(tag: &str, payload: Json) -> Json {
    let mut node = JsonMap::new();
    node.insert(FIELD_TYPE.to_string(), Json::String(tag.to_string()));
    node.insert(FIELD_VALUE.to_string(), payload);
    Json::Object(node)
}

fn tag_only(tag: &str) -> Json {
    let mut node = JsonMap::new();
    node.insert(FIELD_TYPE.to_string(), Json::String(tag.to_string()));
    Json::Object(node)
}
