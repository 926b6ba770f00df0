//! [`Value`] — the closed set of runtime values the codec can represent.

use chrono::{DateTime, TimeZone, Utc};

/// A runtime value the codec knows how to encode and decode.
///
/// The set is closed: both the encoder and the decoder match on it
/// exhaustively, so growing the model is a compile-time-visible change at
/// every dispatch site.
///
/// `Set`, `Map` and `Object` are Vec-backed and insertion-ordered. `Set`
/// uniqueness is enforced at construction through [`Value::set`]; the
/// encoder trusts the container's contents and does not deduplicate.
/// `Map` keys may be any encodable value, not only strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value. Distinct from `Null` on the wire.
    Undefined,
    /// Null reference.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer that fits in an `i64`.
    Int(i64),
    /// Floating-point number. Must be finite to encode.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Timestamp. The wire carries millisecond precision, UTC.
    Date(DateTime<Utc>),
    /// Raw byte sequence.
    Bytes(Vec<u8>),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Insertion-ordered collection of unique elements.
    Set(Vec<Value>),
    /// Insertion-ordered key-value pairs with arbitrary-typed keys.
    Map(Vec<(Value, Value)>),
    /// String-keyed record, fields in enumeration order.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Builds a `Set` from `items`, collapsing later duplicates.
    ///
    /// This is the container's uniqueness rule; the decoder routes every
    /// `set` payload through here.
    pub fn set<I: IntoIterator<Item = Value>>(items: I) -> Value {
        let mut out: Vec<Value> = Vec::new();
        for item in items {
            if !out.contains(&item) {
                out.push(item);
            }
        }
        Value::Set(out)
    }

    /// Builds a `Map` from key-value pairs, preserving insertion order.
    pub fn map<I: IntoIterator<Item = (Value, Value)>>(entries: I) -> Value {
        Value::Map(entries.into_iter().collect())
    }

    /// Builds an `Object` from string-keyed fields, preserving order.
    pub fn object<K, I>(fields: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a `Date` from milliseconds since the Unix epoch.
    ///
    /// Returns `None` when `ms` is outside chrono's representable range.
    pub fn date_ms(ms: i64) -> Option<Value> {
        Utc.timestamp_millis_opt(ms).single().map(Value::Date)
    }

    /// The variant name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Date(_) => "date",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Date(dt)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
