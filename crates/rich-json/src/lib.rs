//! Tagged JSON codec for rich runtime values.
//!
//! JSON natively expresses six shapes: string, number, boolean, null, array
//! and object. This crate carries a richer value model — an
//! absence-of-value marker, timestamps, byte sequences, unique-element
//! sets, maps with arbitrary-typed keys, and nested records — across plain
//! JSON by wrapping every node in a `{"type": <tag>, "value": <payload>}`
//! envelope, and recovers the original tree with exact round-trip fidelity.
//!
//! ```
//! use rich_json::{decode, encode, Value};
//!
//! let value = Value::map(vec![
//!     (Value::Str("one".into()), Value::Int(1)),
//!     (Value::Str("two".into()), Value::Int(2)),
//! ]);
//! let wire = encode(&value).unwrap();
//! assert_eq!(decode(&wire).unwrap(), value);
//! ```
//!
//! Both operations are pure, synchronous and allocation-fresh; they can be
//! called from any thread without coordination. Known wire irregularity:
//! an empty record encodes as `{"type":"object","value":{}}`, reusing the
//! `object` tag that a null reference also carries — the payloads differ,
//! so the two never confuse, but the tagging is asymmetric with non-empty
//! records. This is preserved for wire compatibility.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod tags;
pub mod value;

pub use decoder::{decode, decode_from_json};
pub use encoder::{encode, encode_to_json};
pub use error::{DecodeError, EncodeError};
pub use value::Value;

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_is_nonempty() {
        assert!(!super::version().is_empty());
    }
}
