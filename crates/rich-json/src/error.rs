//! Error types for wire encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding a value tree to wire text.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A float was NaN or infinite; JSON has no representation for these.
    #[error("number is not finite: {0}")]
    NonFiniteNumber(f64),
    /// The value tree nests deeper than [`crate::tags::MAX_DEPTH`].
    #[error("value tree exceeds maximum nesting depth")]
    DepthLimit,
}

/// Errors that can occur while decoding wire text back into a value tree.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not valid JSON at all.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// A wire node was not a JSON object.
    #[error("wire node is not an object")]
    NotAnObject,
    /// A wire node carried no string `type` tag.
    #[error("wire node has no \"type\" tag")]
    MissingTag,
    /// The `type` tag is not one of the recognized tags.
    #[error("unrecognized type tag: {0:?}")]
    UnknownTag(String),
    /// A tag other than `undefined` carried no `value` payload.
    #[error("missing \"value\" payload for tag {0:?}")]
    MissingValue(&'static str),
    /// The payload's JSON shape does not match its tag.
    #[error("payload does not match tag {tag:?}: expected {expected}")]
    PayloadMismatch {
        tag: &'static str,
        expected: &'static str,
    },
    /// A `buffer` payload entry was not an integer in `0..=255`.
    #[error("buffer entry is not a byte in 0..=255: {0}")]
    InvalidByte(serde_json::Value),
    /// A `date` payload string did not parse as ISO-8601.
    #[error("invalid date payload: {0:?}")]
    InvalidDate(String),
    /// The wire tree nests deeper than [`crate::tags::MAX_DEPTH`].
    #[error("wire tree exceeds maximum nesting depth")]
    DepthLimit,
}
