//! Wire tag and field-name constants shared by the encoder and decoder.

pub const TAG_STRING: &str = "string";
pub const TAG_NUMBER: &str = "number";
pub const TAG_BOOLEAN: &str = "boolean";
pub const TAG_UNDEFINED: &str = "undefined";
pub const TAG_OBJECT: &str = "object";
pub const TAG_DATE: &str = "date";
pub const TAG_ARRAY: &str = "array";
pub const TAG_SET: &str = "set";
pub const TAG_BUFFER: &str = "buffer";
pub const TAG_MAP: &str = "map";

/// Field carrying the tag on every wire node.
pub const FIELD_TYPE: &str = "type";
/// Field carrying the payload on every wire node except `undefined`.
pub const FIELD_VALUE: &str = "value";
/// Key field of a `map` payload entry.
pub const FIELD_KEY: &str = "key";

/// Maximum JSON nesting depth of the wire text, matching serde_json's
/// parse recursion limit.
///
/// The encode and decode guards count wire levels, not value levels: every
/// node spends up to two (envelope plus payload container), and map payload
/// entries spend a third for the pair object. Counting in wire levels keeps
/// the encoder from emitting text the parser would reject on the way back.
pub const MAX_DEPTH: usize = 128;
