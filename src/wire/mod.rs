//! The wire-object abstraction shared by every entity codec.
//!
//! A wire object is a JSON object (`serde_json::Value::Object`) with exact,
//! case-sensitive key names. Encoding builds one with `serde_json::json!`;
//! decoding walks the underlying map field by field and fails fast with
//! [`DecodeError`] on the first missing or mistyped field.

mod error;
pub(crate) mod field;

pub use error::DecodeError;
