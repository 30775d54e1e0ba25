//! Field-extraction helpers shared by every `from_wire` implementation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::error::DecodeError;

/// The key/value map behind a wire object.
pub(crate) type WireObject = Map<String, Value>;

/// Borrow the underlying map, rejecting non-object wire values.
pub(crate) fn as_object(value: &Value) -> Result<&WireObject, DecodeError> {
    value.as_object().ok_or(DecodeError::NotAnObject)
}

fn require<'a>(obj: &'a WireObject, field: &'static str) -> Result<&'a Value, DecodeError> {
    obj.get(field).ok_or_else(|| {
        tracing::trace!(field, "wire object is missing a required field");
        DecodeError::MissingField(field)
    })
}

fn mismatch(field: &'static str, expected: &'static str) -> DecodeError {
    tracing::trace!(field, expected, "wire field has the wrong type");
    DecodeError::TypeMismatch { field, expected }
}

pub(crate) fn require_str<'a>(obj: &'a WireObject, field: &'static str) -> Result<&'a str, DecodeError> {
    require(obj, field)?
        .as_str()
        .ok_or_else(|| mismatch(field, "string"))
}

/// `as_i64` already refuses JSON numbers with a fractional part.
pub(crate) fn require_int(obj: &WireObject, field: &'static str) -> Result<i64, DecodeError> {
    require(obj, field)?
        .as_i64()
        .ok_or_else(|| mismatch(field, "integer"))
}

/// Absent and `null` both map to `None`; any other non-string value is
/// still a type mismatch.
pub(crate) fn opt_str(
    obj: &WireObject,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match value.as_str() {
            Some(s) => Ok(Some(s.to_owned())),
            None => Err(mismatch(field, "string")),
        },
    }
}

pub(crate) fn require_instant(
    obj: &WireObject,
    field: &'static str,
) -> Result<DateTime<Utc>, DecodeError> {
    let raw = require(obj, field)?
        .as_str()
        .ok_or_else(|| mismatch(field, "timestamp string"))?;
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| DecodeError::InvalidTimestamp { field, source })
}

/// ISO-8601 instant in UTC with a `Z` suffix; sub-second digits are emitted
/// only when nonzero.
pub(crate) fn instant_to_wire(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
