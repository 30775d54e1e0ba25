/// Error returned when a wire object cannot be decoded into an entity.
///
/// There is no partial decode and no recovery at this layer: the first
/// offending field aborts the conversion and the error propagates unchanged
/// to the caller, which decides whether to reject the request, log, or
/// retry higher up.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The wire value is not a JSON object at all.
    #[error("wire value is not a JSON object")]
    NotAnObject,

    /// A required key is absent. Only optional fields tolerate a missing
    /// key; a required key that is present but `null` is a type mismatch.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A value does not have the JSON type the field expects. Integers must
    /// arrive as JSON numbers without a fractional part.
    #[error("field `{field}` is not a {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// A timestamp string failed RFC 3339 parsing.
    #[error("field `{field}` is not a valid timestamp: {source}")]
    InvalidTimestamp {
        field: &'static str,
        source: chrono::ParseError,
    },
}
