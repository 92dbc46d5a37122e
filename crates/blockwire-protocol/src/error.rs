//! Error types for the protocol layer.
//!
//! Every variant here means the same thing to a caller: the bytes on the
//! wire could not be turned into the value that was asked for (or, for
//! [`ProtocolError::IllegalArgument`], a value could not be put on the
//! wire). Transport problems live in `blockwire-transport`.

/// Errors that can occur while encoding commands or decoding responses.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The response bytes are not valid UTF-8.
    #[error("response is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A positional payload had the wrong number of fields.
    ///
    /// Player and entity payloads are decoded strictly, so this usually
    /// means client and server disagree about the protocol version.
    #[error("malformed {model} payload: expected {expected} fields, got {got}")]
    FieldCount {
        model: &'static str,
        expected: usize,
        got: usize,
    },

    /// A single field could not be parsed into its type.
    #[error("invalid value for {field}: {value:?}")]
    InvalidField {
        field: &'static str,
        value: String,
    },

    /// A record did not have the expected shape (e.g. a missing `:`).
    #[error("malformed {model} record: {record:?}")]
    Malformed {
        model: &'static str,
        record: String,
    },

    /// The server sent an entity type this library does not know.
    #[error("unknown entity type {0:?}")]
    UnknownEntity(String),

    /// A command argument contains the field separator or a newline and
    /// would corrupt the request line.
    #[error("argument contains a reserved character: {0:?}")]
    IllegalArgument(String),
}

/// Parses one positional field, naming it in the error on failure.
pub(crate) fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    raw: &str,
) -> Result<T, ProtocolError> {
    raw.parse().map_err(|_| ProtocolError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

/// Parses a wire boolean (`true` / `false`, any case).
pub(crate) fn parse_bool(
    field: &'static str,
    raw: &str,
) -> Result<bool, ProtocolError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ProtocolError::InvalidField {
            field,
            value: raw.to_string(),
        })
    }
}
