//! Error type for query-parameter decoding.

use std::fmt;

use thiserror::Error;

/// Which side of a `name=value` pair failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamPart {
    Name,
    Value,
}

impl fmt::Display for ParamPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamPart::Name => write!(f, "name"),
            ParamPart::Value => write!(f, "value"),
        }
    }
}

/// The only way parsing a URL can fail: a parameter name or value that is not
/// valid percent-encoded UTF-8. Carries the raw substring for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// `%` not followed by two hex digits.
    #[error("malformed percent escape at byte {offset} in param {part} {raw:?}")]
    MalformedEscape {
        part: ParamPart,
        raw: String,
        offset: usize,
    },
    /// Escapes decoded to bytes that are not valid UTF-8.
    #[error("param {part} {raw:?} does not decode to valid UTF-8")]
    InvalidUtf8 { part: ParamPart, raw: String },
}

impl DecodeError {
    /// The raw (still encoded) substring that failed to decode.
    pub fn raw(&self) -> &str {
        match self {
            DecodeError::MalformedEscape { raw, .. } | DecodeError::InvalidUtf8 { raw, .. } => raw,
        }
    }

    pub fn part(&self) -> ParamPart {
        match self {
            DecodeError::MalformedEscape { part, .. } | DecodeError::InvalidUtf8 { part, .. } => {
                *part
            }
        }
    }
}
