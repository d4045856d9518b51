//! Failure type shared by the URL checks.

use std::fmt;

use thiserror::Error;

use crate::url_model::DecodeError;

/// The part of a URL a check looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPart {
    Protocol,
    Domain,
    Resource,
    Param(String),
}

impl fmt::Display for UrlPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlPart::Protocol => write!(f, "protocol"),
            UrlPart::Domain => write!(f, "domain"),
            UrlPart::Resource => write!(f, "resource"),
            UrlPart::Param(name) => write!(f, "param {:?}", name),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlAssertError {
    #[error("Failed to decode URL: {url}")]
    Decode {
        url: String,
        #[source]
        source: DecodeError,
    },

    #[error("{part} mismatch in {url}: expected {}, got {}", show(.expected), show(.actual))]
    Mismatch {
        part: UrlPart,
        url: String,
        expected: Option<String>,
        actual: Option<String>,
    },

    #[error("{url} has no param {name:?}")]
    MissingParam { url: String, name: String },
}

fn show(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "<absent>".to_string(),
    }
}
