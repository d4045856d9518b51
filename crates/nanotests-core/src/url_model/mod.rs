//! URL decomposition.
//!
//! Splits a URL string into protocol, domain, resource and decoded query
//! parameters. The scan is positional and lenient: a missing delimiter is a
//! valid shape, not an error. Only percent-decoding of parameters can fail.
//!
//! Fragments are not recognised; a `#...` suffix stays part of whatever
//! segment it lands in.

mod decode;
mod error;
mod scan;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use error::{DecodeError, ParamPart};
pub use scan::parse;

/// A URL split into its parts. Built once by [`parse`], read-only afterwards.
///
/// # Examples
///
/// - `"test.com"` → no protocol, domain `test.com`, no resource, no params
/// - `"http://test.com/page?a=1&b=2"` → `http`, `test.com`, `/page`, `{a: 1, b: 2}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    protocol: Option<String>,
    domain: String,
    resource: Option<String>,
    params: HashMap<String, String>,
}

impl ParsedUrl {
    fn new(
        protocol: Option<&str>,
        domain: &str,
        resource: Option<&str>,
        params: HashMap<String, String>,
    ) -> Self {
        Self {
            protocol: protocol.map(str::to_string),
            domain: domain.to_string(),
            resource: resource.map(str::to_string),
            params,
        }
    }

    /// Text before the first `://`, if the URL has one.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Host and optional port.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Path from the first `/` after the domain, excluding the query string.
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Decoded value of the named parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Decoded `(name, value)` pairs in no particular order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Decoded pairs sorted by name.
    pub fn sorted_params(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.params().collect();
        pairs.sort_unstable();
        pairs
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

/// Re-serializes the URL with params sorted by name and form-encoded.
/// Parsing the output yields an equal value.
impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(protocol) = &self.protocol {
            write!(f, "{}://", protocol)?;
        }
        f.write_str(&self.domain)?;
        let Some(resource) = &self.resource else {
            return Ok(());
        };
        f.write_str(resource)?;

        for (i, (name, value)) in self.sorted_params().into_iter().enumerate() {
            f.write_str(if i == 0 { "?" } else { "&" })?;
            for chunk in url::form_urlencoded::byte_serialize(name.as_bytes()) {
                f.write_str(chunk)?;
            }
            f.write_str("=")?;
            for chunk in url::form_urlencoded::byte_serialize(value.as_bytes()) {
                f.write_str(chunk)?;
            }
        }
        Ok(())
    }
}

impl FromStr for ParsedUrl {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
