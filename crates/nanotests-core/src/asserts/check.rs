//! Non-panicking URL checks. Each one parses the URL afresh.

use crate::url_model::{self, ParsedUrl};

use super::error::{UrlAssertError, UrlPart};

fn parse(url: &str) -> Result<ParsedUrl, UrlAssertError> {
    url_model::parse(url).map_err(|source| UrlAssertError::Decode {
        url: url.to_string(),
        source,
    })
}

fn compare(
    part: UrlPart,
    url: &str,
    expected: Option<&str>,
    actual: Option<&str>,
) -> Result<(), UrlAssertError> {
    if expected == actual {
        return Ok(());
    }
    tracing::debug!("{} check failed for {}", part, url);
    Err(UrlAssertError::Mismatch {
        part,
        url: url.to_string(),
        expected: expected.map(str::to_string),
        actual: actual.map(str::to_string),
    })
}

/// Checks the text before `://`. `None` expects a schemeless URL.
pub fn check_url_protocol(expected: Option<&str>, url: &str) -> Result<(), UrlAssertError> {
    let parsed = parse(url)?;
    compare(UrlPart::Protocol, url, expected, parsed.protocol())
}

pub fn check_url_domain(expected: &str, url: &str) -> Result<(), UrlAssertError> {
    let parsed = parse(url)?;
    compare(UrlPart::Domain, url, Some(expected), Some(parsed.domain()))
}

/// Checks the path part. `None` expects a domain-only URL.
pub fn check_url_resource(expected: Option<&str>, url: &str) -> Result<(), UrlAssertError> {
    let parsed = parse(url)?;
    compare(UrlPart::Resource, url, expected, parsed.resource())
}

/// Checks a decoded parameter value. `None` expects the parameter to be absent.
pub fn check_url_param(
    expected: Option<&str>,
    url: &str,
    name: &str,
) -> Result<(), UrlAssertError> {
    let parsed = parse(url)?;
    compare(
        UrlPart::Param(name.to_string()),
        url,
        expected,
        parsed.param(name),
    )
}

pub fn check_url_has_param(url: &str, name: &str) -> Result<(), UrlAssertError> {
    let parsed = parse(url)?;
    if parsed.has_param(name) {
        Ok(())
    } else {
        Err(UrlAssertError::MissingParam {
            url: url.to_string(),
            name: name.to_string(),
        })
    }
}
