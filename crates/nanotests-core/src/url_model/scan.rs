//! Positional scan that splits a URL into protocol, domain, resource and params.

use std::collections::HashMap;

use super::decode::decode_component;
use super::error::{DecodeError, ParamPart};
use super::ParsedUrl;

const SCHEME_SEPARATOR: &str = "://";

/// Splits `url` into its parts in one left-to-right pass.
///
/// A missing delimiter ends the scan and leaves the later parts unset; only
/// the percent-decoding of parameter names and values can fail.
pub fn parse(url: &str) -> Result<ParsedUrl, DecodeError> {
    let (protocol, cursor) = match url.find(SCHEME_SEPARATOR) {
        Some(i) => (Some(&url[..i]), i + SCHEME_SEPARATOR.len()),
        None => (None, 0),
    };

    let Some(slash) = find_from(url, cursor, '/') else {
        return Ok(ParsedUrl::new(protocol, &url[cursor..], None, HashMap::new()));
    };
    let domain = &url[cursor..slash];

    // The slash belongs to the resource.
    let Some(question) = find_from(url, slash, '?') else {
        return Ok(ParsedUrl::new(
            protocol,
            domain,
            Some(&url[slash..]),
            HashMap::new(),
        ));
    };
    let resource = &url[slash..question];

    let params = parse_params(url, question + 1).map_err(|e| {
        tracing::debug!("failed to decode query of {}: {}", url, e);
        e
    })?;

    Ok(ParsedUrl::new(protocol, domain, Some(resource), params))
}

/// Reads `name=value` pairs separated by `&`, starting at `cursor`.
///
/// Everything up to the next `=` is the name, `&` included, and a trailing
/// segment with no `=` is dropped. Later duplicates overwrite earlier ones.
fn parse_params(url: &str, mut cursor: usize) -> Result<HashMap<String, String>, DecodeError> {
    let mut params = HashMap::new();

    while let Some(eq) = find_from(url, cursor, '=') {
        let name = decode_component(&url[cursor..eq], ParamPart::Name)?;
        cursor = eq + 1;

        let end = find_from(url, cursor, '&').unwrap_or(url.len());
        let value = decode_component(&url[cursor..end], ParamPart::Value)?;
        params.insert(name, value);

        if end >= url.len() {
            break;
        }
        cursor = end + 1;
    }

    Ok(params)
}

/// Absolute index of the first `needle` at or after `from`.
fn find_from(haystack: &str, from: usize, needle: char) -> Option<usize> {
    haystack[from..].find(needle).map(|p| from + p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_only() {
        let u = parse("test.com").unwrap();
        assert_eq!(u.protocol(), None);
        assert_eq!(u.domain(), "test.com");
        assert_eq!(u.resource(), None);
        assert_eq!(u.param_count(), 0);
    }

    #[test]
    fn domain_only_with_protocol() {
        let u = parse("https://test.com:8080").unwrap();
        assert_eq!(u.protocol(), Some("https"));
        assert_eq!(u.domain(), "test.com:8080");
        assert_eq!(u.resource(), None);
    }

    #[test]
    fn schemeless_with_resource() {
        let u = parse("test.com/a/b").unwrap();
        assert_eq!(u.protocol(), None);
        assert_eq!(u.domain(), "test.com");
        assert_eq!(u.resource(), Some("/a/b"));
    }

    #[test]
    fn resource_without_query() {
        let u = parse("http://test.com/page").unwrap();
        assert_eq!(u.protocol(), Some("http"));
        assert_eq!(u.domain(), "test.com");
        assert_eq!(u.resource(), Some("/page"));
        assert_eq!(u.param_count(), 0);
    }

    #[test]
    fn root_resource() {
        let u = parse("http://test.com/").unwrap();
        assert_eq!(u.resource(), Some("/"));
    }

    #[test]
    fn empty_query() {
        let u = parse("http://test.com/page?").unwrap();
        assert_eq!(u.resource(), Some("/page"));
        assert_eq!(u.param_count(), 0);
    }

    #[test]
    fn question_mark_before_slash_stays_in_domain() {
        let u = parse("http://test.com?a=1").unwrap();
        assert_eq!(u.domain(), "test.com?a=1");
        assert_eq!(u.resource(), None);
        assert!(!u.has_param("a"));
    }

    #[test]
    fn two_params() {
        let u = parse("http://test.com/page?a=1&b=2").unwrap();
        assert_eq!(u.param("a"), Some("1"));
        assert_eq!(u.param("b"), Some("2"));
        assert_eq!(u.param_count(), 2);
    }

    #[test]
    fn last_duplicate_wins() {
        let u = parse("http://test.com/p?a=1&a=2").unwrap();
        assert_eq!(u.param("a"), Some("2"));
        assert_eq!(u.param_count(), 1);
    }

    #[test]
    fn trailing_bare_segment_dropped() {
        let u = parse("http://test.com/p?a=1&bare").unwrap();
        assert_eq!(u.param("a"), Some("1"));
        assert!(!u.has_param("bare"));
        assert_eq!(u.param_count(), 1);
    }

    #[test]
    fn trailing_ampersand() {
        let u = parse("http://test.com/p?a=1&").unwrap();
        assert_eq!(u.param("a"), Some("1"));
        assert_eq!(u.param_count(), 1);
    }

    #[test]
    fn bare_segment_before_pair_joins_the_name() {
        let u = parse("http://test.com/p?bare&a=1").unwrap();
        assert_eq!(u.param("bare&a"), Some("1"));
        assert!(!u.has_param("a"));
    }

    #[test]
    fn empty_name_and_value() {
        let u = parse("http://test.com/p?=x&y=").unwrap();
        assert_eq!(u.param(""), Some("x"));
        assert_eq!(u.param("y"), Some(""));
    }

    #[test]
    fn value_keeps_extra_equals() {
        let u = parse("http://test.com/p?expr=a=b").unwrap();
        assert_eq!(u.param("expr"), Some("a=b"));
    }

    #[test]
    fn decodes_names_and_values() {
        let u = parse("http://test.com/p?full%20name=John%20Doe&q=a+b").unwrap();
        assert_eq!(u.param("full name"), Some("John Doe"));
        assert_eq!(u.param("q"), Some("a b"));
    }

    #[test]
    fn resource_is_not_decoded() {
        let u = parse("http://test.com/a%20b?x=1").unwrap();
        assert_eq!(u.resource(), Some("/a%20b"));
    }

    #[test]
    fn bad_value_escape_fails() {
        let err = parse("http://test.com/p?name=%ZZ").unwrap_err();
        assert_eq!(err.part(), ParamPart::Value);
        assert_eq!(err.raw(), "%ZZ");
    }

    #[test]
    fn bad_name_escape_fails() {
        let err = parse("http://test.com/p?%G1=ok").unwrap_err();
        assert_eq!(err.part(), ParamPart::Name);
        assert_eq!(err.raw(), "%G1");
    }

    #[test]
    fn bad_escape_in_dropped_tail_is_ignored() {
        let u = parse("http://test.com/p?a=1&%ZZ").unwrap();
        assert_eq!(u.param("a"), Some("1"));
    }

    #[test]
    fn first_scheme_separator_wins() {
        let u = parse("http://test.com/redirect?to=https://other.org/x").unwrap();
        assert_eq!(u.protocol(), Some("http"));
        assert_eq!(u.domain(), "test.com");
        assert_eq!(u.resource(), Some("/redirect"));
        assert_eq!(u.param("to"), Some("https://other.org/x"));
    }

    #[test]
    fn empty_input() {
        let u = parse("").unwrap();
        assert_eq!(u.protocol(), None);
        assert_eq!(u.domain(), "");
        assert_eq!(u.resource(), None);
    }

    #[test]
    fn non_ascii_input() {
        let u = parse("http://bücher.de/straße?ort=München").unwrap();
        assert_eq!(u.domain(), "bücher.de");
        assert_eq!(u.resource(), Some("/straße"));
        assert_eq!(u.param("ort"), Some("München"));
    }
}
