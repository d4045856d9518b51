//! Assertions over the parts of a URL, for use in tests.
//!
//! Every check exists in two forms: `check_url_*` returns a
//! [`UrlAssertError`] and `assert_url_*` panics with it. The `*_msg`
//! variants prefix the panic with a caller-supplied message.
//!
//! ```
//! use nanotests_core::asserts::*;
//!
//! let url = "http://test.com/search?q=rust+lang";
//! assert_url_protocol(Some("http"), url);
//! assert_url_domain("test.com", url);
//! assert_url_resource(Some("/search"), url);
//! assert_url_param(Some("rust lang"), url, "q");
//! assert_url_has_param(url, "q");
//! ```

mod check;
mod error;

pub use check::{
    check_url_domain, check_url_has_param, check_url_param, check_url_protocol,
    check_url_resource,
};
pub use error::{UrlAssertError, UrlPart};

#[track_caller]
fn enforce(message: Option<&str>, result: Result<(), UrlAssertError>) {
    match (result, message) {
        (Ok(()), _) => {}
        (Err(e), Some(message)) => panic!("{}: {}", message, e),
        (Err(e), None) => panic!("{}", e),
    }
}

/// Panics unless the URL's protocol equals `expected` (`None` = schemeless).
#[track_caller]
pub fn assert_url_protocol(expected: Option<&str>, url: &str) {
    enforce(None, check_url_protocol(expected, url));
}

#[track_caller]
pub fn assert_url_protocol_msg(message: &str, expected: Option<&str>, url: &str) {
    enforce(Some(message), check_url_protocol(expected, url));
}

/// Panics unless the URL's domain equals `expected`.
#[track_caller]
pub fn assert_url_domain(expected: &str, url: &str) {
    enforce(None, check_url_domain(expected, url));
}

#[track_caller]
pub fn assert_url_domain_msg(message: &str, expected: &str, url: &str) {
    enforce(Some(message), check_url_domain(expected, url));
}

/// Panics unless the URL's resource equals `expected` (`None` = domain only).
#[track_caller]
pub fn assert_url_resource(expected: Option<&str>, url: &str) {
    enforce(None, check_url_resource(expected, url));
}

#[track_caller]
pub fn assert_url_resource_msg(message: &str, expected: Option<&str>, url: &str) {
    enforce(Some(message), check_url_resource(expected, url));
}

/// Panics unless the decoded param `name` equals `expected` (`None` = absent).
#[track_caller]
pub fn assert_url_param(expected: Option<&str>, url: &str, name: &str) {
    enforce(None, check_url_param(expected, url, name));
}

#[track_caller]
pub fn assert_url_param_msg(message: &str, expected: Option<&str>, url: &str, name: &str) {
    enforce(Some(message), check_url_param(expected, url, name));
}

#[track_caller]
pub fn assert_url_has_param(url: &str, name: &str) {
    enforce(None, check_url_has_param(url, name));
}

#[track_caller]
pub fn assert_url_has_param_msg(message: &str, url: &str, name: &str) {
    enforce(Some(message), check_url_has_param(url, name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_asserts_do_not_panic() {
        let url = "https://test.com:8443/testpage?a=1&b=two+words";
        assert_url_protocol(Some("https"), url);
        assert_url_domain("test.com:8443", url);
        assert_url_resource(Some("/testpage"), url);
        assert_url_param(Some("two words"), url, "b");
        assert_url_param(None, url, "c");
        assert_url_has_param(url, "a");
    }

    #[test]
    #[should_panic(expected = "domain mismatch in http://test.com/: expected \"other.com\"")]
    fn failing_domain_panics() {
        assert_url_domain("other.com", "http://test.com/");
    }

    #[test]
    #[should_panic(expected = "login redirect: http://test.com/p has no param \"token\"")]
    fn message_is_prefixed() {
        assert_url_has_param_msg("login redirect", "http://test.com/p", "token");
    }

    #[test]
    #[should_panic(expected = "Failed to decode URL")]
    fn decode_failure_panics() {
        assert_url_param(Some("x"), "http://test.com/p?name=%ZZ", "name");
    }

    #[test]
    #[should_panic(expected = "protocol mismatch")]
    fn protocol_msg_variant_panics() {
        assert_url_protocol_msg("scheme", Some("http"), "test.com");
    }
}
