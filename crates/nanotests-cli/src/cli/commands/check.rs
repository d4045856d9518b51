//! `nanotests check <url> [expectations]` – assert parts of a URL.

use anyhow::{bail, Context, Result};
use clap::Args;
use nanotests_core::asserts::{
    check_url_domain, check_url_has_param, check_url_param, check_url_protocol,
    check_url_resource, UrlAssertError,
};
use nanotests_core::parse;

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// URL under test.
    pub url: String,

    /// Expected protocol (text before `://`).
    #[arg(long, conflicts_with = "no_protocol")]
    pub protocol: Option<String>,
    /// Expect the URL to have no protocol.
    #[arg(long)]
    pub no_protocol: bool,

    /// Expected domain (host and optional port).
    #[arg(long)]
    pub domain: Option<String>,

    /// Expected resource path, without the query string.
    #[arg(long, conflicts_with = "no_resource")]
    pub resource: Option<String>,
    /// Expect a domain-only URL.
    #[arg(long)]
    pub no_resource: bool,

    /// Expected decoded param value (repeatable).
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param_arg)]
    pub params: Vec<(String, String)>,

    /// Param that must be present, with any value (repeatable).
    #[arg(long = "has-param", value_name = "NAME")]
    pub has_params: Vec<String>,
}

/// Splits `NAME=VALUE` at the first `=`.
fn parse_param_arg(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {s:?}"))
}

impl CheckArgs {
    fn expected_protocol(&self) -> Option<Option<&str>> {
        if self.no_protocol {
            Some(None)
        } else {
            self.protocol.as_deref().map(Some)
        }
    }

    fn expected_resource(&self) -> Option<Option<&str>> {
        if self.no_resource {
            Some(None)
        } else {
            self.resource.as_deref().map(Some)
        }
    }

    /// Runs every requested check and returns the failures.
    fn evaluate(&self) -> (usize, Vec<UrlAssertError>) {
        let url = self.url.as_str();
        let mut results = Vec::new();

        if let Some(expected) = self.expected_protocol() {
            results.push(check_url_protocol(expected, url));
        }
        if let Some(expected) = &self.domain {
            results.push(check_url_domain(expected, url));
        }
        if let Some(expected) = self.expected_resource() {
            results.push(check_url_resource(expected, url));
        }
        for (name, value) in &self.params {
            results.push(check_url_param(Some(value.as_str()), url, name));
        }
        for name in &self.has_params {
            results.push(check_url_has_param(url, name));
        }

        let total = results.len();
        let failures = results.into_iter().filter_map(Result::err).collect();
        (total, failures)
    }
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    // Surface a decode error once instead of once per check.
    parse(&args.url).with_context(|| format!("Failed to decode URL: {}", args.url))?;

    let (total, failures) = args.evaluate();
    for failure in &failures {
        println!("FAIL {}", failure);
    }
    if !failures.is_empty() {
        tracing::info!("{} of {} checks failed for {}", failures.len(), total, args.url);
        bail!("{} of {} checks failed", failures.len(), total);
    }

    println!("ok: {} checks passed", total);
    Ok(())
}
