//! URL decomposition and assertion helpers for tests.
//!
//! [`url_model::parse`] splits a URL into protocol, domain, resource and
//! decoded query params; [`asserts`] builds test assertions on top of it.

pub mod asserts;
pub mod config;
pub mod logging;
pub mod url_model;

pub use url_model::{parse, DecodeError, ParamPart, ParsedUrl};
