//! CLI command handlers, one per file.

mod check;
mod parse;

pub use check::{run_check, CheckArgs};
pub use parse::run_parse;
