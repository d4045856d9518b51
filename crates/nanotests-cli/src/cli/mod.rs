//! CLI for the nanotests URL toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nanotests_core::config;

use commands::{run_check, run_parse, CheckArgs};

/// Top-level CLI for nanotests.
#[derive(Debug, Parser)]
#[command(name = "nanotests")]
#[command(about = "nanotests: split URLs into parts and assert on them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split URLs into protocol, domain, resource and decoded params.
    Parse {
        /// URLs to decompose.
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
        /// Print one JSON object per URL, whatever the configured output format.
        #[arg(long)]
        json: bool,
    },

    /// Check parts of a URL against expected values; exits non-zero on any mismatch.
    Check(CheckArgs),
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { urls, json } => run_parse(&cfg, &urls, json)?,
            CliCommand::Check(args) => run_check(&args)?,
        }

        Ok(())
    }
}
