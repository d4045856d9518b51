//! `nanotests parse <url>...` – print the parts of each URL.

use anyhow::{Context, Result};
use nanotests_core::config::{NanotestsConfig, OutputFormat};
use nanotests_core::{parse, ParsedUrl};

pub fn run_parse(cfg: &NanotestsConfig, urls: &[String], json: bool) -> Result<()> {
    let format = if json { OutputFormat::Json } else { cfg.output };

    for (i, url) in urls.iter().enumerate() {
        let parsed = parse(url).with_context(|| format!("Failed to decode URL: {url}"))?;
        tracing::debug!("parsed {} with {} params", url, parsed.param_count());

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&parsed)?),
            OutputFormat::Text => {
                if i > 0 {
                    println!();
                }
                print!("{}", render_text(url, &parsed, cfg.sort_params));
            }
        }
    }
    Ok(())
}

/// Aligned `field value` lines; absent parts print as `-`.
fn render_text(url: &str, parsed: &ParsedUrl, sort_params: bool) -> String {
    let params = if sort_params {
        parsed.sorted_params()
    } else {
        parsed.params().collect()
    };

    let mut out = String::new();
    out.push_str(&format!("{:<10} {}\n", "url", url));
    out.push_str(&format!("{:<10} {}\n", "protocol", parsed.protocol().unwrap_or("-")));
    out.push_str(&format!("{:<10} {}\n", "domain", parsed.domain()));
    out.push_str(&format!("{:<10} {}\n", "resource", parsed.resource().unwrap_or("-")));
    for (name, value) in params {
        out.push_str(&format!("{:<10} {}={}\n", "param", name, value));
    }
    out
}
