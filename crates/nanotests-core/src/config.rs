use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How `nanotests parse` prints decomposed URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `field value` line per part.
    #[default]
    Text,
    /// One JSON object per URL.
    Json,
}

/// Global configuration loaded from `~/.config/nanotests/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NanotestsConfig {
    /// Output format when `--json` is not given.
    #[serde(default)]
    pub output: OutputFormat,
    /// Print params sorted by name in text output (otherwise map order).
    #[serde(default = "default_sort_params")]
    pub sort_params: bool,
}

fn default_sort_params() -> bool {
    true
}

impl Default for NanotestsConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            sort_params: default_sort_params(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nanotests")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NanotestsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NanotestsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<NanotestsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: NanotestsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
