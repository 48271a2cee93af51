use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::har::MimeMatch;
use crate::pipeline::{ExtractOptions, DEFAULT_INDENT};

/// Global configuration loaded from `~/.config/harjson/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarJsonConfig {
    /// MIME filter: "exact" (default) or "contains".
    #[serde(default)]
    pub mime_match: MimeMatch,
    /// Spaces per indent level in output files; 0 = compact.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Log to `~/.local/state/harjson/harjson.log` instead of stderr.
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for HarJsonConfig {
    fn default() -> Self {
        Self {
            mime_match: MimeMatch::default(),
            indent: DEFAULT_INDENT,
            log_to_file: false,
        }
    }
}

impl HarJsonConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            mime: self.mime_match,
            indent: self.indent,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harjson")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarJsonConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarJsonConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarJsonConfig = toml::from_str(&data)?;
    Ok(cfg)
}
