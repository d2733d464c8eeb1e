use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const CONFIG_FILE_NAME: &str = ".bif.toml";

/// bif configuration (loaded from .bif.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BifConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the BIF server
    #[serde(default)]
    pub url: Option<String>,

    /// Fairwinds Insights OSS token
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "json", "yaml" or "table"
    #[serde(default)]
    pub format: Option<String>,

    /// "id", "severity" or "cvss"
    #[serde(default)]
    pub sort_by: Option<String>,

    /// "asc" or "desc"
    #[serde(default)]
    pub sort_order: Option<String>,

    /// Colorize table output
    #[serde(default)]
    pub color: Option<bool>,
}

impl BifConfig {
    /// Load the config at `explicit`, or the nearest .bif.toml above `start`,
    /// or ~/.bif.toml. Unreadable files are skipped with a warning.
    pub fn load(explicit: Option<&Path>, start: &Path) -> Option<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => find_config_file(start).or_else(home_config_file)?,
        };
        debug!("Found config: {}", config_path.display());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<BifConfig>(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", config_path.display(), e);
                    None
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Walk up from `start` to find .bif.toml
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(CONFIG_FILE_NAME);
        if config.is_file() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// ~/.bif.toml, if the user has one
fn home_config_file() -> Option<PathBuf> {
    config_in(&dirs::home_dir()?)
}

fn config_in(dir: &Path) -> Option<PathBuf> {
    let config = dir.join(CONFIG_FILE_NAME);
    config.is_file().then_some(config)
}

const DEFAULT_CONFIG: &str = r#"# bif - Base Image Finder configuration

[api]
# BIF server URL
# url = "https://bif-server-6biex2p5nq-uc.a.run.app"

# Fairwinds Insights OSS token (or set INSIGHTS_OSS_TOKEN)
# token = ""

[output]
# Output format: "json", "yaml" or "table"
format = "table"

# Table sort column: "id", "severity" or "cvss"
sort_by = "severity"

# Table sort order: "asc" or "desc"
sort_order = "desc"

# Colorize table rows by severity
color = true
"#;

/// Create a default .bif.toml in `dir`. Returns false if one already exists.
pub fn init_config(dir: &Path) -> Result<bool> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(false);
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    Ok(true)
}
