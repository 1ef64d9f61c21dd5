use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Global configuration loaded from `~/.config/pagegrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagegrabConfig {
    /// User-Agent header sent with every GET.
    pub user_agent: String,
    /// Maximum number of redirects libcurl will follow per request.
    pub max_redirects: u32,
    /// Optional connect timeout in seconds (None = libcurl default). There is
    /// deliberately no overall transfer timeout: a batch is only stopped by
    /// an external signal.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for PagegrabConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("pagegrab/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
            connect_timeout_secs: None,
        }
    }
}

impl PagegrabConfig {
    /// Per-request options handed to each worker.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            user_agent: self.user_agent.clone(),
            max_redirects: self.max_redirects,
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PagegrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PagegrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PagegrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
