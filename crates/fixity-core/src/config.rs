use crate::checksum::DigestAlgorithm;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/fixity/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixityConfig {
    /// Maximum store checks in flight at once during an audit.
    pub max_concurrent_checks: usize,
    /// Default digest algorithm for the `digest` command (sha256 if unset).
    #[serde(default)]
    pub default_algorithm: Option<DigestAlgorithm>,
}

impl Default for FixityConfig {
    fn default() -> Self {
        Self {
            max_concurrent_checks: 4,
            default_algorithm: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fixity")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FixityConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FixityConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FixityConfig = toml::from_str(&data)?;
    Ok(cfg)
}
