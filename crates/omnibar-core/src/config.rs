//! Configuration loaded from `~/.config/omnibar/config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Extension id of the bundled PDF viewer.
const DEFAULT_PDF_VIEWER_EXTENSION_ID: &str = "jdbefljfgobbmcidnmpjamcbhnbphjnb";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmnibarConfig {
    /// Extension id used to build and recognize
    /// `chrome-extension://<id>/...` PDF viewer wrapper URLs.
    #[serde(default = "default_pdf_viewer_extension_id")]
    pub pdf_viewer_extension_id: String,
}

fn default_pdf_viewer_extension_id() -> String {
    DEFAULT_PDF_VIEWER_EXTENSION_ID.to_string()
}

impl Default for OmnibarConfig {
    fn default() -> Self {
        Self {
            pdf_viewer_extension_id: default_pdf_viewer_extension_id(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("omnibar")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OmnibarConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OmnibarConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OmnibarConfig = toml::from_str(&data)?;
    Ok(cfg)
}
