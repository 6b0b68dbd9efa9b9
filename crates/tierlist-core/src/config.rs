use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_SHARE_BASE_URL: &str = "https://tierlist.local/";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the durable state record.
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
    /// Prefix that share links are built on; the encoded state becomes its fragment.
    #[serde(default)]
    pub share_base_url: Option<String>,
    /// Refresh the share fragment after every committed change.
    #[serde(default)]
    pub auto_sync_url: bool,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/tierlist/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("tierlist/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("tierlist\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads a config file, falling back to defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_store_dir(&self) -> PathBuf {
        self.store_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|data| data.join("tierlist")))
            .unwrap_or_else(|| PathBuf::from(".tierlist"))
    }

    pub fn effective_share_base_url(&self) -> &str {
        self.share_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SHARE_BASE_URL)
    }
}
