use crate::error::ExportError;
use crate::result::ExportResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Skip personal collections and everything nested under them.
    #[serde(default)]
    pub exclude_personal_collections: bool,
    /// Restrict the export to this collection and its subtree.
    #[serde(default)]
    pub target_collection_id: Option<i64>,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

impl ExportConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/metabase-exporter/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("metabase-exporter/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("metabase-exporter\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = Self::from_toml_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> ExportResult<Self> {
        toml::from_str(content).map_err(|e| ExportError::Config(e.to_string()))
    }

    pub fn effective_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("metabase-state.json"))
    }
}
