//! dgsbot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DgsbotError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Optional TOML knowledge base overriding the builtin DGS-Pay table.
    #[serde(default)]
    pub knowledge_path: Option<String>,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            knowledge_path: None,
            ui: UiConfig::default(),
        }
    }
}

impl BotConfig {
    /// Load config from the default path (~/.dgsbot/config.toml).
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DgsbotError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| DgsbotError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| DgsbotError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the dgsbot home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dgsbot")
    }
}

/// Chat front-end configuration.
///
/// The typing delay is purely presentational. It is applied by the chat loop
/// before printing a reply and never reaches the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "bool_true")]
    pub typing_delay: bool,
    #[serde(default = "default_delay_min")]
    pub typing_delay_min_ms: u64,
    #[serde(default = "default_delay_max")]
    pub typing_delay_max_ms: u64,
}

fn bool_true() -> bool {
    true
}
fn default_delay_min() -> u64 {
    500
}
fn default_delay_max() -> u64 {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            typing_delay: true,
            typing_delay_min_ms: default_delay_min(),
            typing_delay_max_ms: default_delay_max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert!(config.knowledge_path.is_none());
        assert!(config.ui.typing_delay);
        assert_eq!(config.ui.typing_delay_min_ms, 500);
        assert_eq!(config.ui.typing_delay_max_ms, 1000);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            knowledge_path = "~/.dgsbot/knowledge.toml"

            [ui]
            typing_delay = false
            typing_delay_min_ms = 100
        "#;

        let config: BotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.knowledge_path.as_deref(),
            Some("~/.dgsbot/knowledge.toml")
        );
        assert!(!config.ui.typing_delay);
        assert_eq!(config.ui.typing_delay_min_ms, 100);
        assert_eq!(config.ui.typing_delay_max_ms, 1000);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: BotConfig = toml::from_str("").unwrap();
        assert!(config.knowledge_path.is_none());
        assert_eq!(config.ui.typing_delay_max_ms, 1000);
    }

    #[test]
    fn test_home_dir() {
        let home = BotConfig::home_dir();
        assert!(home.to_string_lossy().contains("dgsbot"));
    }
}
