use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Top-level configuration for the TratonAI assistant.
///
/// Loaded from `~/.traton/config.toml` by default. Every section falls back
/// to its defaults when missing from the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TratonConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl TratonConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TratonConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Conversation session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Simulated "thinking" delay before an assistant reply lands, in milliseconds.
    pub thinking_delay_ms: u64,
    /// Seed new sessions with the assistant welcome message.
    pub show_welcome: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 1500,
            show_welcome: true,
        }
    }
}

impl ChatConfig {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TratonError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = TratonConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.thinking_delay_ms, 1500);
        assert!(config.chat.show_welcome);
        assert_eq!(config.chat.thinking_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[chat]
thinking_delay_ms = 250
show_welcome = false
"#;
        let file = create_temp_config(content);
        let config = TratonConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.chat.thinking_delay_ms, 250);
        assert!(!config.chat.show_welcome);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[chat]
thinking_delay_ms = 10
"#;
        let file = create_temp_config(content);
        let config = TratonConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.thinking_delay_ms, 10);
        assert!(config.chat.show_welcome);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let file = create_temp_config("");
        let config = TratonConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.thinking_delay_ms, 1500);
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let file = create_temp_config("[chat\nthinking_delay_ms = ");
        let err = TratonConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, TratonError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = TratonConfig::load(Path::new("/nonexistent/traton/config.toml")).unwrap_err();
        assert!(matches!(err, TratonError::Io(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = TratonConfig::default();
        config.general.log_level = "trace".to_string();
        config.chat.thinking_delay_ms = 42;
        config.save(&path).unwrap();

        let reloaded = TratonConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.log_level, "trace");
        assert_eq!(reloaded.chat.thinking_delay_ms, 42);
        assert!(reloaded.chat.show_welcome);
    }
}
