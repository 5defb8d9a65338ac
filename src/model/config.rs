use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line under the task list
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default)]
    pub level: Option<String>,
    /// Log destination. The TUI only logs when this (or `--log-file`) is set.
    #[serde(default)]
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
        assert!(config.log.level.is_none());
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_full_config() {
        let text = r##"
[ui]
show_key_hints = false
colors = { highlight = "#112233" }

[log]
level = "debug"
file = "/tmp/todo.log"
"##;
        let config: Config = toml::from_str(text).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").map(String::as_str), Some("#112233"));
        assert_eq!(config.log.level.as_deref(), Some("debug"));
        assert_eq!(config.log.file.as_deref(), Some("/tmp/todo.log"));
    }
}
