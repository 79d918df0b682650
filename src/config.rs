//! Configuration loader/writer plus strongly typed settings structures.
//!
//! Deserializes the single TOML config (ui settings, key bindings, theme
//! colors), resolves the per-user config directory with an env-var override,
//! and falls back to the embedded default when no file exists yet.

use crate::theme::SlideTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Embedded default configuration, written out on first save.
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub theme: SlideTheme,
}

/// General presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Deck to present when none is named on the command line
    #[serde(default = "default_deck")]
    pub default_deck: String,
    /// Input poll timeout in milliseconds
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

fn default_deck() -> String {
    "categorical".to_string()
}

fn default_poll_timeout_ms() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_deck: default_deck(),
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

/// Key combos per action, in the combo-string format of
/// `core::actions::key_event_to_string`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConfig {
    #[serde(default = "default_toggle_keys")]
    pub toggle: Vec<String>,
    #[serde(default = "default_prev_keys")]
    pub prev: Vec<String>,
    #[serde(default = "default_next_keys")]
    pub next: Vec<String>,
    #[serde(default = "default_exit_keys")]
    pub exit: Vec<String>,
}

fn default_toggle_keys() -> Vec<String> {
    vec!["space".to_string(), "enter".to_string()]
}

fn default_prev_keys() -> Vec<String> {
    vec!["left".to_string(), "up".to_string()]
}

fn default_next_keys() -> Vec<String> {
    vec!["right".to_string(), "down".to_string()]
}

fn default_exit_keys() -> Vec<String> {
    vec!["esc".to_string(), "q".to_string(), "ctrl+c".to_string()]
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            toggle: default_toggle_keys(),
            prev: default_prev_keys(),
            next: default_next_keys(),
            exit: default_exit_keys(),
        }
    }
}

impl Config {
    /// Per-user config directory: `$LECTERN_DIR` if set, else `~/.lectern`.
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("LECTERN_DIR") {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".lectern"))
    }

    fn default_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Load from an explicit path, or from the default location, or fall
    /// back to the embedded default when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = ?path, "No config file, using embedded defaults");
            return toml::from_str(DEFAULT_CONFIG).context("Embedded default config is invalid");
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        tracing::info!(path = ?path, "Loaded configuration");
        Ok(config)
    }

    /// Persist to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, toml_string)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        tracing::info!(path = ?path, "Saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.ui.default_deck, "categorical");
        assert!(config.keys.toggle.contains(&"space".to_string()));
        assert!(config.keys.exit.contains(&"esc".to_string()));
    }

    #[test]
    fn empty_config_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.poll_timeout_ms, 100);
        assert_eq!(config.keys.next, vec!["right", "down"]);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: Config = toml::from_str("[ui]\ndefault_deck = \"michael\"\n").unwrap();
        assert_eq!(config.ui.default_deck, "michael");
        assert_eq!(config.ui.poll_timeout_ms, 100);
        assert!(!config.keys.exit.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.ui.default_deck, config.ui.default_deck);
        assert_eq!(back.keys.toggle, config.keys.toggle);
        assert_eq!(back.theme.title, config.theme.title);
    }
}
