//! Configuration loader - optional YAML overrides for the viewer
//!
//! Everything has a built-in default; the file only needs the keys it
//! wants to change.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::catalog::Complexity;
use crate::view::{ViewMode, ViewState, DEFAULT_MAX_N};

/// Viewer configuration loaded from growth_explorer.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial input-size range endpoint (clamped into [1, 100]).
    #[serde(default = "default_max_n")]
    pub default_max_n: u32,
    /// Initial view mode: "growth", "comparison", or "mathematical".
    #[serde(default = "default_view")]
    pub default_view: String,
    /// Per-class visibility overrides keyed by catalog key
    /// ("constant", "logarithmic", ...). Unknown keys are ignored.
    #[serde(default)]
    pub visible: HashMap<String, bool>,
}

fn default_max_n() -> u32 {
    DEFAULT_MAX_N
}

fn default_view() -> String {
    "growth".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_max_n: default_max_n(),
            default_view: default_view(),
            visible: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Build the initial view state: defaults merged with overrides.
    pub fn initial_view_state(&self) -> ViewState {
        let mut state = ViewState::default();

        state.max_n = self.default_max_n;
        state.clamp();

        match ViewMode::from_key(&self.default_view) {
            Some(mode) => state.mode = mode,
            None => {
                tracing::warn!(
                    "Unknown view mode '{}' in config, using growth",
                    self.default_view
                );
            }
        }

        for (key, &visible) in &self.visible {
            match Complexity::from_key(key) {
                Ok(class) => state.set_visible(class, visible),
                Err(_) => tracing::warn!("Ignoring unknown complexity key '{}' in config", key),
            }
        }

        state
    }

    /// Visible classes implied by this config, in catalog order.
    pub fn visible_classes(&self) -> Vec<Complexity> {
        self.initial_view_state().visible_classes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_state() {
        let state = Config::default().initial_view_state();
        assert_eq!(state.max_n, DEFAULT_MAX_N);
        assert_eq!(state.mode, ViewMode::Growth);
        assert_eq!(state.visible_classes().len(), 5);
    }

    #[test]
    fn test_overrides_applied() {
        let yaml = "default_max_n: 250\ndefault_view: comparison\nvisible:\n  exponential: true\n  warp_drive: true\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let state = config.initial_view_state();

        assert_eq!(state.max_n, 100); // clamped
        assert_eq!(state.mode, ViewMode::Comparison);
        assert!(state.visibility[&Complexity::Exponential]);
    }

    #[test]
    fn test_unknown_view_falls_back() {
        let config = Config {
            default_view: "hologram".to_string(),
            ..Default::default()
        };
        assert_eq!(config.initial_view_state().mode, ViewMode::Growth);
    }
}
