//! User configuration persistence
//!
//! Stores placement defaults in `~/.config/flyout/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::geometry::Size;

/// Placement defaults that persist across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyoutConfig {
    /// Direction tried first for new panels; unknown names mean `down`
    #[serde(default, deserialize_with = "lenient_direction")]
    pub direction: Direction,
    /// Viewport assumed when no container is given on the command line
    #[serde(default = "default_viewport")]
    pub viewport: Size,
}

fn lenient_direction<'de, D>(deserializer: D) -> Result<Direction, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(Direction::parse_lenient(&name))
}

fn default_viewport() -> Size {
    Size::new(1280.0, 720.0)
}

impl Default for FlyoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            viewport: default_viewport(),
        }
    }
}

impl FlyoutConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No home directory for flyout config, using built-in defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML
    pub fn parse(yaml: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        if !(config.viewport.width >= 0.0 && config.viewport.height >= 0.0) {
            return Err(format!(
                "viewport must be non-negative, got {}x{}",
                config.viewport.width, config.viewport.height
            ));
        }
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "Cannot save placement defaults: no home directory".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = FlyoutConfig::parse("direction: up-left\n").unwrap();
        assert_eq!(config.direction, Direction::UpLeft);
        assert_eq!(config.viewport, Size::new(1280.0, 720.0));
    }

    #[test]
    fn test_negative_viewport_rejected() {
        let err = FlyoutConfig::parse("viewport: { width: -1, height: 10 }\n").unwrap_err();
        assert!(err.contains("non-negative"));
    }

    #[test]
    fn test_unknown_direction_falls_back_to_down() {
        let config = FlyoutConfig::parse("direction: sideways\n").unwrap();
        assert_eq!(config.direction, Direction::Down);
    }
}
