use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// A stored dashboard location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocation {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Session settings owned by the CLI: where to look and how often to
/// refresh in watch mode. The core only ever sees the plain numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default coordinates used when `show` is called without `--lat/--lon`.
    pub location: Option<SavedLocation>,

    /// Minutes between refreshes in watch mode.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_minutes: u32,
}

fn default_refresh_interval() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self { location: None, refresh_interval_minutes: default_refresh_interval() }
    }
}

impl Config {
    /// The saved location, or an actionable error when none is stored.
    pub fn location(&self) -> Result<&SavedLocation> {
        self.location.as_ref().ok_or_else(|| {
            anyhow!(
                "No location configured.\n\
                 Hint: run `thoitiet configure`, or pass --lat and --lon explicitly."
            )
        })
    }

    pub fn set_location(&mut self, location: SavedLocation) {
        self.location = Some(location);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "thoitiet", "thoitiet-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.location().unwrap_err();

        assert!(err.to_string().contains("No location configured"));
        assert!(err.to_string().contains("Hint: run `thoitiet configure`"));
    }

    #[test]
    fn set_location_round_trips() {
        let mut cfg = Config::default();
        cfg.set_location(SavedLocation {
            label: "Hà Nội".to_string(),
            latitude: 21.0285,
            longitude: 105.8542,
        });

        let loc = cfg.location().expect("location must exist");
        assert_eq!(loc.label, "Hà Nội");
        assert!((loc.latitude - 21.0285).abs() < f64::EPSILON);
    }

    #[test]
    fn toml_round_trip_preserves_settings() {
        let mut cfg = Config::default();
        cfg.refresh_interval_minutes = 10;
        cfg.set_location(SavedLocation {
            label: "Đà Nẵng".to_string(),
            latitude: 16.0545,
            longitude: 108.2022,
        });

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&text).expect("parse");

        assert_eq!(parsed.refresh_interval_minutes, 10);
        assert_eq!(parsed.location().expect("location").label, "Đà Nẵng");
    }

    #[test]
    fn missing_interval_falls_back_to_default() {
        let parsed: Config = toml::from_str("").expect("parse empty config");
        assert_eq!(parsed.refresh_interval_minutes, 30);
        assert!(parsed.location.is_none());
    }
}
