use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Compiled-in prediction endpoint, used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the prediction service, e.g. "https://solar.example.com".
    pub server_url: Option<String>,

    /// Panel power rating (kW) applied when no flag is given; enables the
    /// energy production column.
    pub default_power_rating: Option<f64>,
}

impl Config {
    /// The effective server base URL.
    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn set_server_url(&mut self, url: String) {
        // A trailing slash would double up when joining "/predict".
        self.server_url = Some(url.trim_end_matches('/').to_string());
    }

    pub fn set_default_power_rating(&mut self, rating: f64) -> Result<()> {
        if !rating.is_finite() || rating < 0.0 {
            return Err(anyhow!("Power rating must be a non-negative number of kW."));
        }
        self.default_power_rating = Some(rating);
        Ok(())
    }

    pub fn clear_default_power_rating(&mut self) {
        self.default_power_rating = None;
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
        let dirs = ProjectDirs::from("dev", "solar-forecast", "solar-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
