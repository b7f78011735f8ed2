use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub vim_mode: bool,
    /// Override for the persisted-token location
    #[serde(default)]
    pub token_path: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_page_size() -> u32 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            vim_mode: false,
            token_path: None,
        }
    }
}

impl Config {
    /// Platform config file location: `<config dir>/admintui/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("admintui").join("config.yaml"))
    }

    /// Load from an explicit path or the platform default. A missing default
    /// file yields built-in defaults; an unreadable or malformed file errors.
    pub fn load(explicit: Option<&str>) -> Result<Config> {
        let path = match explicit {
            Some(path) => PathBuf::from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Config::default()),
            },
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Resolved token path: config override or the platform default
    pub fn token_path(&self) -> PathBuf {
        match &self.token_path {
            Some(path) => PathBuf::from(path),
            None => dirs::config_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("admintui")
                .join("token"),
        }
    }
}
