use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "interview.toml";

/// Defaults read from `interview.toml`. Command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Candidate fixture, relative to the config file
    pub candidates: Option<PathBuf>,

    /// Engineer fixture, relative to the config file
    pub engineers: Option<PathBuf>,

    /// Interview length in minutes (15, 30 or 60)
    pub duration: Option<u32>,

    /// Engineer filter: an engineer id, "__all__", or "" for none
    pub engineer: Option<String>,
}

impl Config {
    /// Load the explicit config file, or `interview.toml` if it exists, or nothing.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::read(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.candidates = config.candidates.map(|p| base.join(p));
        config.engineers = config.engineers.map(|p| base.join(p));

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
