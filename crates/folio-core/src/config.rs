//! Configuration: YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::profile::SiteProfile;
use crate::responder::{MatchMode, Responder};
use crate::script::Script;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP port for folio-web
    #[serde(default = "default_port")]
    pub port: u16,

    /// Simulated typing pause before a reply is shown (milliseconds)
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// "substring" | "word_start"
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Live sessions kept by the web server before the oldest is evicted
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Reply texts
    #[serde(default)]
    pub script: Script,

    /// Portfolio content served at /api/profile
    #[serde(default)]
    pub profile: SiteProfile,
}

fn default_port() -> u16 {
    8000
}
fn default_typing_delay_ms() -> u64 {
    1000
}
fn default_max_sessions() -> usize {
    1000
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        config.apply_overrides(|var| std::env::var(var).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Load config from the default location (project_root/config.yaml)
    pub fn load_from_dir(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join("config.yaml");
        Self::load(&config_path)
    }

    /// Apply `PORT`, `FOLIO_TYPING_DELAY_MS` and `FOLIO_MATCH_MODE`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("Invalid PORT: {}", port))?;
        }
        if let Some(delay) = lookup("FOLIO_TYPING_DELAY_MS") {
            self.typing_delay_ms = delay
                .parse()
                .with_context(|| format!("Invalid FOLIO_TYPING_DELAY_MS: {}", delay))?;
        }
        if let Some(mode) = lookup("FOLIO_MATCH_MODE") {
            self.match_mode = mode.parse().map_err(anyhow::Error::msg)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.script.validate().context("Invalid script in config.yaml")?;
        if self.max_sessions == 0 {
            anyhow::bail!("max_sessions must be at least 1");
        }
        Ok(())
    }

    pub fn responder(&self) -> Result<Responder> {
        Responder::new(self.script.clone(), self.match_mode).context("Invalid script")
    }

    pub fn typing_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.typing_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            typing_delay_ms: default_typing_delay_ms(),
            match_mode: MatchMode::default(),
            max_sessions: default_max_sessions(),
            script: Script::default(),
            profile: SiteProfile::default(),
        }
    }
}
