use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{core::state::PanelKind, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    /// Base URL of the backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Panel shown on startup, by its lowercase name.
    #[serde(default = "default_initial_panel")]
    pub initial_panel: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_initial_panel() -> String {
    "items".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            initial_panel: default_initial_panel(),
        }
    }
}

impl Config {
    /// Layer the embedded defaults under any user config file found in
    /// the config directory. A missing user config is fine; every
    /// setting has a default.
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap())?
            .set_default("_config_dir", config_dir.to_str().unwrap())?
            .set_default("base_url", default_config.base_url.clone())?
            .set_default(
                "request_timeout_secs",
                default_config.request_timeout_secs,
            )?
            .set_default("initial_panel", default_config.initial_panel.clone())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::warn!("No configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        while cfg.base_url.ends_with('/') {
            cfg.base_url.pop();
        }

        Ok(cfg)
    }

    /// Startup panel; an unknown name falls back to the items panel.
    pub fn initial_panel(&self) -> PanelKind {
        self.initial_panel
            .parse()
            .unwrap_or(PanelKind::Items)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let cfg: Config = json5::from_str(CONFIG).expect("embedded config should parse");
        assert_eq!(cfg.base_url, "http://localhost:8000");
        assert_eq!(cfg.initial_panel(), PanelKind::Items);
    }

    #[test]
    fn test_unknown_initial_panel_falls_back() {
        let cfg = Config {
            initial_panel: "dashboard".to_string(),
            ..Default::default()
        };
        assert_eq!(cfg.initial_panel(), PanelKind::Items);
    }

    #[test]
    fn test_known_initial_panel_parses() {
        let cfg = Config {
            initial_panel: "tables".to_string(),
            ..Default::default()
        };
        assert_eq!(cfg.initial_panel(), PanelKind::Tables);
    }
}
