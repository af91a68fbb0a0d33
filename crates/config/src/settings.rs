//! Process settings
//!
//! Layering: built-in defaults, then an optional `config/server.toml`, then
//! `PROPBOT_*` environment variables (e.g. `PROPBOT_SERVER__PORT=4000`).

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ConfigError;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Paths to the three catalog data sources, joined by id at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPaths {
    pub basics: String,
    pub characteristics: String,
    pub images: String,
}

/// Top-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogPaths,
    /// Optional YAML reply table overriding the compiled-in defaults
    pub replies_path: Option<String>,
}

impl Settings {
    /// Load settings from defaults, an optional file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/server.toml")
    }

    /// Load with an explicit config file path; the file may be absent.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 4000)?
            .set_default("catalog.basics", "data/property_basics.json")?
            .set_default("catalog.characteristics", "data/property_characteristics.json")?
            .set_default("catalog.images", "data/property_images.json")?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("PROPBOT").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let settings = Settings::load_from("does/not/exist.toml").unwrap();
        assert_eq!(settings.server.port, 4000);
        assert_eq!(settings.catalog.basics, "data/property_basics.json");
        assert!(settings.replies_path.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "[server]\nport = 9999\n").unwrap();

        let settings = Settings::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.server.port, 9999);
        assert_eq!(settings.server.host, "0.0.0.0");
    }
}
