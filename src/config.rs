use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::DEFAULT_PRICE_CEILING;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub listings: ListingSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }

/// Where listings come from; the bundled fixture when `path` is unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingSettings {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: u32,
    #[serde(default = "default_price_step")]
    pub price_step: u32,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            price_ceiling: default_price_ceiling(),
            price_step: default_price_step(),
            featured_count: default_featured_count(),
        }
    }
}

fn default_price_ceiling() -> u32 { DEFAULT_PRICE_CEILING }
fn default_price_step() -> u32 { 10 }
fn default_featured_count() -> usize { 6 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STAYVIBE__)
    /// 5. `PORT`, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STAYVIBE__SEARCH__PRICE_CEILING -> search.price_ceiling
            .add_source(
                Environment::with_prefix("STAYVIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_port_override(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("STAYVIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Honour a bare `PORT` variable over everything else
fn apply_port_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("PORT").ok().and_then(|port| port.parse::<u16>().ok()) {
        Some(port) => Config::builder()
            .add_source(settings)
            .set_override("server.port", i64::from(port))?
            .build(),
        None => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_settings() {
        let search = SearchSettings::default();
        assert_eq!(search.price_ceiling, 500);
        assert_eq!(search.price_step, 10);
        assert_eq!(search.featured_count, 6);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder().build().unwrap().try_deserialize().unwrap();

        assert_eq!(settings.server.port, 3000);
        assert!(settings.listings.path.is_none());
        assert_eq!(settings.search.price_ceiling, 500);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("stayvibe_config_{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nport = 8081\n\n[search]\nprice_ceiling = 900\nfeatured_count = 3\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 8081);
        assert_eq!(settings.search.price_ceiling, 900);
        assert_eq!(settings.search.featured_count, 3);
        assert_eq!(settings.search.price_step, 10);
    }
}
