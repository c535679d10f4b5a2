use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_street_address")]
    pub street_address: String,
    /// Outbound link to the third-party ordering service.
    #[serde(default = "default_order_url")]
    pub order_url: String,
    /// Outbound link to the third-party reservation service.
    #[serde(default = "default_reservation_url")]
    pub reservation_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            timezone: default_timezone(),
            contact_address: default_contact_address(),
            phone: default_phone(),
            street_address: default_street_address(),
            order_url: default_order_url(),
            reservation_url: default_reservation_url(),
        }
    }
}

fn default_site_name() -> String {
    "Zagros".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timezone() -> String {
    "Europe/Berlin".to_string()
}

fn default_contact_address() -> String {
    "hello@zagros.restaurant".to_string()
}

fn default_phone() -> String {
    "+49 30 1234567".to_string()
}

fn default_street_address() -> String {
    "Bergstraße 12, 10115 Berlin".to_string()
}

fn default_order_url() -> String {
    "https://order.example.com/zagros".to_string()
}

fn default_reservation_url() -> String {
    "https://reserve.example.com/zagros".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// Path to the catalog document. The embedded copy is used when the
    /// file does not exist (tests, containers without a data mount).
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default = "default_recommended_count")]
    pub recommended_count: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            recommended_count: default_recommended_count(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/menu.json".to_string()
}

fn default_recommended_count() -> usize {
    4
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ZAGROS__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ZAGROS")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.menu.recommended_count == 0 {
            return Err("menu.recommended_count must be at least 1".to_string());
        }
        if time_tz::timezones::get_by_name(&self.site.timezone).is_none() {
            return Err(format!("Unknown site.timezone: {}", self.site.timezone));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            site: SiteConfig::default(),
            menu: MenuConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = base_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_timezone() {
        let mut config = base_config();
        config.site.timezone = "Mars/Olympus".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_recommended() {
        let mut config = base_config();
        config.menu.recommended_count = 0;
        assert!(config.validate().is_err());
    }
}
