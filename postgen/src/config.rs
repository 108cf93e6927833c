//! Configuration lookup for the generator.
//!
//! Three values are read: the application name (collection title), the port
//! the application listens on, and the output path. Keys are dotted
//! (`server.port`); [`EnvConfig`] maps them to environment variables
//! (`SERVER_PORT`).

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::warn;

pub const APP_NAME_KEY: &str = "app.name";
pub const PORT_KEY: &str = "server.port";
pub const OUTPUT_KEY: &str = "collection.output";

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_APP_NAME: &str = "postman-collection";
pub const DEFAULT_OUTPUT_PATH: &str = "postman_collection.json";

/// A source of configuration properties.
///
/// Blank values count as missing.
pub trait ConfigSource {
    fn property(&self, key: &str) -> Option<String>;

    /// The application name, used as the collection name.
    fn app_name(&self) -> String {
        non_blank(self.property(APP_NAME_KEY)).unwrap_or_else(|| {
            warn!(
                key = APP_NAME_KEY,
                "application name not configured, using {DEFAULT_APP_NAME}"
            );
            DEFAULT_APP_NAME.to_string()
        })
    }

    /// The port requests are addressed to (default 8080).
    fn port(&self) -> String {
        non_blank(self.property(PORT_KEY)).unwrap_or_else(|| DEFAULT_PORT.to_string())
    }

    /// Where the collection file is written.
    fn output_path(&self) -> PathBuf {
        non_blank(self.property(OUTPUT_KEY))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads properties from environment variables, after loading `.env`.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    _private: (),
}

impl EnvConfig {
    /// Loads `.env` from the current directory or its parents, if present,
    /// then reads from the process environment.
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!(error = %e, "failed to load .env file");
            }
        }
        Self::default()
    }

    /// Environment variable name for a dotted key: `server.port` → `SERVER_PORT`.
    pub fn env_key(key: &str) -> String {
        key.chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect()
    }
}

impl ConfigSource for EnvConfig {
    fn property(&self, key: &str) -> Option<String> {
        std::env::var(Self::env_key(key)).ok()
    }
}

/// In-memory properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ConfigSource for MapConfig {
    fn property(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Several sources consulted in order; the first non-blank value wins.
#[derive(Default)]
pub struct LayeredConfig {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lower-priority layer.
    pub fn layer(mut self, source: impl ConfigSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl ConfigSource for LayeredConfig {
    fn property(&self, key: &str) -> Option<String> {
        self.layers
            .iter()
            .find_map(|layer| non_blank(layer.property(key)))
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_port_defaults_to_8080() {
        assert_eq!(MapConfig::new().port(), "8080");
    }

    #[test]
    fn test_port_from_config() {
        let config = MapConfig::new().with(PORT_KEY, "9090");
        assert_eq!(config.port(), "9090");
    }

    #[test]
    fn test_blank_port_uses_default() {
        let config = MapConfig::new().with(PORT_KEY, "  ");
        assert_eq!(config.port(), "8080");
    }

    #[test]
    fn test_app_name_fallback() {
        assert_eq!(MapConfig::new().app_name(), DEFAULT_APP_NAME);
        let config = MapConfig::new().with(APP_NAME_KEY, "petstore");
        assert_eq!(config.app_name(), "petstore");
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            MapConfig::new().output_path(),
            PathBuf::from("postman_collection.json")
        );
        let config = MapConfig::new().with(OUTPUT_KEY, "out/api.json");
        assert_eq!(config.output_path(), PathBuf::from("out/api.json"));
    }

    #[test]
    fn test_map_config_from_iter() {
        let config: MapConfig = [(APP_NAME_KEY, "shop"), (PORT_KEY, "3000")]
            .into_iter()
            .collect();
        assert_eq!(config.app_name(), "shop");
        assert_eq!(config.port(), "3000");
    }

    #[test]
    fn test_env_key() {
        assert_eq!(EnvConfig::env_key("server.port"), "SERVER_PORT");
        assert_eq!(EnvConfig::env_key("app.name"), "APP_NAME");
        assert_eq!(EnvConfig::env_key("collection.output"), "COLLECTION_OUTPUT");
    }

    #[test]
    #[serial]
    fn test_env_config_reads_environment() {
        unsafe {
            std::env::set_var("SERVER_PORT", "7070");
            std::env::set_var("APP_NAME", "env-app");
        }
        let config = EnvConfig::default();
        assert_eq!(config.port(), "7070");
        assert_eq!(config.app_name(), "env-app");
        unsafe {
            std::env::remove_var("SERVER_PORT");
            std::env::remove_var("APP_NAME");
        }
    }

    #[test]
    #[serial]
    fn test_env_config_missing_port() {
        unsafe {
            std::env::remove_var("SERVER_PORT");
        }
        assert_eq!(EnvConfig::default().port(), "8080");
    }

    #[test]
    fn test_layered_config_first_wins() {
        let upper = MapConfig::new().with(PORT_KEY, "1111");
        let lower = MapConfig::new()
            .with(PORT_KEY, "2222")
            .with(APP_NAME_KEY, "lower");
        let config = LayeredConfig::new().layer(upper).layer(lower);
        assert_eq!(config.port(), "1111");
        assert_eq!(config.app_name(), "lower");
    }

    #[test]
    fn test_layered_config_skips_blank_values() {
        let config = LayeredConfig::new()
            .layer(MapConfig::new().with(APP_NAME_KEY, ""))
            .layer(MapConfig::new().with(APP_NAME_KEY, "fallback"));
        assert_eq!(config.app_name(), "fallback");
    }
}
