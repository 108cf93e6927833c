//! Implementation of the `postgen generate` command.

use std::path::{Path, PathBuf};

use colored::Colorize;
use postgen::config::{APP_NAME_KEY, EnvConfig, LayeredConfig, MapConfig, OUTPUT_KEY, PORT_KEY};
use postgen::generator::CollectionGenerator;

use crate::colors;

/// Configuration for the generate command.
#[derive(Default)]
pub struct GenerateConfig {
    pub routes: PathBuf,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
}

/// Execute the `generate` command.
pub fn execute(config: GenerateConfig) -> Result<(), String> {
    let registry = super::load_route_table(&config.routes)?;
    let source = build_config(&config)?;

    println!();
    println!(
        "  {} {}",
        "Generating collection from".bright_cyan(),
        config.routes.display().to_string().bold()
    );
    println!();

    let path = CollectionGenerator::new(&registry, &source)
        .write()
        .map_err(|e| e.to_string())?;

    println!(
        "  {} Created {}",
        "✓".custom_color(colors::green()),
        path.display().to_string().cyan()
    );
    println!();

    Ok(())
}

/// Flags first, then the TOML file, then the environment (and `.env`).
fn build_config(config: &GenerateConfig) -> Result<LayeredConfig, String> {
    let mut flags = MapConfig::new();
    if let Some(name) = &config.name {
        flags.set(APP_NAME_KEY, name.as_str());
    }
    if let Some(port) = config.port {
        flags.set(PORT_KEY, port.to_string());
    }
    if let Some(output) = &config.output {
        flags.set(OUTPUT_KEY, output.to_string_lossy());
    }

    let mut layered = LayeredConfig::new().layer(flags);
    if let Some(path) = &config.config {
        layered = layered.layer(load_config_file(path)?);
    }
    Ok(layered.layer(EnvConfig::load()))
}

fn load_config_file(path: &Path) -> Result<MapConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_config(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Flattens a TOML document into dotted keys: `[server] port = 8080`
/// becomes `server.port = "8080"`.
pub fn parse_config(content: &str) -> Result<MapConfig, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    let mut config = MapConfig::new();
    flatten("", &table, &mut config);
    Ok(config)
}

fn flatten(prefix: &str, table: &toml::Table, config: &mut MapConfig) {
    for (key, value) in table {
        let key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            toml::Value::Table(inner) => flatten(&key, inner, config),
            toml::Value::String(s) => config.set(key, s.as_str()),
            toml::Value::Integer(i) => config.set(key, i.to_string()),
            toml::Value::Float(f) => config.set(key, f.to_string()),
            toml::Value::Boolean(b) => config.set(key, b.to_string()),
            toml::Value::Datetime(d) => config.set(key, d.to_string()),
            toml::Value::Array(_) => {}
        }
    }
}
