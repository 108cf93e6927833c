//! CLI command implementations.

use std::path::Path;

use postgen::introspection::RouteRegistry;

pub mod generate;
pub mod routes;

/// Read and parse a JSON route table.
pub fn load_route_table(path: &Path) -> Result<RouteRegistry, String> {
    if !path.exists() {
        return Err(format!("Route table {} not found", path.display()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let registry = RouteRegistry::from_json(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), mappings = registry.len(), "loaded route table");

    Ok(registry)
}
