//! End-to-end collection generation.
//!
//! ```no_run
//! use postgen::config::EnvConfig;
//! use postgen::generator::CollectionGenerator;
//!
//! let routes = postgen::discover();
//! let config = EnvConfig::load();
//!
//! // Logs the outcome; never panics or exits on failure.
//! CollectionGenerator::new(&routes, &config).run();
//! ```

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::collection::{self, Collection};
use crate::config::ConfigSource;
use crate::error::Result;
use crate::introspection::RouteSource;

/// Turns a route source into a Postman collection.
pub struct CollectionGenerator<'a, R: ?Sized, C: ?Sized> {
    routes: &'a R,
    config: &'a C,
}

impl<'a, R, C> CollectionGenerator<'a, R, C>
where
    R: RouteSource + ?Sized,
    C: ConfigSource + ?Sized,
{
    pub fn new(routes: &'a R, config: &'a C) -> Self {
        Self { routes, config }
    }

    /// Builds the collection in memory.
    pub fn generate(&self) -> Result<Collection> {
        let port = self.config.port();
        let mut collection = Collection::new(self.config.app_name());

        let routes = collection::enumerate(self.routes);
        for route in &routes.routes {
            let request = collection::synthesize(route, &port)?;
            collection.push(route.handler.name.clone(), request);
        }

        info!(
            items = collection.len(),
            skipped = routes.skipped.len(),
            "collection generated"
        );
        Ok(collection)
    }

    /// Builds the collection and writes it to the configured output path.
    pub fn write(&self) -> Result<PathBuf> {
        self.write_to(&self.config.output_path())
    }

    /// Builds the collection and writes it to `path`.
    pub fn write_to(&self, path: &Path) -> Result<PathBuf> {
        let collection = self.generate()?;
        collection::write_collection(&collection, path)
    }

    /// Startup hook: writes the collection and logs any failure instead of
    /// returning it.
    pub fn run(&self) -> Option<PathBuf> {
        match self.write() {
            Ok(path) => Some(path),
            Err(e) => {
                error!(error = %e, details = ?e, "Error while creating collection file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use http::Method;

    use crate::collection::Body;
    use crate::config::{APP_NAME_KEY, MapConfig, OUTPUT_KEY, PORT_KEY};
    use crate::example::{FieldKind, TypeDescriptor};
    use crate::introspection::{HandlerSignature, ParameterDescriptor, RouteMapping, RouteRegistry};
    use super::*;

    fn registry() -> RouteRegistry {
        let payload = ParameterDescriptor::body(
            "payload",
            TypeDescriptor::new("User").field("name", FieldKind::Text),
        );
        let page = ParameterDescriptor::query("page", "u32");

        RouteRegistry::new()
            .register(RouteMapping::structured(
                ["/users", "/members"],
                [Method::GET, Method::POST],
                HandlerSignature::new("users").param(payload),
            ))
            .register(RouteMapping::new(None, [Method::GET], HandlerSignature::new("orphan")))
            .register(RouteMapping::legacy(
                ["/items"],
                [Method::GET],
                HandlerSignature::new("list_items").param(page),
            ))
    }

    fn generate(registry: &RouteRegistry, config: &MapConfig) -> Collection {
        let generator = CollectionGenerator::new(registry, config);
        generator.generate().unwrap()
    }

    #[test]
    fn test_generate_counts_and_names() {
        let registry = registry();
        let config = MapConfig::new().with(APP_NAME_KEY, "shop");
        let collection = generate(&registry, &config);

        assert_eq!(collection.info.name, "shop");
        assert_eq!(collection.len(), 5);
        let names: Vec<_> = collection.item.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["users", "users", "users", "users", "list_items"]);
    }

    #[test]
    fn test_generate_uses_configured_port() {
        let registry = registry();
        let config = MapConfig::new().with(PORT_KEY, "9999");
        let collection = generate(&registry, &config);

        for item in &collection.item {
            assert_eq!(item.request.url.port, "9999");
        }
        assert_eq!(
            collection.item[4].request.url.raw,
            "http://localhost:9999/items?page=sampleValue"
        );
    }

    #[test]
    fn test_generate_bodies() {
        let registry = registry();
        let config = MapConfig::new();
        let collection = generate(&registry, &config);

        assert!(matches!(collection.item[0].request.body, Body::Raw { .. }));
        assert_eq!(collection.item[4].request.body, Body::None);
    }

    #[test]
    fn test_generate_empty_registry() {
        let registry = RouteRegistry::new();
        let config = MapConfig::new();
        let collection = generate(&registry, &config);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_write_uses_configured_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("collection.json");
        let registry = registry();
        let config = MapConfig::new().with(OUTPUT_KEY, output.to_string_lossy());

        let generator = CollectionGenerator::new(&registry, &config);
        let written = generator.write().unwrap();
        assert_eq!(written, std::path::absolute(&output).unwrap());
        assert!(output.exists());
    }

    #[test]
    fn test_run_returns_none_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nope").join("collection.json");
        let registry = registry();
        let config = MapConfig::new().with(OUTPUT_KEY, output.to_string_lossy());

        let generator = CollectionGenerator::new(&registry, &config);
        assert!(generator.run().is_none());
        assert!(!output.exists());
    }

    #[test]
    fn test_generator_over_trait_objects() {
        let registry = registry();
        let config = MapConfig::new();
        let routes: &dyn RouteSource = &registry;
        let config: &dyn ConfigSource = &config;

        let generator = CollectionGenerator::new(routes, config);
        let collection = generator.generate().unwrap();
        assert_eq!(collection.len(), 5);
    }
}
