//! Read-only access to registered route mappings.

use serde::{Deserialize, Serialize};

use crate::collection;
use crate::error::{Error, Result};
use crate::introspection::{RouteInfo, RouteMapping};

/// Something that can list an application's route mappings.
///
/// The generator only reads from it.
pub trait RouteSource {
    fn mappings(&self) -> &[RouteMapping];
}

impl RouteSource for [RouteMapping] {
    fn mappings(&self) -> &[RouteMapping] {
        self
    }
}

impl RouteSource for Vec<RouteMapping> {
    fn mappings(&self) -> &[RouteMapping] {
        self
    }
}

/// Registry of route mappings.
///
/// Serializes as a plain JSON array of mappings, which is also the route table
/// format the CLI reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteRegistry {
    mappings: Vec<RouteMapping>,
}

impl RouteRegistry {
    /// Creates a new empty route registry.
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
        }
    }

    /// Creates a route registry with the given mappings.
    pub fn with_mappings(mappings: Vec<RouteMapping>) -> Self {
        Self { mappings }
    }

    /// Adds a mapping, builder style.
    pub fn register(mut self, mapping: RouteMapping) -> Self {
        self.mappings.push(mapping);
        self
    }

    pub fn push(&mut self, mapping: RouteMapping) {
        self.mappings.push(mapping);
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Parses a JSON route table.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::RouteTable)
    }

    /// Expands every mapping into its (method, pattern, handler) rows.
    pub fn route_infos(&self) -> Vec<RouteInfo> {
        collection::enumerate(self)
            .routes
            .iter()
            .map(RouteInfo::from)
            .collect()
    }
}

impl RouteSource for RouteRegistry {
    fn mappings(&self) -> &[RouteMapping] {
        &self.mappings
    }
}

impl FromIterator<RouteMapping> for RouteRegistry {
    fn from_iter<I: IntoIterator<Item = RouteMapping>>(iter: I) -> Self {
        Self::with_mappings(iter.into_iter().collect())
    }
}

impl Extend<RouteMapping> for RouteRegistry {
    fn extend<I: IntoIterator<Item = RouteMapping>>(&mut self, iter: I) {
        self.mappings.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use http::Method;

    use crate::introspection::{HandlerSignature, PatternSet};
    use super::*;

    fn mapping(pattern: &str, method: Method, handler: &str) -> RouteMapping {
        RouteMapping::structured([pattern], [method], HandlerSignature::new(handler))
    }

    #[test]
    fn test_route_registry_new() {
        let registry = RouteRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.mappings().is_empty());
    }

    #[test]
    fn test_route_registry_default() {
        let registry = RouteRegistry::default();
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_route_registry_with_mappings() {
        let registry = RouteRegistry::with_mappings(vec![
            mapping("/users", Method::GET, "list_users"),
            mapping("/users", Method::POST, "create_user"),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.mappings()[1].handler.name, "create_user");
    }

    #[test]
    fn test_route_registry_register_keeps_order() {
        let registry = RouteRegistry::new()
            .register(mapping("/health", Method::GET, "health_check"))
            .register(mapping("/users", Method::POST, "create_user"));

        let names: Vec<_> = registry
            .mappings()
            .iter()
            .map(|m| m.handler.name.as_str())
            .collect();
        assert_eq!(names, ["health_check", "create_user"]);
    }

    #[test]
    fn test_route_registry_collect_and_extend() {
        let mut registry: RouteRegistry = [mapping("/a", Method::GET, "a")].into_iter().collect();
        registry.extend([mapping("/b", Method::GET, "b")]);
        registry.push(mapping("/c", Method::GET, "c"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_route_infos_expand_patterns_and_methods() {
        let registry = RouteRegistry::new().register(RouteMapping::legacy(
            ["/a", "/b"],
            [Method::GET, Method::PUT],
            HandlerSignature::new("both"),
        ));

        let infos = registry.route_infos();
        assert_eq!(infos.len(), 4);
        assert!(infos.contains(&RouteInfo::new("PUT", "/b", "both")));
    }

    #[test]
    fn test_from_json_round_trip() {
        let registry = RouteRegistry::new()
            .register(mapping("/users", Method::GET, "list_users"))
            .register(RouteMapping::new(None, [Method::GET], HandlerSignature::new("orphan")));

        let json = serde_json::to_string(&registry).unwrap();
        assert!(json.starts_with('['));
        let parsed = RouteRegistry::from_json(&json).unwrap();
        assert_eq!(parsed, registry);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RouteRegistry::from_json(r#"{"not": "a table"}"#).unwrap_err();
        assert!(matches!(err, Error::RouteTable(_)));
    }

    #[test]
    fn test_slice_is_a_route_source() {
        let mappings = vec![RouteMapping::new(
            Some(PatternSet::Legacy(vec!["/x".into()])),
            [Method::GET],
            HandlerSignature::new("x"),
        )];
        assert_eq!(RouteSource::mappings(mappings.as_slice()).len(), 1);
    }
}
