use http::Method;
use tracing::{debug, warn};

use crate::introspection::{HandlerSignature, RouteSource};

/// One pattern and one method of a mapping, with its handler.
#[derive(Debug, Clone, Copy)]
pub struct Route<'a> {
    pub pattern: &'a str,
    pub method: &'a Method,
    pub handler: &'a HandlerSignature,
}

/// Result of walking a route source.
#[derive(Debug, Default)]
pub struct Routes<'a> {
    pub routes: Vec<Route<'a>>,
    /// Handlers of mappings that declared no patterns.
    pub skipped: Vec<&'a HandlerSignature>,
}

/// Expands every mapping into one route per (pattern, method) pair.
///
/// Mappings without patterns are skipped and reported. Mappings keep their
/// registration order; within a mapping, patterns are the outer loop.
pub fn enumerate<S: RouteSource + ?Sized>(source: &S) -> Routes<'_> {
    let mut out = Routes::default();

    for mapping in source.mappings() {
        let handler = &mapping.handler;
        let patterns = match &mapping.patterns {
            Some(patterns) if !patterns.is_empty() => patterns.patterns(),
            _ => {
                warn!(handler = %handler.name, "No patterns found for mapping, skipping");
                out.skipped.push(handler);
                continue;
            }
        };

        if mapping.methods.is_empty() {
            debug!(handler = %handler.name, "mapping declares no methods");
        }

        for pattern in patterns {
            for method in &mapping.methods {
                out.routes.push(Route {
                    pattern,
                    method,
                    handler,
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::introspection::{PatternSet, RouteMapping, RouteRegistry};
    use super::*;

    fn pairs<'a>(routes: &Routes<'a>) -> Vec<(&'a str, &'a str)> {
        routes
            .routes
            .iter()
            .map(|r| (r.pattern, r.method.as_str()))
            .collect()
    }

    #[test]
    fn test_cartesian_product() {
        let registry = RouteRegistry::new().register(RouteMapping::structured(
            ["/p1", "/p2"],
            [Method::GET, Method::POST],
            HandlerSignature::new("handler"),
        ));

        let routes = enumerate(&registry);
        assert_eq!(
            pairs(&routes),
            [
                ("/p1", "GET"),
                ("/p1", "POST"),
                ("/p2", "GET"),
                ("/p2", "POST"),
            ]
        );
        assert!(routes.skipped.is_empty());
    }

    #[test]
    fn test_legacy_and_structured_patterns() {
        let registry = RouteRegistry::new()
            .register(RouteMapping::legacy(["/old"], [Method::GET], HandlerSignature::new("old")))
            .register(RouteMapping::structured(
                ["/new"],
                [Method::GET],
                HandlerSignature::new("new"),
            ));

        let routes = enumerate(&registry);
        assert_eq!(pairs(&routes), [("/old", "GET"), ("/new", "GET")]);
    }

    #[test]
    fn test_mapping_without_patterns_is_skipped() {
        let registry = RouteRegistry::new()
            .register(RouteMapping::new(None, [Method::GET], HandlerSignature::new("orphan")))
            .register(RouteMapping::structured(
                ["/ok"],
                [Method::GET],
                HandlerSignature::new("ok"),
            ));

        let routes = enumerate(&registry);
        assert_eq!(routes.routes.len(), 1);
        assert_eq!(routes.routes[0].handler.name, "ok");
        assert_eq!(routes.skipped.len(), 1);
        assert_eq!(routes.skipped[0].name, "orphan");
    }

    #[test]
    fn test_empty_pattern_set_is_skipped() {
        let registry = RouteRegistry::new().register(RouteMapping::new(
            Some(PatternSet::Legacy(Vec::new())),
            [Method::GET],
            HandlerSignature::new("empty"),
        ));

        let routes = enumerate(&registry);
        assert!(routes.routes.is_empty());
        assert_eq!(routes.skipped.len(), 1);
    }

    #[test]
    fn test_mapping_without_methods_yields_nothing() {
        let registry = RouteRegistry::new().register(RouteMapping::structured(
            ["/any"],
            Vec::<Method>::new(),
            HandlerSignature::new("any"),
        ));

        let routes = enumerate(&registry);
        assert!(routes.routes.is_empty());
        assert!(routes.skipped.is_empty());
    }

    #[test]
    fn test_shared_handler_across_routes() {
        let registry = RouteRegistry::new().register(RouteMapping::structured(
            ["/a", "/b"],
            [Method::DELETE],
            HandlerSignature::new("remove"),
        ));

        let routes = enumerate(&registry);
        assert!(routes.routes.iter().all(|r| r.handler.name == "remove"));
    }
}
