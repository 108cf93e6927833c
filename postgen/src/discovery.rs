//! Route auto-discovery via `inventory`.
//!
//! Handlers annotated with `#[get]`, `#[post]`, `#[put]`, `#[patch]`,
//! `#[delete]` or `#[route]` register a [`RouteDescriptor`] at link time.
//! [`discover()`] collects them into a [`RouteRegistry`].

use http::Method;
use tracing::warn;

use crate::introspection::{
    HandlerSignature, ParameterDescriptor, PatternSet, RouteMapping, RouteRegistry,
};

/// Metadata about a route handler, collected at link time via `inventory`.
pub struct RouteDescriptor {
    /// HTTP methods, upper case.
    pub methods: &'static [&'static str],
    /// Route path patterns (e.g. "/users/{id}"). May be empty.
    pub patterns: &'static [&'static str],
    /// Function name of the handler
    pub handler_name: &'static str,
    /// Returns the handler's parameters in declaration order
    pub parameters: fn() -> Vec<ParameterDescriptor>,
}

inventory::collect!(RouteDescriptor);

impl RouteDescriptor {
    /// Converts the static descriptor into an owned mapping.
    ///
    /// A descriptor without patterns yields a mapping without a pattern set,
    /// which the generator reports and skips.
    pub fn to_mapping(&self) -> RouteMapping {
        let patterns = if self.patterns.is_empty() {
            None
        } else {
            let patterns = self.patterns.iter().map(|p| p.to_string()).collect();
            Some(PatternSet::Structured(patterns))
        };

        let methods = self.methods.iter().filter_map(|name| {
            let method = Method::from_bytes(name.as_bytes()).ok();
            if method.is_none() {
                warn!(handler = self.handler_name, method = %name, "ignoring invalid method");
            }
            method
        });

        let mut handler = HandlerSignature::new(self.handler_name);
        handler.parameters = (self.parameters)();

        RouteMapping::new(patterns, methods, handler)
    }
}

/// Collects every annotated handler linked into the binary.
///
/// Mappings are sorted by their first pattern and handler name, since link
/// order is not stable.
pub fn discover() -> RouteRegistry {
    let mut descriptors: Vec<_> = inventory::iter::<RouteDescriptor>.into_iter().collect();
    descriptors.sort_by_key(|d| (d.patterns.first().copied(), d.handler_name));

    descriptors
        .into_iter()
        .map(RouteDescriptor::to_mapping)
        .collect()
}
