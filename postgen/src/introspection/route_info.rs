//! Flattened route rows for listing.

use std::fmt;

use serde::Serialize;

use crate::collection::Route;

/// One (method, pattern, handler) row of the route table.
///
/// This is what a mapping looks like after its patterns and methods have been
/// expanded, and what the generator turns into one collection item.
///
/// # Examples
///
/// ```
/// use postgen::introspection::RouteInfo;
///
/// let info = RouteInfo::new("GET", "/users/{id}", "get_user");
/// assert_eq!(info.to_string(), "GET /users/{id} -> get_user");
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteInfo {
    pub method: String,
    pub path: String,
    pub handler_name: String,
}

impl RouteInfo {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        handler_name: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            handler_name: handler_name.into(),
        }
    }
}

impl From<&Route<'_>> for RouteInfo {
    fn from(route: &Route<'_>) -> Self {
        Self::new(route.method.as_str(), route.pattern, &route.handler.name)
    }
}

impl fmt::Display for RouteInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.method, self.path, self.handler_name)
    }
}
