//! Route table introspection.
//!
//! The generator never reaches into framework globals: it reads mappings from
//! a [`RouteSource`] handed to it. [`RouteRegistry`] is the in-memory source,
//! filled by hand, from a JSON route table, or by link-time discovery.

mod mapping;
mod registry;
mod route_info;

pub use mapping::{Binding, HandlerSignature, ParameterDescriptor, PatternSet, RouteMapping};
pub use registry::{RouteRegistry, RouteSource};
pub use route_info::RouteInfo;
