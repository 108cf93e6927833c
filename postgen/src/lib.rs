//! # postgen
//!
//! Generates a Postman collection (v2.1) from a web application's route
//! table: one request per route and method, with the URL, query string and a
//! placeholder JSON body filled in.
//!
//! Routes come from any [`RouteSource`](introspection::RouteSource): a
//! [`RouteRegistry`](introspection::RouteRegistry) built by hand, a JSON route
//! table, or handlers annotated with the route macros and collected by
//! [`discover()`].
//!
//! ```ignore
//! use postgen::prelude::*;
//!
//! #[derive(Example)]
//! struct CreateUser {
//!     name: String,
//!     age: i32,
//! }
//!
//! #[post("/users")]
//! async fn create_user(#[body] payload: CreateUser) -> &'static str {
//!     "created"
//! }
//!
//! #[get("/users")]
//! async fn list_users(#[query] page: u32, #[query("size")] per_page: u32) -> &'static str {
//!     "users"
//! }
//!
//! fn main() {
//!     let routes = postgen::discover();
//!     CollectionGenerator::new(&routes, &EnvConfig::load()).run();
//! }
//! ```

pub mod collection;
pub mod config;
pub mod discovery;
pub mod error;
pub mod example;
pub mod generator;
pub mod introspection;

pub use discovery::discover;
pub use postgen_macros::{Example, delete, get, patch, post, put, route};

#[doc(hidden)]
pub use inventory;

pub mod prelude {
    pub use crate::collection::Collection;
    pub use crate::config::{ConfigSource, EnvConfig, LayeredConfig, MapConfig};
    pub use crate::error::{Error, Result};
    pub use crate::example::{Example, FieldKind, TypeDescriptor};
    pub use crate::generator::CollectionGenerator;
    pub use crate::introspection::{
        HandlerSignature, ParameterDescriptor, PatternSet, RouteMapping, RouteRegistry, RouteSource,
    };
    pub use postgen_macros::{Example, delete, get, patch, post, put, route};
}
