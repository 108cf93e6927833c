//! Placeholder request bodies built from type descriptors.
//!
//! Rust has no runtime reflection, so the fields of a body type are described
//! up front by a [`TypeDescriptor`]. Most types get one from
//! `#[derive(Example)]`; hand-written descriptors work just as well.
//!
//! ```
//! use postgen::example::{FieldKind, TypeDescriptor, example_json};
//!
//! let user = TypeDescriptor::new("CreateUser")
//!     .field("name", FieldKind::Text)
//!     .field("age", FieldKind::Int32);
//!
//! let body = example_json(&user);
//! assert_eq!(body["name"], "example");
//! assert_eq!(body["age"], 0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder for text fields.
pub const TEXT_PLACEHOLDER: &str = "example";

/// Placeholder for every field whose kind is [`FieldKind::Other`].
pub const NESTED_PLACEHOLDER: &str = "nestedObject";

/// Category of a declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Int64,
    Int32,
    Bool,
    Float64,
    /// Nested structs, collections, maps and anything unrecognised.
    Other,
}

impl FieldKind {
    /// The placeholder emitted for a field of this kind.
    pub fn placeholder(self) -> Value {
        match self {
            FieldKind::Text => Value::from(TEXT_PLACEHOLDER),
            FieldKind::Int64 => Value::from(0i64),
            FieldKind::Int32 => Value::from(0i32),
            FieldKind::Bool => Value::Bool(false),
            FieldKind::Float64 => Value::from(0.0f64),
            FieldKind::Other => Value::from(NESTED_PLACEHOLDER),
        }
    }
}

/// A field declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
}

/// A named type and its declared fields, in declaration order.
///
/// Non-body parameters only carry the type name; their field list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Creates a descriptor with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind,
        });
        self
    }
}

/// Types that can describe their own fields for example generation.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(Example)]
/// struct CreateUser {
///     name: String,
///     age: i32,
///     tags: Vec<String>,
/// }
/// ```
pub trait Example {
    fn descriptor() -> TypeDescriptor;
}

/// Builds the placeholder object for a type: one entry per declared field.
///
/// Nested types are not walked; they collapse to [`NESTED_PLACEHOLDER`].
pub fn example_json(ty: &TypeDescriptor) -> Map<String, Value> {
    ty.fields
        .iter()
        .map(|field| (field.name.clone(), field.kind.placeholder()))
        .collect()
}
