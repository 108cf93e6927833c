//! Route mappings and handler signatures.

use http::Method;
use serde::{Deserialize, Serialize};

use crate::example::TypeDescriptor;

/// The URL patterns declared on a mapping.
///
/// Frameworks expose patterns either as plain strings (the older style) or as
/// parsed path patterns. A mapping carries exactly one of the two; both hold
/// the pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSet {
    Legacy(Vec<String>),
    Structured(Vec<String>),
}

impl PatternSet {
    pub fn patterns(&self) -> &[String] {
        match self {
            PatternSet::Legacy(patterns) | PatternSet::Structured(patterns) => patterns,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns().is_empty()
    }
}

/// How a handler parameter is bound to the incoming request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Binding {
    /// Deserialized from the request body.
    Body,
    /// Read from the query string. `key` overrides the parameter name.
    Query {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
    /// Captured from the URL path.
    Path,
    /// Anything else (state, headers, extensions). Ignored by the generator.
    Other,
}

/// One handler argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub binding: Binding,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, binding: Binding, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            binding,
            ty,
        }
    }

    pub fn body(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(name, Binding::Body, ty)
    }

    pub fn query(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, Binding::Query { key: None }, TypeDescriptor::new(ty))
    }

    pub fn path(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, Binding::Path, TypeDescriptor::new(ty))
    }

    pub fn other(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, Binding::Other, TypeDescriptor::new(ty))
    }

    /// Overrides the query key of a query parameter. No effect on other bindings.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let Binding::Query { key: slot } = &mut self.binding {
            *slot = Some(key.into());
        }
        self
    }

    /// The query key for a query parameter: the explicit override when it is
    /// non-empty, the declared name otherwise.
    pub fn query_key(&self) -> Option<&str> {
        match &self.binding {
            Binding::Query { key: Some(key) } if !key.is_empty() => Some(key),
            Binding::Query { .. } => Some(&self.name),
            _ => None,
        }
    }
}

/// The function serving a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerSignature {
    /// Function name, used as the collection item name.
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl HandlerSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn param(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A registered route-handler association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMapping {
    #[serde(default)]
    pub patterns: Option<PatternSet>,
    #[serde(with = "methods")]
    pub methods: Vec<Method>,
    pub handler: HandlerSignature,
}

impl RouteMapping {
    pub fn new(
        patterns: Option<PatternSet>,
        methods: impl IntoIterator<Item = Method>,
        handler: HandlerSignature,
    ) -> Self {
        Self {
            patterns,
            methods: methods.into_iter().collect(),
            handler,
        }
    }

    /// A mapping declared with parsed path patterns.
    pub fn structured<P>(
        patterns: impl IntoIterator<Item = P>,
        methods: impl IntoIterator<Item = Method>,
        handler: HandlerSignature,
    ) -> Self
    where
        P: Into<String>,
    {
        let patterns = patterns.into_iter().map(Into::into).collect();
        Self::new(Some(PatternSet::Structured(patterns)), methods, handler)
    }

    /// A mapping declared with plain string patterns.
    pub fn legacy<P>(
        patterns: impl IntoIterator<Item = P>,
        methods: impl IntoIterator<Item = Method>,
        handler: HandlerSignature,
    ) -> Self
    where
        P: Into<String>,
    {
        let patterns = patterns.into_iter().map(Into::into).collect();
        Self::new(Some(PatternSet::Legacy(patterns)), methods, handler)
    }
}

/// Serializes `http::Method`s as their upper-case names.
mod methods {
    use http::Method;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(methods: &[Method], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(methods.iter().map(Method::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Method>, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names
            .iter()
            .map(|name| {
                Method::from_bytes(name.to_ascii_uppercase().as_bytes())
                    .map_err(|_| D::Error::custom(format!("invalid HTTP method `{name}`")))
            })
            .collect()
    }
}
