//! Postman collection v2.1 document model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// Schema identifier written into every collection.
pub const SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// A complete collection: metadata plus one item per route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub info: Info,
    pub item: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(rename = "_postman_id")]
    pub postman_id: Uuid,
    pub name: String,
    pub schema: String,
}

/// A named request. Names are handler function names and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub header: Vec<Header>,
    pub url: Url,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub raw: String,
    pub protocol: String,
    pub host: Vec<String>,
    pub port: String,
    pub path: Vec<String>,
    pub query: Vec<QueryParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

/// Request body: `{"mode": "none"}` or a raw JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Body {
    None,
    Raw { raw: String, options: RawOptions },
}

impl Body {
    /// A raw body tagged as JSON.
    pub fn json(raw: impl Into<String>) -> Self {
        Body::Raw {
            raw: raw.into(),
            options: RawOptions {
                raw: RawLanguage {
                    language: "json".to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOptions {
    pub raw: RawLanguage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLanguage {
    pub language: String,
}

impl Collection {
    /// An empty collection with a fresh random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: Info {
                postman_id: Uuid::new_v4(),
                name: name.into(),
                schema: SCHEMA_URL.to_string(),
            },
            item: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, request: Request) {
        self.item.push(Item {
            name: name.into(),
            request,
        });
    }

    pub fn len(&self) -> usize {
        self.item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    /// Indented JSON, as written to disk.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
