//! Postman collection building.
//!
//! Mappings are expanded into routes ([`enumerate`]), each route becomes a
//! request ([`synthesize`]), and the requests are gathered into a
//! [`Collection`] that [`write_collection`] puts on disk.

mod document;
mod enumerate;
mod request;
mod sink;

pub use document::{
    Body, Collection, Header, Info, Item, QueryParam, RawLanguage, RawOptions, Request, SCHEMA_URL,
    Url,
};
pub use enumerate::{Route, Routes, enumerate};
pub use request::{HOST, PROTOCOL, SAMPLE_QUERY_VALUE, path_segments, synthesize};
pub use sink::write_collection;
