use serde_json::{Map, Value};
use tracing::debug;

use crate::collection::{Body, QueryParam, Request, Route, Url};
use crate::error::Result;
use crate::example::example_json;
use crate::introspection::Binding;

/// Value given to every query parameter.
pub const SAMPLE_QUERY_VALUE: &str = "sampleValue";
pub const HOST: &str = "localhost";
pub const PROTOCOL: &str = "http";

/// Builds the request for one route.
///
/// Body parameters contribute their placeholder fields to a single JSON
/// object (later parameters overwrite earlier ones on name clashes). Query
/// parameters become `sampleValue` entries in declaration order. Path
/// variables are left as written in the pattern.
pub fn synthesize(route: &Route<'_>, port: &str) -> Result<Request> {
    let mut query = Vec::new();
    let mut body: Option<Map<String, Value>> = None;

    for param in &route.handler.parameters {
        match &param.binding {
            Binding::Body => {
                body.get_or_insert_with(Map::new)
                    .extend(example_json(&param.ty));
            }
            Binding::Query { .. } => {
                if let Some(key) = param.query_key() {
                    query.push(QueryParam {
                        key: key.to_string(),
                        value: SAMPLE_QUERY_VALUE.to_string(),
                    });
                }
            }
            Binding::Path | Binding::Other => {}
        }
    }

    let mut raw = format!("{PROTOCOL}://{HOST}:{port}{}", route.pattern);
    if !query.is_empty() {
        let pairs: Vec<String> = query
            .iter()
            .map(|q| format!("{}={}", q.key, q.value))
            .collect();
        raw.push('?');
        raw.push_str(&pairs.join("&"));
    }

    let body = match body {
        Some(content) => Body::json(serde_json::to_string_pretty(&content)?),
        None => Body::None,
    };

    debug!(
        handler = %route.handler.name,
        method = %route.method,
        url = %raw,
        "synthesized request"
    );

    Ok(Request {
        method: route.method.as_str().to_string(),
        header: Vec::new(),
        url: Url {
            raw,
            protocol: PROTOCOL.to_string(),
            host: vec![HOST.to_string()],
            port: port.to_string(),
            path: path_segments(route.pattern),
            query,
        },
        body,
    })
}

/// Splits a pattern on `/`.
///
/// A leading slash yields a leading empty segment. Trailing empty segments are
/// dropped, so `/users/` and `/users` both give `["", "users"]` and `/` gives
/// no segments at all. A pattern without a slash is kept as one segment.
pub fn path_segments(pattern: &str) -> Vec<String> {
    if !pattern.contains('/') {
        return vec![pattern.to_string()];
    }

    let mut segments: Vec<String> = pattern.split('/').map(str::to_string).collect();
    while segments.last().is_some_and(String::is_empty) {
        segments.pop();
    }
    segments
}
