//! Native mirror of the generated lookup function.
//!
//! The emitted JavaScript (see `emit::module`) runs in the consuming
//! application, outside this tool's control. This module implements the
//! same lookup/substitution semantics in Rust so the behavior is pinned
//! by the test-suite and available to native callers.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

use crate::compile::template::remaining_placeholders;
use crate::source::RouteTable;

/// Characters `encodeURIComponent` leaves intact besides alphanumerics.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Runtime-side lookup errors, raised on invalid caller input.
///
/// The generated function additionally rejects non-object params; that
/// case is unrepresentable in this typed surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Route {0} does not exist.")]
    NotFound(String),

    #[error("Missing route parameters: {} in '{path}'", .placeholders.join(", "))]
    MissingParameters {
        placeholders: Vec<String>,
        path: String,
    },
}

/// Resolve a route name and params into a concrete path.
///
/// Each param substitutes the first occurrence of its `{key}`
/// placeholder; params without a placeholder accumulate as query-string
/// pairs appended after `?`. Placeholders left unfilled are an error.
pub fn resolve(
    routes: &RouteTable,
    name: &str,
    params: &[(&str, &str)],
) -> Result<String, RouteError> {
    let Some(template) = routes.get(name) else {
        return Err(RouteError::NotFound(name.to_string()));
    };

    let mut path = template.clone();
    let mut query: Vec<String> = Vec::new();

    for (key, value) in params {
        let token = format!("{{{key}}}");
        if path.contains(&token) {
            path = path.replacen(&token, value, 1);
        } else {
            query.push(format!("{}={}", encode(key), encode(value)));
        }
    }

    let placeholders = remaining_placeholders(&path);
    if !placeholders.is_empty() {
        return Err(RouteError::MissingParameters { placeholders, path });
    }

    if !query.is_empty() {
        path.push('?');
        path.push_str(&query.join("&"));
    }

    Ok(path)
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_SET).to_string()
}

// ============================================================================
// Tests
// ============================================================================
