//! Route table acquisition and normalization.
//!
//! A [`RouteSource`] produces the raw route descriptors as the framework
//! prints them; [`normalize`] turns them into the ordered name → template
//! table the rest of the pipeline works on.

pub mod artisan;

pub use artisan::ArtisanSource;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Error;

/// Raw route descriptor as printed by `artisan route:list --json`.
///
/// Fields the framework may omit are optional here; anything else in the
/// descriptor (middleware, action, method) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoute {
    #[serde(default)]
    pub name: Option<String>,
    pub uri: String,
    #[serde(default)]
    pub domain: Option<String>,
}

/// Ordered route table: name → composed path template.
///
/// Insertion order follows the source's emission order. Re-inserting an
/// existing name replaces its template but keeps its original position,
/// so duplicate names collapse to the last occurrence.
pub type RouteTable = IndexMap<String, String>;

/// Anything that can produce the authoritative route table.
///
/// Tests substitute a fixed in-memory provider for the artisan command.
pub trait RouteSource {
    fn fetch(&self) -> Result<Vec<RawRoute>, Error>;
}

/// Normalize raw descriptors into the ordered route table.
///
/// Routes without a name are dropped. A single leading `/` is stripped
/// from the uri, a missing domain defaults to the empty string, and the
/// template is composed as `{domain}/{uri}`.
pub fn normalize(raw: Vec<RawRoute>) -> RouteTable {
    let mut table = RouteTable::with_capacity(raw.len());

    for route in raw {
        let Some(name) = route.name else { continue };
        if name.is_empty() {
            continue;
        }

        let uri = route.uri.strip_prefix('/').unwrap_or(&route.uri);
        let domain = route.domain.unwrap_or_default();

        table.insert(name, format!("{domain}/{uri}"));
    }

    table
}

// ============================================================================
// Tests
// ============================================================================
