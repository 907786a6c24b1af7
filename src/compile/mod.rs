//! Route compilation pipeline.
//!
//! Fetch → normalize → filter → transform → group. Every compilation
//! starts from scratch: there is no cached state between runs, so two
//! runs over an unchanged source produce byte-identical output.

pub mod filter;
pub mod group;
pub mod template;

use indexmap::IndexMap;

use crate::config::Config;
use crate::error::Error;
use crate::source::{RouteSource, RouteTable, normalize};
use filter::Matcher;
use group::GroupedRoutes;
use template::Param;

/// Result of one compilation run, ready for emission.
#[derive(Debug)]
pub struct CompiledRoutes {
    /// Name → cleaned template (optional markers stripped), in source order.
    pub routes: RouteTable,
    /// Per-route parameter descriptors, derived from the raw templates.
    pub params: IndexMap<String, Vec<Param>>,
    /// Partition per the configured groups; a single `default` bucket
    /// when no groups are configured.
    pub groups: GroupedRoutes,
}

/// Run the full pipeline against a route source.
pub fn compile(source: &dyn RouteSource, config: &Config) -> Result<CompiledRoutes, Error> {
    let table = normalize(source.fetch()?);

    let only = filter::compile_patterns(&config.filter.only)?;
    let except = filter::compile_patterns(&config.effective_except())?;
    let filtered = filter::filter_routes(table, &only, &except);

    let mut routes = RouteTable::with_capacity(filtered.len());
    let mut params = IndexMap::with_capacity(filtered.len());

    for (name, raw_template) in &filtered {
        params.insert(name.clone(), template::extract_params(raw_template));
        routes.insert(name.clone(), template::clean_template(raw_template));
    }

    let group_spec = compile_group_spec(config)?;
    let groups = group::group_routes(routes.clone(), &group_spec);

    Ok(CompiledRoutes {
        routes,
        params,
        groups,
    })
}

/// Compile the `[groups]` pattern sets, preserving declaration order.
fn compile_group_spec(config: &Config) -> Result<Vec<(String, Vec<Matcher>)>, Error> {
    config
        .groups
        .iter()
        .map(|(name, patterns)| Ok((name.clone(), filter::compile_patterns(patterns)?)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
