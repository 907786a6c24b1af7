//! Route grouping.
//!
//! Partitions the filtered route table into named buckets. A route
//! belongs to the first group (in declaration order) whose pattern set
//! matches its name; unmatched routes fall into the reserved `default`
//! bucket. Groups with zero members are absent from the result.

use indexmap::IndexMap;

use crate::compile::filter::Matcher;
use crate::source::RouteTable;

/// Reserved bucket for routes no group pattern claims.
pub const DEFAULT_GROUP: &str = "default";

/// Group name → route table, in first-assignment order.
pub type GroupedRoutes = IndexMap<String, RouteTable>;

/// Assign each route to exactly one group (first-match-wins, name only).
pub fn group_routes(routes: RouteTable, groups: &[(String, Vec<Matcher>)]) -> GroupedRoutes {
    let mut grouped = GroupedRoutes::new();

    for (name, path) in routes {
        let bucket = groups
            .iter()
            .find(|(_, matchers)| matchers.iter().any(|m| m.matches(&name)))
            .map(|(group, _)| group.as_str())
            .unwrap_or(DEFAULT_GROUP);

        grouped
            .entry(bucket.to_string())
            .or_default()
            .insert(name, path);
    }

    grouped
}

// ============================================================================
// Tests
// ============================================================================
