//! Virtual module emission.
//!
//! Serializes the compiled route table as JavaScript source defining the
//! global `route(name, params)` lookup/substitution function. The
//! function body is a self-contained, dependency-free snippet; it runs in
//! the consuming application, so its behavior is part of this tool's
//! contract (see `runtime` for the native mirror that pins it).

use crate::compile::CompiledRoutes;
use crate::compile::group::DEFAULT_GROUP;
use crate::error::Error;

/// Runtime lookup function embedded in the emitted module.
///
/// Substitutes each param into its `{key}` placeholder (first occurrence
/// only), collects unmatched params as query-string pairs, and rejects
/// lookups that leave placeholders unfilled.
const RUNTIME_FN: &str = r#"/**
 * @param {string} name
 * @param {Record<string, any>} params
 * @returns {string}
 */
window.route = (name, params = {}) => {
    if (!routes[name]) {
        throw new Error(`Route ${name} does not exist.`)
    }

    if (typeof params !== 'object' || params === null) {
        throw new Error('Route parameters must be an object.')
    }

    let path = routes[name]
    const query = []

    for (const [key, value] of Object.entries(params)) {
        if (path.includes(`{${key}}`)) {
            path = path.replace(`{${key}}`, value)
        } else {
            query.push(`${encodeURIComponent(key)}=${encodeURIComponent(value)}`)
        }
    }

    const missing = Array.from(path.matchAll(/\{\w+\}/g), (m) => m[0])

    if (missing.length > 0) {
        throw new Error(`Missing route parameters: ${missing.join(', ')} in '${path}'`)
    }

    if (query.length > 0) {
        path += '?' + query.join('&')
    }

    return path
}
"#;

/// Emit the module source text.
///
/// With grouping configured, each non-default group becomes a named
/// export and the default bucket becomes the default export. The global
/// `route` function always covers the full table.
pub fn emit_module(compiled: &CompiledRoutes, grouped: bool) -> Result<String, Error> {
    let mut js = String::with_capacity(1024);

    js.push_str("// Generated by laroute. Do not edit.\n\n");
    js.push_str("/** @type {Record<string, string>} */\n");
    js.push_str("const routes = ");
    js.push_str(&serde_json::to_string(&compiled.routes)?);
    js.push_str("\n\n");
    js.push_str(RUNTIME_FN);

    if grouped {
        js.push('\n');
        for (group, table) in &compiled.groups {
            if group == DEFAULT_GROUP {
                continue;
            }
            js.push_str("export const ");
            js.push_str(group);
            js.push_str(" = ");
            js.push_str(&serde_json::to_string(table)?);
            js.push('\n');
        }

        js.push_str("export default ");
        match compiled.groups.get(DEFAULT_GROUP) {
            Some(table) => js.push_str(&serde_json::to_string(table)?),
            None => js.push_str("{}"),
        }
        js.push('\n');
    }

    Ok(js)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::group::GroupedRoutes;
    use crate::source::RouteTable;
    use indexmap::IndexMap;

    fn table(entries: &[(&str, &str)]) -> RouteTable {
        entries
            .iter()
            .map(|(n, p)| (n.to_string(), p.to_string()))
            .collect()
    }

    fn compiled(routes: RouteTable, groups: GroupedRoutes) -> CompiledRoutes {
        let params = routes
            .keys()
            .map(|name| (name.clone(), Vec::new()))
            .collect();
        CompiledRoutes {
            routes,
            params,
            groups,
        }
    }

    #[test]
    fn test_module_contains_route_table_and_function() {
        let routes = table(&[("users.show", "/users/{id}")]);
        let js = emit_module(&compiled(routes, GroupedRoutes::new()), false).unwrap();

        assert!(js.contains(r#"const routes = {"users.show":"/users/{id}"}"#));
        assert!(js.contains("window.route = (name, params = {}) =>"));
        assert!(js.contains("Route ${name} does not exist."));
        assert!(js.contains("Missing route parameters:"));
        assert!(!js.contains("export"));
    }

    #[test]
    fn test_grouped_module_emits_named_and_default_exports() {
        let routes = table(&[("admin.users", "/admin/users"), ("home", "/")]);
        let mut groups = GroupedRoutes::new();
        groups.insert("admin".into(), table(&[("admin.users", "/admin/users")]));
        groups.insert(DEFAULT_GROUP.into(), table(&[("home", "/")]));

        let js = emit_module(&compiled(routes, groups), true).unwrap();
        assert!(js.contains(r#"export const admin = {"admin.users":"/admin/users"}"#));
        assert!(js.contains(r#"export default {"home":"/"}"#));
        assert!(!js.contains("export const default"));
    }

    #[test]
    fn test_grouped_module_without_default_bucket() {
        let routes = table(&[("admin.users", "/admin/users")]);
        let mut groups = GroupedRoutes::new();
        groups.insert("admin".into(), routes.clone());

        let js = emit_module(&compiled(routes, groups), true).unwrap();
        assert!(js.contains("export default {}"));
    }

    #[test]
    fn test_emission_is_idempotent() {
        let routes = table(&[("b", "/b"), ("a", "/a")]);
        let c = compiled(routes, GroupedRoutes::new());

        let first = emit_module(&c, false).unwrap();
        let second = emit_module(&c, false).unwrap();
        assert_eq!(first, second);
        // Key order follows the table, not lexicographic order
        assert!(first.find(r#""b":"#).unwrap() < first.find(r#""a":"#).unwrap());
    }

    #[test]
    fn test_params_unused_by_module_emitter() {
        // The module ships cleaned templates only; descriptors feed the
        // declaration writer.
        let routes = table(&[("users.show", "/users/{id}")]);
        let mut c = compiled(routes, GroupedRoutes::new());
        c.params = IndexMap::new();
        assert!(emit_module(&c, false).is_ok());
    }
}
