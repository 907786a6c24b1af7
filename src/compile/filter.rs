//! Glob-like route filter patterns.
//!
//! A pattern is a plain string where `.` is a literal dot and `*` expands
//! to "zero or more of any character". Patterns are anchored: they must
//! match the whole candidate, so `admin.*` matches `admin.users.index`
//! but not `administrator`.

use regex::Regex;

use crate::error::Error;
use crate::source::RouteTable;

/// Compiled, anchored route pattern.
#[derive(Debug)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile a pattern into an anchored matcher.
    ///
    /// Dots are escaped before the wildcard expands; `*` itself is never
    /// escaped, so the order is equivalent either way.
    pub fn compile(pattern: &str) -> Result<Self, Error> {
        let expanded = pattern.replace('.', r"\.").replace('*', ".*");

        let regex = Regex::new(&format!("^{expanded}$")).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self { regex })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Compile a pattern list.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Matcher>, Error> {
    patterns.iter().map(|p| Matcher::compile(p)).collect()
}

/// Apply allow-list / deny-list filtering to the route table.
///
/// A pattern hits an entry if it matches the route name or the composed
/// template path. An entry is kept iff `only` is empty or some `only`
/// pattern hits, and no `except` pattern hits. Order-preserving; an
/// empty result is valid.
pub fn filter_routes(routes: RouteTable, only: &[Matcher], except: &[Matcher]) -> RouteTable {
    routes
        .into_iter()
        .filter(|(name, path)| {
            let hits = |m: &Matcher| m.matches(name) || m.matches(path);

            if !only.is_empty() && !only.iter().any(hits) {
                return false;
            }

            !except.iter().any(hits)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> RouteTable {
        entries
            .iter()
            .map(|(n, p)| (n.to_string(), p.to_string()))
            .collect()
    }

    fn names(table: &RouteTable) -> Vec<&str> {
        table.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_wildcard_is_anchored() {
        let m = Matcher::compile("admin.*").unwrap();
        assert!(m.matches("admin.users.index"));
        assert!(m.matches("admin.x"));
        assert!(!m.matches("administrator"));
    }

    #[test]
    fn test_literal_pattern_matches_exactly() {
        let m = Matcher::compile("home").unwrap();
        assert!(m.matches("home"));
        assert!(!m.matches("home.index"));
        assert!(!m.matches("my.home"));
    }

    #[test]
    fn test_dot_is_literal() {
        let m = Matcher::compile("users.show").unwrap();
        assert!(m.matches("users.show"));
        assert!(!m.matches("usersXshow"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Matcher::compile("admin.(").unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
    }

    #[test]
    fn test_only_keeps_matching_entries() {
        let routes = table(&[
            ("admin.users", "/admin/users"),
            ("home", "/"),
            ("admin.posts", "/admin/posts"),
        ]);
        let only = compile_patterns(&["admin.*".to_string()]).unwrap();

        let filtered = filter_routes(routes, &only, &[]);
        assert_eq!(names(&filtered), ["admin.users", "admin.posts"]);
    }

    #[test]
    fn test_except_drops_matching_entries() {
        let routes = table(&[("ignition.health", "/_ignition/health"), ("home", "/")]);
        let except = compile_patterns(&["ignition.*".to_string()]).unwrap();

        let filtered = filter_routes(routes, &[], &except);
        assert_eq!(names(&filtered), ["home"]);
    }

    #[test]
    fn test_except_applies_even_when_only_matches() {
        let routes = table(&[
            ("admin.users", "/admin/users"),
            ("admin.debug", "/admin/debug"),
        ]);
        let only = compile_patterns(&["admin.*".to_string()]).unwrap();
        let except = compile_patterns(&["admin.debug".to_string()]).unwrap();

        let filtered = filter_routes(routes, &only, &except);
        assert_eq!(names(&filtered), ["admin.users"]);
    }

    #[test]
    fn test_pattern_may_hit_path() {
        let routes = table(&[("health", "/up"), ("home", "/")]);
        let except = compile_patterns(&["/up".to_string()]).unwrap();

        let filtered = filter_routes(routes, &[], &except);
        assert_eq!(names(&filtered), ["home"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let routes = table(&[("a", "/a"), ("b", "/b")]);
        let filtered = filter_routes(routes.clone(), &[], &[]);
        assert_eq!(filtered, routes);
    }

    #[test]
    fn test_filter_preserves_order() {
        let routes = table(&[("c", "/c"), ("a", "/a"), ("b", "/b"), ("d", "/d")]);
        let except = compile_patterns(&["a".to_string()]).unwrap();

        let filtered = filter_routes(routes, &[], &except);
        assert_eq!(names(&filtered), ["c", "b", "d"]);
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let routes = table(&[("home", "/")]);
        let only = compile_patterns(&["admin.*".to_string()]).unwrap();

        let filtered = filter_routes(routes, &only, &[]);
        assert!(filtered.is_empty());
    }
}
