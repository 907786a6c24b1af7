//! Path template placeholders.
//!
//! Templates mix literal segments with `{name}` and `{name?}` (optional)
//! placeholders. The raw template drives parameter-shape derivation; the
//! cleaned template (optional markers stripped) is what ships in the
//! runtime mapping.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// A named substitution site extracted from a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub optional: bool,
}

/// `{identifier}` with an optional `?` marker before the closing brace.
///
/// The identifier class is spelled out because the regex crate is built
/// without Unicode classes here, and placeholders are ASCII-only anyway.
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([0-9A-Za-z_]+)(\?)?\}").unwrap())
}

/// Extract parameters in left-to-right order of first appearance.
///
/// A repeated identifier contributes one entry; its first occurrence
/// fixes the optionality flag used for typing.
pub fn extract_params(template: &str) -> Vec<Param> {
    let mut seen = FxHashSet::default();
    let mut params = Vec::new();

    for caps in placeholder_re().captures_iter(template) {
        let name = &caps[1];
        if seen.insert(name.to_string()) {
            params.push(Param {
                name: name.to_string(),
                optional: caps.get(2).is_some(),
            });
        }
    }

    params
}

/// Strip optional markers: every `?` immediately before a `}` is removed,
/// so `{id?}` becomes `{id}`.
pub fn clean_template(template: &str) -> String {
    template.replace("?}", "}")
}

/// List `{word}` placeholders still present in a substituted path.
pub fn remaining_placeholders(path: &str) -> Vec<String> {
    placeholder_re()
        .find_iter(path)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, optional: bool) -> Param {
        Param {
            name: name.to_string(),
            optional,
        }
    }

    #[test]
    fn test_extract_required_param() {
        assert_eq!(extract_params("users/{id}"), [param("id", false)]);
    }

    #[test]
    fn test_extract_optional_param() {
        assert_eq!(extract_params("users/{id?}"), [param("id", true)]);
    }

    #[test]
    fn test_extract_preserves_order() {
        assert_eq!(
            extract_params("posts/{post}/comments/{comment?}"),
            [param("post", false), param("comment", true)]
        );
    }

    #[test]
    fn test_extract_no_params() {
        assert!(extract_params("users").is_empty());
        assert!(extract_params("/").is_empty());
    }

    #[test]
    fn test_placeholder_identifiers_are_ascii() {
        // The pattern itself must compile with the crate's regex features,
        // and non-ASCII identifiers are not placeholders
        assert_eq!(extract_params("users/{user_2}"), [param("user_2", false)]);
        assert!(extract_params("users/{café}").is_empty());
    }

    #[test]
    fn test_repeated_identifier_first_occurrence_wins() {
        assert_eq!(extract_params("a/{x}/b/{x?}"), [param("x", false)]);
        assert_eq!(extract_params("a/{x?}/b/{x}"), [param("x", true)]);
    }

    #[test]
    fn test_clean_strips_optional_marker() {
        assert_eq!(clean_template("users/{id?}"), "users/{id}");
        assert_eq!(clean_template("users/{id}"), "users/{id}");
        assert_eq!(clean_template("{a?}/{b?}"), "{a}/{b}");
    }

    #[test]
    fn test_optional_round_trip() {
        // Cleaning then deriving agrees: one optional `id`, cleaned template intact
        let raw = "users/{id?}";
        assert_eq!(extract_params(raw), [param("id", true)]);
        assert_eq!(clean_template(raw), "users/{id}");
    }

    #[test]
    fn test_remaining_placeholders() {
        assert_eq!(remaining_placeholders("users/5"), Vec::<String>::new());
        assert_eq!(remaining_placeholders("users/{id}"), ["{id}"]);
        assert_eq!(
            remaining_placeholders("{a}/x/{b}"),
            ["{a}".to_string(), "{b}".to_string()]
        );
    }
}
