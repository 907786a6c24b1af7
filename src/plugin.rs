//! Virtual module conventions for the hosting bundler.
//!
//! The bundler asks for `virtual:laravel/routes`, resolves it to the
//! `\0`-prefixed internal id, and loads the compiled module text under
//! that id. These helpers express that lifecycle as plain functions so a
//! plugin shim only forwards calls.

use crate::compile;
use crate::config::Config;
use crate::emit::module::emit_module;
use crate::error::Error;
use crate::source::RouteSource;

/// Public specifier consuming code imports.
pub const MODULE_ID: &str = "virtual:laravel/routes";

/// Internal id (`\0` prefix marks the module as virtual).
pub const RESOLVED_ID: &str = "\0virtual:laravel/routes";

/// Map the public specifier to the internal id.
pub fn resolve_id(source: &str) -> Option<&'static str> {
    (source == MODULE_ID).then_some(RESOLVED_ID)
}

/// Produce the module text for the internal id.
///
/// Returns `None` for ids this plugin does not own. Compilation runs
/// from scratch on every call; invalidation is the host's concern.
pub fn load(
    id: &str,
    source: &dyn RouteSource,
    config: &Config,
) -> Option<Result<String, Error>> {
    if id != RESOLVED_ID {
        return None;
    }

    Some(
        compile::compile(source, config)
            .and_then(|compiled| emit_module(&compiled, config.has_groups())),
    )
}

// ============================================================================
// Tests
// ============================================================================
