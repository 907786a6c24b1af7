//! Compilation pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while compiling the route module.
///
/// `DeclarationWrite` is the only non-fatal variant: a module can still
/// be produced when the declaration file could not be refreshed.
#[derive(Debug, Error)]
pub enum Error {
    /// The route source command failed or wrote to its diagnostic stream.
    #[error("route source `{command}` failed: {message}")]
    ExternalTool { command: String, message: String },

    /// The route source produced output that is not a valid route table.
    #[error("route source produced invalid JSON")]
    Source(#[from] serde_json::Error),

    /// A filter or group pattern did not compile to a matcher.
    #[error("invalid route pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The declaration file could not be written.
    #[error("failed to write declarations to `{path}`")]
    DeclarationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_tool_display() {
        let err = Error::ExternalTool {
            command: "php artisan route:list --json".into(),
            message: "could not open input file: artisan".into(),
        };
        let display = format!("{err}");
        assert!(display.contains("php artisan route:list --json"));
        assert!(display.contains("could not open input file"));
    }

    #[test]
    fn test_pattern_display_names_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::Pattern {
            pattern: "admin.(".into(),
            source,
        };
        assert!(format!("{err}").contains("admin.("));
    }
}
