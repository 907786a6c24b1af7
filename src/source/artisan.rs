//! Artisan-backed route source.
//!
//! Shells out to the configured route-listing command (by default
//! `php artisan route:list --json`) and parses its stdout. Any output on
//! the diagnostic stream is treated as a fatal failure; no partial route
//! table is ever returned.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Error;
use crate::exec::{Cmd, locate};
use crate::source::{RawRoute, RouteSource};

/// Route source backed by the framework's route-listing command.
pub struct ArtisanSource {
    command: Vec<String>,
    cwd: PathBuf,
}

impl ArtisanSource {
    pub fn new(config: &Config) -> Self {
        Self {
            command: config.source.command.clone(),
            cwd: config.root.clone(),
        }
    }

    fn display_command(&self) -> String {
        self.command.join(" ")
    }

    fn external_tool(&self, message: impl Into<String>) -> Error {
        Error::ExternalTool {
            command: self.display_command(),
            message: message.into(),
        }
    }
}

impl RouteSource for ArtisanSource {
    fn fetch(&self) -> Result<Vec<RawRoute>, Error> {
        // Config validation guarantees a non-empty command
        let program = self.command.first().map(String::as_str).unwrap_or("php");
        locate(program).map_err(|e| self.external_tool(e))?;

        let output = Cmd::from_slice(&self.command)
            .cwd(&self.cwd)
            .run()
            .map_err(|e| self.external_tool(e.to_string()))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            return Err(self.external_tool(stderr.trim().to_string()));
        }

        if !output.status.success() {
            return Err(self.external_tool(format!("exited with {}", output.status)));
        }

        let routes: Vec<RawRoute> = serde_json::from_slice(&output.stdout)?;
        Ok(routes)
    }
}

// ============================================================================
// Tests
// ============================================================================
