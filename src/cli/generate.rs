//! Generate command - one compilation pass.

use std::fs;

use anyhow::{Context, Result};

use crate::cli::GenerateArgs;
use crate::compile;
use crate::config::Config;
use crate::emit::{declaration, module};
use crate::source::{ArtisanSource, RouteSource};
use crate::{debug, log};

pub fn run(config: &Config, args: &GenerateArgs) -> Result<()> {
    let source = ArtisanSource::new(config);
    generate(config, &source, args.stdout, !args.no_declarations)
}

/// Run the pipeline and write (or print) the artifacts.
///
/// A declaration-write failure is logged and does not fail the run; the
/// module is the primary artifact.
pub fn generate(
    config: &Config,
    source: &dyn RouteSource,
    to_stdout: bool,
    with_declarations: bool,
) -> Result<()> {
    let compiled = compile::compile(source, config)?;
    let js = module::emit_module(&compiled, config.has_groups())?;

    if to_stdout {
        print!("{js}");
        return Ok(());
    }

    let module_path = config.module_path();
    if let Some(parent) = module_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&module_path, &js)
        .with_context(|| format!("Failed to write module to {}", module_path.display()))?;

    log!("module"; "{} ({} routes)", module_path.display(), compiled.routes.len());

    if with_declarations {
        let declarations_path = config.declarations_path();
        match declaration::write_declarations(&declarations_path, &compiled.params) {
            Ok(()) => log!("types"; "{}", declarations_path.display()),
            // Static typing is a side channel; the module stays usable
            Err(e) => log!("warning"; "declarations not refreshed: {}", e),
        }
    } else {
        debug!("types"; "skipped (--no-declarations)");
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
