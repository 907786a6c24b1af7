//! List command - inspect the filtered route table.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::ListArgs;
use crate::compile::{self, CompiledRoutes};
use crate::config::Config;
use crate::source::{ArtisanSource, RouteTable};

pub fn run(config: &Config, args: &ListArgs) -> Result<()> {
    let source = ArtisanSource::new(config);
    let compiled = compile::compile(&source, config)?;

    if args.json {
        println!("{}", render_json(&compiled, args.grouped)?);
    } else {
        print!("{}", render_table(&compiled, args.grouped));
    }

    Ok(())
}

fn render_json(compiled: &CompiledRoutes, grouped: bool) -> Result<String> {
    let json = if grouped {
        serde_json::to_string_pretty(&compiled.groups)?
    } else {
        serde_json::to_string_pretty(&compiled.routes)?
    };
    Ok(json)
}

fn render_table(compiled: &CompiledRoutes, grouped: bool) -> String {
    let mut out = String::new();

    if grouped {
        for (group, routes) in &compiled.groups {
            out.push_str(&format!("{}\n", group.bold()));
            push_routes(&mut out, routes, "  ");
        }
    } else {
        push_routes(&mut out, &compiled.routes, "");
    }

    out
}

fn push_routes(out: &mut String, routes: &RouteTable, indent: &str) {
    let width = routes.keys().map(String::len).max().unwrap_or(0);

    for (name, template) in routes {
        // Pad before styling so ANSI codes don't count against the width
        let padded = format!("{name:<width$}");
        out.push_str(&format!("{indent}{}  {}\n", padded.cyan(), template));
    }
}

// ============================================================================
// Tests
// ============================================================================
