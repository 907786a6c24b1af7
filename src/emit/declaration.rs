//! TypeScript declaration synthesis.
//!
//! Writes the `Routes` type mapping each route name to its parameter
//! shape so the editor checks `route(...)` call sites. When the target
//! file already carries an `export type Routes = …` alias (a scaffold
//! the project ships), only that alias's right-hand side is replaced and
//! the surrounding declarations are preserved; otherwise a complete
//! standalone declaration file is written. Either way the write is a
//! full-file overwrite.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;

use crate::compile::template::Param;
use crate::error::Error;

const ALIAS_MARKER: &str = "export type Routes";

/// Render the parameter shape of a single route.
///
/// Parameters are typed permissively (`string | number`); optional ones
/// get the `?` marker. A route without parameters renders as `{}` so the
/// name still type-checks with no required params.
fn render_shape(params: &[Param]) -> String {
    if params.is_empty() {
        return "{}".to_string();
    }

    let fields: Vec<String> = params
        .iter()
        .map(|p| {
            let marker = if p.optional { "?" } else { "" };
            format!("{}{}: string | number", p.name, marker)
        })
        .collect();

    format!("{{ {} }}", fields.join(", "))
}

/// Render the `Routes` object type literal.
pub fn render_routes_type(params: &IndexMap<String, Vec<Param>>) -> String {
    if params.is_empty() {
        return "{}".to_string();
    }

    let mut ty = String::from("{\n");
    for (name, route_params) in params {
        ty.push_str("    \"");
        ty.push_str(name);
        ty.push_str("\": ");
        ty.push_str(&render_shape(route_params));
        ty.push_str(",\n");
    }
    ty.push('}');
    ty
}

/// Render a complete standalone declaration file.
pub fn render_declaration_file(params: &IndexMap<String, Vec<Param>>) -> String {
    format!(
        "// Generated by laroute. Do not edit.\n\
         export type Routes = {}\n\
         \n\
         declare global {{\n\
         \x20   const route: <Name extends keyof Routes>(name: Name, params?: Routes[Name]) => string\n\
         }}\n\
         \n\
         export {{}}\n",
        render_routes_type(params)
    )
}

/// Replace the right-hand side of the `export type Routes` alias in a
/// scaffold file, preserving everything around it.
///
/// Braces inside quoted property names (route names can contain any
/// character) do not count toward nesting depth.
///
/// Returns `None` when no well-formed alias is present.
pub fn substitute_alias(scaffold: &str, type_literal: &str) -> Option<String> {
    let marker = scaffold.find(ALIAS_MARKER)?;
    let open = marker + scaffold[marker..].find('{')?;

    let mut depth = 0usize;
    let mut close = None;
    let mut string_delim: Option<char> = None;
    let mut escaped = false;
    for (i, c) in scaffold[open..].char_indices() {
        if let Some(delim) = string_delim {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == delim {
                string_delim = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => string_delim = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + i);
                    break;
                }
            }
            _ => {}
        }
    }
    let close = close?;

    let mut out = String::with_capacity(scaffold.len() + type_literal.len());
    out.push_str(&scaffold[..open]);
    out.push_str(type_literal);
    out.push_str(&scaffold[close + 1..]);
    Some(out)
}

/// Write the declaration file, substituting into an existing scaffold
/// when one is present.
pub fn write_declarations(path: &Path, params: &IndexMap<String, Vec<Param>>) -> Result<(), Error> {
    let declaration_write = |source: io::Error| Error::DeclarationWrite {
        path: path.to_path_buf(),
        source,
    };

    let text = match fs::read_to_string(path) {
        Ok(existing) if existing.contains(ALIAS_MARKER) => {
            substitute_alias(&existing, &render_routes_type(params)).ok_or_else(|| {
                declaration_write(io::Error::other("scaffold `Routes` alias is malformed"))
            })?
        }
        _ => render_declaration_file(params),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(declaration_write)?;
    }

    fs::write(path, text).map_err(declaration_write)
}

// ============================================================================
// Tests
// ============================================================================
