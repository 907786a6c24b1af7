//! Project configuration for `laroute.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[source]` | Route-listing command to invoke                  |
//! | `[filter]` | `only` / `except` route patterns                 |
//! | `[groups]` | Named route partitions (declaration order kept)  |
//! | `[output]` | Module and declaration file destinations         |
//! | `[watch]`  | Routes directory and debounce for watch mode     |
//!
//! A missing config file is not an error; every field has a default that
//! matches a stock Laravel + Vite project.

mod error;

pub use error::ConfigError;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::log;

/// Built-in deny pattern for the framework's diagnostic routes.
const BUILTIN_EXCEPT: &str = "ignition.*";

// ============================================================================
// Root configuration
// ============================================================================

/// Root configuration structure representing laroute.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Route source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Route filtering patterns
    #[serde(default)]
    pub filter: FilterConfig,

    /// Named route groups, in declaration order
    #[serde(default)]
    pub groups: IndexMap<String, Vec<String>>,

    /// Output file destinations
    #[serde(default)]
    pub output: OutputConfig,

    /// Watch mode settings
    #[serde(default)]
    pub watch: WatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::from("."),
            source: SourceConfig::default(),
            filter: FilterConfig::default(),
            groups: IndexMap::new(),
            output: OutputConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// `[source]` - the command producing the route table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Command and arguments, executed from the project root
    #[serde(default = "default_command")]
    pub command: Vec<String>,
}

fn default_command() -> Vec<String> {
    ["php", "artisan", "route:list", "--json"]
        .map(str::to_string)
        .to_vec()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
        }
    }
}

/// `[filter]` - allow-list / deny-list route patterns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Keep only routes matching one of these patterns
    #[serde(default)]
    pub only: Vec<String>,

    /// Drop routes matching one of these patterns (the built-in
    /// `ignition.*` pattern is always applied ahead of this list)
    #[serde(default)]
    pub except: Vec<String>,
}

/// `[output]` - where generated artifacts land
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Module file path, relative to the project root unless absolute
    #[serde(default = "default_module")]
    pub module: String,

    /// Declaration file path, relative to the project root unless absolute
    #[serde(default = "default_declarations")]
    pub declarations: String,
}

fn default_module() -> String {
    "resources/js/routes.js".to_string()
}

fn default_declarations() -> String {
    "resources/js/routes.d.ts".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            module: default_module(),
            declarations: default_declarations(),
        }
    }
}

/// `[watch]` - watch mode settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Directory (relative to the project root) whose changes trigger
    /// recompilation
    #[serde(default = "default_watch_dir")]
    pub dir: String,

    /// Debounce window in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_watch_dir() -> String {
    "routes".to_string()
}

fn default_debounce_ms() -> u64 {
    200
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            dir: default_watch_dir(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

// ============================================================================
// Loading and validation
// ============================================================================

impl Config {
    /// Load configuration from the given path.
    ///
    /// A missing file yields the defaults rooted at the path's parent
    /// directory. Unknown keys are warnings, not errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        if !path.exists() {
            let mut config = Self::default();
            config.root = root;
            return Ok(config);
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        let de = toml::de::Deserializer::new(&raw);
        let mut config: Config = serde_ignored::deserialize(de, |key| {
            log!("config"; "unknown key `{}` in {}", key, path.display());
        })?;

        config.config_path = path.to_path_buf();
        config.root = root;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.source.command.is_empty() || self.source.command[0].trim().is_empty() {
            errors.push("source.command must name a program".to_string());
        }

        for pattern in self.filter.only.iter().chain(&self.filter.except) {
            if pattern.trim().is_empty() {
                errors.push("filter patterns must be non-empty".to_string());
            }
        }

        for (name, patterns) in &self.groups {
            if name == crate::compile::group::DEFAULT_GROUP {
                errors.push("group name `default` is reserved for unmatched routes".to_string());
            } else if !is_js_identifier(name) {
                errors.push(format!(
                    "group name `{name}` is not a valid JavaScript identifier"
                ));
            } else if JS_RESERVED.contains(&name.as_str()) {
                errors.push(format!(
                    "group name `{name}` is a reserved word in JavaScript"
                ));
            }
            if patterns.is_empty() {
                errors.push(format!("group `{name}` has no patterns"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    // ------------------------------------------------------------------
    // Derived accessors
    // ------------------------------------------------------------------

    /// Deny patterns with the built-in diagnostic-route pattern prepended.
    pub fn effective_except(&self) -> Vec<String> {
        let mut except = Vec::with_capacity(self.filter.except.len() + 1);
        except.push(BUILTIN_EXCEPT.to_string());
        except.extend(self.filter.except.iter().cloned());
        except
    }

    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn module_path(&self) -> PathBuf {
        self.expand(&self.output.module)
    }

    pub fn declarations_path(&self) -> PathBuf {
        self.expand(&self.output.declarations)
    }

    pub fn routes_dir(&self) -> PathBuf {
        self.root.join(&self.watch.dir)
    }

    /// Tilde-expand a configured path; relative paths are rooted at the
    /// project root.
    fn expand(&self, path: &str) -> PathBuf {
        let expanded = shellexpand::tilde(path);
        let expanded = Path::new(expanded.as_ref());
        if expanded.is_absolute() {
            expanded.to_path_buf()
        } else {
            self.root.join(expanded)
        }
    }
}

/// Words that cannot be `export const` names. Covers the ECMAScript
/// reserved words plus the ones only reserved in strict/module code
/// (modules are always strict).
const JS_RESERVED: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Group names become JS export identifiers, so they must parse as one.
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("laroute.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.source.command,
            ["php", "artisan", "route:list", "--json"]
        );
        assert_eq!(config.output.module, "resources/js/routes.js");
        assert_eq!(config.watch.dir, "routes");
        assert!(!config.has_groups());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("laroute.toml")).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.watch.debounce_ms, 200);
    }

    #[test]
    fn test_load_parses_sections() {
        let (_dir, path) = write_config(
            r#"
[filter]
only = ["admin.*"]
except = ["admin.debug"]

[groups]
admin = ["admin.*"]
api = ["api.*"]

[output]
module = "resources/ts/routes.js"
"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.filter.only, ["admin.*"]);
        let groups: Vec<_> = config.groups.keys().cloned().collect();
        assert_eq!(groups, ["admin", "api"]);
        assert!(config.module_path().ends_with("resources/ts/routes.js"));
    }

    #[test]
    fn test_effective_except_prepends_builtin() {
        let mut config = Config::default();
        config.filter.except = vec!["debugbar.*".to_string()];
        assert_eq!(config.effective_except(), ["ignition.*", "debugbar.*"]);
    }

    #[test]
    fn test_reserved_group_name_rejected() {
        let (_dir, path) = write_config("[groups]\ndefault = [\"web.*\"]\n");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(format!("{err}").contains("reserved"));
    }

    #[test]
    fn test_reserved_word_group_rejected() {
        // `export const new = …` would never parse in the emitted module
        let (_dir, path) = write_config("[groups]\nnew = [\"api.*\"]\n");
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err}").contains("reserved word"));

        let (_dir, path) = write_config("[groups]\nclass = [\"api.*\"]\n");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_invalid_group_identifier_rejected() {
        let (_dir, path) = write_config("[groups]\n\"my-group\" = [\"web.*\"]\n");
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err}").contains("identifier"));
    }

    #[test]
    fn test_empty_source_command_rejected() {
        let (_dir, path) = write_config("[source]\ncommand = []\n");
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err}").contains("source.command"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let (_dir, path) = write_config("[filter\nonly = [\n");
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            ConfigError::Toml(_)
        ));
    }

    #[test]
    fn test_paths_are_rooted_at_config_parent() {
        let (dir, path) = write_config("");
        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.declarations_path(),
            dir.path().join("resources/js/routes.d.ts")
        );
        assert_eq!(config.routes_dir(), dir.path().join("routes"));
    }

    #[test]
    fn test_is_js_identifier() {
        assert!(is_js_identifier("admin"));
        assert!(is_js_identifier("_private"));
        assert!(is_js_identifier("$api2"));
        assert!(!is_js_identifier("2fast"));
        assert!(!is_js_identifier("my-group"));
        assert!(!is_js_identifier(""));
    }
}
