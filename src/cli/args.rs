//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Laravel route helper generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: laroute.toml)
    #[arg(short = 'C', long, default_value = "laroute.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compile the route module and declaration file once
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Recompile whenever files under the routes directory change
    #[command(visible_alias = "w")]
    Watch {
        #[command(flatten)]
        args: WatchArgs,
    },

    /// Print the filtered route table
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Print the compiled module to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Skip refreshing the declaration file
    #[arg(long)]
    pub no_declarations: bool,
}

/// Watch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct WatchArgs {
    /// Debounce window in milliseconds (overrides [watch].debounce_ms)
    #[arg(short, long)]
    pub debounce: Option<u64>,
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Show routes partitioned per the [groups] config
    #[arg(short, long)]
    pub grouped: bool,

    /// Output raw JSON instead of an aligned table
    #[arg(short, long)]
    pub json: bool,
}
