//! laroute - compile Laravel named routes into a typed client route helper.

#![allow(dead_code)]

mod cli;
mod compile;
mod config;
mod emit;
mod error;
mod exec;
mod logger;
mod plugin;
mod runtime;
mod source;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli.config)?;

    match &cli.command {
        Commands::Generate { args } => cli::generate::run(&config, args),
        Commands::Watch { args } => cli::watch::run(&config, args),
        Commands::List { args } => cli::list::run(&config, args),
    }
}
