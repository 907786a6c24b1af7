//! Command-line interface.

mod args;
pub mod generate;
pub mod list;
pub mod watch;

pub use args::{Cli, Commands, GenerateArgs, ListArgs, WatchArgs};
