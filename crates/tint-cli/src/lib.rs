//! Library half of the `tint` binary.
//!
//! Argument definitions, logging setup and the command implementations live
//! here so integration tests can drive them without spawning a process.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands};

/// Runs a parsed command.
pub fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Balance(args) => commands::balance::run(args),
        Commands::Gamma(args) => commands::gamma::run(args),
        Commands::Blend(args) => commands::blend::run(args),
        Commands::Resize(args) => commands::resize::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
