//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT read or rewrite records directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::engine`], which streams records through the transformer.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::engine;
use anyhow::Result;
use clap::CommandFactory;

/// Run the CLI application with parsed arguments.
///
/// This is the main entry point called from `main.rs`. Without a command
/// the usage text is printed to standard output.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = engine::Context {
        config: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    match cli.command {
        Some(command) => commands::dispatch(command, &ctx),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
