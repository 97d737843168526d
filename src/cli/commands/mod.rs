//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves settings from flags, config file, and defaults
//! 2. Opens the output streams, then the input
//! 3. Hands the streams to the engine and reports the result
//!
//! Handlers do NOT rewrite records directly.

mod completion;
mod edges;
mod key;
mod vertices;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use edges::edges;
pub use key::{key, rewrite_key, KeyKind};
pub use vertices::vertices;

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::engine::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Vertices {
            output,
            table,
            input,
            missing_key,
        } => vertices::vertices(
            ctx,
            &output,
            table.as_deref(),
            input.as_deref(),
            missing_key.map(Into::into),
        )
        .map(|_| ()),
        Command::Edges { output, input } => {
            edges::edges(ctx, &output, input.as_deref()).map(|_| ())
        }
        Command::Key {
            value,
            edge,
            reference,
        } => {
            let kind = if edge {
                KeyKind::Edge
            } else if reference {
                KeyKind::Reference
            } else {
                KeyKind::Vertex
            };
            key::key(kind, &value)
        }
        Command::Completion { shell } => completion::completion(shell, &mut std::io::stdout()),
    }
}

/// Load configuration for a command, reporting warnings and the source file.
fn load_config(ctx: &Context) -> Result<Config> {
    let verbosity = ctx.verbosity();
    let result = Config::load(ctx.config.as_deref()).context("Failed to load config")?;

    for warning in &result.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }

    match result.config.loaded_from() {
        Some(path) => output::debug(format!("Using config {}", path.display()), verbosity),
        None => output::debug("No config file found, using defaults", verbosity),
    }

    Ok(result.config)
}
