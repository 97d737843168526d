//! engine
//!
//! Streams JSONL records through the transformer.
//!
//! # Architecture
//!
//! The engine owns everything between the command handlers and the pure
//! rewriting core: opening streams, reading lines, recovering from bad
//! records, writing results, and reporting progress.
//!
//! # Invariants
//!
//! - Output files are opened before any input is read
//! - A record is written completely or not at all
//! - Per-record failures never abort the run; I/O failures always do
//!
//! # Example
//!
//! ```
//! use graphkeys::core::rewrite::KeyRewriter;
//! use graphkeys::engine::Runner;
//! use graphkeys::transform::{RecordKind, RecordTransformer};
//! use graphkeys::ui::output::Verbosity;
//!
//! let transformer = RecordTransformer::new(RecordKind::Edge, KeyRewriter::default());
//! let mut out = Vec::new();
//! let summary = Runner::new(&transformer)
//!     .verbosity(Verbosity::Quiet)
//!     .run(&b"{\"_from\":\"user/42\"}\n"[..], &mut out, None)
//!     .unwrap();
//!
//! assert_eq!(summary.processed, 1);
//! assert_eq!(out, b"{\"_from\":\"user/jvUItEYBMwI\"}\n");
//! ```

pub mod runner;

pub use runner::{create_output, is_skipped, open_input, RunError, RunSummary, Runner};

use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file path.
    pub config: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (errors only).
    pub quiet: bool,
}

impl Context {
    /// Diagnostic verbosity implied by the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}
