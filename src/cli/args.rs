//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Errors only on standard error

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::transform::MissingKeyPolicy;

/// hasher - Shorten vertex and edge keys of a JSONL graph dump
#[derive(Parser, Debug)]
#[command(name = "hasher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only report rejected records; no progress or summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments and for `--help` /
    /// `--version`, which the caller renders and maps to an exit status.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite vertex keys and write the audit table
    #[command(
        name = "vertices",
        long_about = "Rewrite vertex documents read line by line from standard input.\n\n\
            Each `_key` is replaced by its hashed form (a `prefix:` before the first \
            colon is kept), `_id` and `_rev` are dropped, and every other field is \
            copied unchanged. For each vertex a line {\"_key\": <new>, \"k\": <old>} \
            is appended to the audit table.\n\n\
            Blank lines and lines starting with '#' are ignored. Lines that cannot be \
            parsed or rewritten are reported on standard error and skipped.",
        after_help = "\
EXAMPLES:
    # Rewrite vertices, audit table goes to table.jsonl
    hasher vertices users.out.jsonl < users.jsonl

    # Explicit audit table location
    hasher vertices users.out.jsonl users.table.jsonl < users.jsonl

    # Keep vertices that have no _key instead of rejecting them
    hasher vertices out.jsonl --missing-key pass-through --input users.jsonl"
    )]
    Vertices {
        /// Output file for rewritten vertices
        #[arg(value_name = "VERTEX_OUT")]
        output: PathBuf,

        /// Output file for the audit table (default: table.jsonl)
        #[arg(value_name = "TABLE_OUT")]
        table: Option<PathBuf>,

        /// Read from this file instead of standard input
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// How to handle vertices without a _key field
        #[arg(long, value_enum, value_name = "POLICY")]
        missing_key: Option<MissingKeyArg>,
    },

    /// Rewrite edge keys and _from/_to references
    #[command(
        name = "edges",
        long_about = "Rewrite edge documents read line by line from standard input.\n\n\
            `_from` and `_to` keep their collection name and get the same hashed key \
            the referenced vertex received. An edge `_key` of the form \
            prefix:middle:suffix has only its middle segment hashed; a key without \
            colons is hashed whole and a key with a single colon is rejected. `_id` \
            and `_rev` are dropped.",
        after_help = "\
EXAMPLES:
    # Rewrite edges
    hasher edges follows.out.jsonl < follows.jsonl

    # Vertices and edges may be processed independently, in any order
    hasher vertices v.out.jsonl < v.jsonl & hasher edges e.out.jsonl < e.jsonl"
    )]
    Edges {
        /// Output file for rewritten edges
        #[arg(value_name = "EDGE_OUT")]
        output: PathBuf,

        /// Read from this file instead of standard input
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
    },

    /// Print the rewritten form of a single key
    #[command(
        name = "key",
        long_about = "Print the rewritten form of a single vertex key, edge key, or \
            collection/key reference, exactly as `vertices` and `edges` would write it.",
        after_help = "\
EXAMPLES:
    hasher key user:42
    hasher key --edge e:99:a
    hasher key --reference user/42"
    )]
    Key {
        /// Key or reference to rewrite
        value: String,

        /// Treat the value as an edge key
        #[arg(long, conflicts_with = "reference")]
        edge: bool,

        /// Treat the value as a collection/key reference
        #[arg(long)]
        reference: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    hasher completion bash > /etc/bash_completion.d/hasher
    hasher completion zsh > \"${fpath[1]}/_hasher\""
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Handling of vertices without a _key field
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum MissingKeyArg {
    /// Report and skip the vertex
    Reject,
    /// Write the vertex without an audit entry
    PassThrough,
}

impl From<MissingKeyArg> for MissingKeyPolicy {
    fn from(arg: MissingKeyArg) -> Self {
        match arg {
            MissingKeyArg::Reject => MissingKeyPolicy::Reject,
            MissingKeyArg::PassThrough => MissingKeyPolicy::PassThrough,
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
