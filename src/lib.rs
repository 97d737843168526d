//! graphkeys - Shorten the keys of a JSONL graph dump
//!
//! Rewrites vertex keys, edge keys, and `_from`/`_to` references of
//! ArangoDB-style JSONL exports into short deterministic hash tokens, while
//! keeping partition prefixes and edge suffixes readable. Vertex runs also
//! write an audit table mapping each new key back to the original.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Line-by-line streaming driver and error recovery
//! - [`transform`] - Per-record field policy for vertices and edges
//! - [`core`] - Token encoding, key hashing, rewriting grammar, config
//! - [`ui`] - Diagnostics on standard error
//!
//! # Correctness Invariants
//!
//! 1. The same local key hashes to the same token in every run
//! 2. Edge references agree with the rewritten keys of their vertices
//! 3. Output never contains `_id` or `_rev`
//! 4. A malformed record is reported and skipped, never half-written

pub mod cli;
pub mod core;
pub mod engine;
pub mod transform;
pub mod ui;
