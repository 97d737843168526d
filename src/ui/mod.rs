//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Diagnostics, progress, and summaries on standard error

pub mod output;
