//! ui::output
//!
//! Diagnostic output on standard error.
//!
//! # Design
//!
//! Standard output carries data only (usage text, `key` results), so every
//! diagnostic here goes to standard error. Progress respects the quiet
//! flag; per-record errors are always shown because they are the only
//! record of what was skipped.

use std::fmt::Display;

use crate::transform::RecordKind;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - progress and summary
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Report a rejected input line together with its content (always shown).
pub fn record_error(line_number: u64, reason: impl Display, line: &str) {
    eprintln!("error: line {}: {}\n{}", line_number, reason, line);
}

/// Report the running count of processed records.
pub fn progress(kind: RecordKind, count: u64, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("{}", format_progress(kind, count));
    }
}

/// Report the final count of processed records.
pub fn finished(kind: RecordKind, count: u64, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("{}\nFINISHED.", format_progress(kind, count));
    }
}

/// Format a progress line.
pub fn format_progress(kind: RecordKind, count: u64) -> String {
    format!("Have done {} {}.", count, kind.plural())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn progress_lines() {
        assert_eq!(
            format_progress(RecordKind::Vertex, 1_000_000),
            "Have done 1000000 vertices."
        );
        assert_eq!(format_progress(RecordKind::Edge, 0), "Have done 0 edges.");
    }
}
