//! engine::runner
//!
//! Line-by-line driver around a [`RecordTransformer`].
//!
//! # Lifecycle
//!
//! ```text
//! read line -> skip? -> transform -> write record [-> write audit entry]
//!                           |
//!                           +-> error: report line, count failure, continue
//! ```
//!
//! Each line is fully handled before the next one is read. Lines that are
//! empty, whitespace-only, or start with `#` are skipped. Lines that are not
//! UTF-8, not JSON objects, or violate the key grammar are reported and
//! skipped. I/O failures on the input or the output streams abort the run.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::config::DEFAULT_PROGRESS_INTERVAL;
use crate::transform::{RecordKind, RecordTransformer};
use crate::ui::output::{self, Verbosity};

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to open output '{path}': {source}")]
    OpenOutput { path: PathBuf, source: io::Error },

    #[error("failed to open input '{path}': {source}")]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Record kind of the stream
    pub kind: RecordKind,
    /// Records written to the output
    pub processed: u64,
    /// Records rejected and reported
    pub failed: u64,
    /// Blank and comment lines
    pub skipped: u64,
}

impl RunSummary {
    fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            processed: 0,
            failed: 0,
            skipped: 0,
        }
    }
}

/// Streams records through a transformer.
#[derive(Debug, Clone)]
pub struct Runner<'a> {
    transformer: &'a RecordTransformer,
    progress_interval: u64,
    verbosity: Verbosity,
}

impl<'a> Runner<'a> {
    /// Create a runner with default progress interval and normal verbosity.
    pub fn new(transformer: &'a RecordTransformer) -> Self {
        Self {
            transformer,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            verbosity: Verbosity::Normal,
        }
    }

    /// Set the number of successful records between progress lines.
    ///
    /// Zero disables progress lines.
    pub fn progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Set the diagnostic verbosity.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Process every line of `input`.
    ///
    /// Transformed records go to `records`; audit entries go to `audit`
    /// when both the sink and an entry are present. Both sinks are flushed
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing a sink fails.
    /// Malformed records are not errors.
    pub fn run<R: BufRead>(
        &self,
        mut input: R,
        records: &mut dyn Write,
        mut audit: Option<&mut dyn Write>,
    ) -> Result<RunSummary, RunError> {
        let kind = self.transformer.kind();
        let mut summary = RunSummary::new(kind);
        let mut buf = Vec::new();
        let mut line_number = 0u64;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).map_err(RunError::Read)? == 0 {
                break;
            }
            line_number += 1;

            let raw = strip_line_ending(&buf);
            let line = match std::str::from_utf8(raw) {
                Ok(line) => line,
                Err(e) => {
                    output::record_error(
                        line_number,
                        format!("invalid UTF-8: {}", e),
                        &String::from_utf8_lossy(raw),
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            if is_skipped(line) {
                summary.skipped += 1;
                continue;
            }

            match self.transformer.transform_line(line) {
                Ok(transformed) => {
                    write_json_line(records, &transformed.document)?;
                    if let (Some(sink), Some(entry)) =
                        (audit.as_deref_mut(), transformed.audit.as_ref())
                    {
                        write_json_line(sink, entry)?;
                    }
                    summary.processed += 1;

                    if self.progress_interval > 0
                        && summary.processed % self.progress_interval == 0
                    {
                        output::progress(kind, summary.processed, self.verbosity);
                    }
                }
                Err(e) => {
                    output::record_error(line_number, &e, line);
                    summary.failed += 1;
                }
            }
        }

        records.flush().map_err(RunError::Write)?;
        if let Some(sink) = audit {
            sink.flush().map_err(RunError::Write)?;
        }

        output::debug(
            format!(
                "{} lines read, {} skipped, {} failed",
                line_number, summary.skipped, summary.failed
            ),
            self.verbosity,
        );
        output::finished(kind, summary.processed, self.verbosity);

        Ok(summary)
    }
}

/// Whether a line carries no record (blank or `#` comment).
pub fn is_skipped(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

fn write_json_line<T>(sink: &mut dyn Write, value: &T) -> Result<(), RunError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_writer(&mut *sink, value).map_err(|e| RunError::Write(e.into()))?;
    sink.write_all(b"\n").map_err(RunError::Write)
}

/// Create (truncating) a buffered output file.
///
/// # Errors
///
/// Returns `RunError::OpenOutput` if the file cannot be created.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, RunError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| RunError::OpenOutput {
            path: path.to_path_buf(),
            source,
        })
}

/// Open the input stream: the given file, or standard input.
///
/// # Errors
///
/// Returns `RunError::OpenInput` if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, RunError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| RunError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rewrite::KeyRewriter;

    fn run(kind: RecordKind, input: &str) -> (RunSummary, String, String) {
        let transformer = RecordTransformer::new(kind, KeyRewriter::default());
        let runner = Runner::new(&transformer).verbosity(Verbosity::Quiet);
        let mut records = Vec::new();
        let mut audit = Vec::new();
        let summary = runner
            .run(input.as_bytes(), &mut records, Some(&mut audit))
            .unwrap();
        (
            summary,
            String::from_utf8(records).unwrap(),
            String::from_utf8(audit).unwrap(),
        )
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let (summary, records, audit) = run(RecordKind::Vertex, "# comment\n\n   \n");
        assert_eq!(summary.processed, 0);
        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.failed, 0);
        assert!(records.is_empty());
        assert!(audit.is_empty());
    }

    #[test]
    fn writes_record_and_audit_lines() {
        let (summary, records, audit) =
            run(RecordKind::Vertex, "{\"_key\":\"user:42\",\"name\":\"Ann\"}\n");
        assert_eq!(summary.processed, 1);
        assert_eq!(records, "{\"_key\":\"user:jvUItEYBMwI\",\"name\":\"Ann\"}\n");
        assert_eq!(audit, "{\"_key\":\"user:jvUItEYBMwI\",\"k\":\"user:42\"}\n");
    }

    #[test]
    fn bad_lines_are_skipped_and_counted() {
        let input = "{\"_key\":\"1\"}\nnot json\n[1]\n{\"_key\":\"2\"}";
        let (summary, records, audit) = run(RecordKind::Vertex, input);
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(records.lines().count(), 2);
        assert_eq!(audit.lines().count(), 2);
    }

    #[test]
    fn crlf_line_endings() {
        let (summary, records, _) = run(RecordKind::Edge, "{\"_from\":\"a/1\"}\r\n");
        assert_eq!(summary.processed, 1);
        assert!(records.ends_with("}\n"));
        assert!(!records.contains('\r'));
    }

    #[test]
    fn invalid_utf8_is_reported_not_fatal() {
        let transformer = RecordTransformer::new(RecordKind::Edge, KeyRewriter::default());
        let runner = Runner::new(&transformer).verbosity(Verbosity::Quiet);
        let input: &[u8] = b"{\"k\":\"\xff\"}\n{\"_key\":\"7\"}\n";
        let mut records = Vec::new();

        let summary = runner.run(input, &mut records, None).unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.processed, 1);
    }

    #[test]
    fn skipped_line_detection() {
        assert!(is_skipped(""));
        assert!(is_skipped("  \t"));
        assert!(is_skipped("# note"));
        assert!(is_skipped("#{\"_key\":\"1\"}"));
        assert!(!is_skipped(" #indented"));
        assert!(!is_skipped("{}"));
    }

    #[test]
    fn strips_only_line_endings() {
        assert_eq!(strip_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc "), b"abc ");
    }
}
