//! edges command - Rewrite edge keys and references

use std::path::Path;

use crate::core::hasher::{KeyHasher, DEFAULT_SEED};
use crate::core::rewrite::KeyRewriter;
use crate::engine::{create_output, open_input, Context, RunSummary, Runner};
use crate::transform::{RecordKind, RecordTransformer};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Rewrite an edge stream.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `output_path` - Where rewritten edges are written
/// * `input` - Input file (defaults to standard input)
pub fn edges(ctx: &Context, output_path: &Path, input: Option<&Path>) -> Result<RunSummary> {
    let verbosity = ctx.verbosity();
    let config = super::load_config(ctx)?;

    let mut records = create_output(output_path)?;
    output::debug(
        format!("Writing edges to {}", output_path.display()),
        verbosity,
    );

    let reader = open_input(input)?;
    let transformer = RecordTransformer::new(
        RecordKind::Edge,
        KeyRewriter::new(KeyHasher::new(DEFAULT_SEED)),
    );

    let summary = Runner::new(&transformer)
        .progress_interval(config.progress_interval())
        .verbosity(verbosity)
        .run(reader, &mut records, None)
        .context("Edge run aborted")?;

    Ok(summary)
}
