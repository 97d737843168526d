//! vertices command - Rewrite vertex keys and write the audit table

use std::path::Path;

use crate::core::hasher::{KeyHasher, DEFAULT_SEED};
use crate::core::rewrite::KeyRewriter;
use crate::engine::{create_output, open_input, Context, RunSummary, Runner};
use crate::transform::{MissingKeyPolicy, RecordKind, RecordTransformer};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Rewrite a vertex stream.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `output_path` - Where rewritten vertices are written
/// * `table` - Audit table path (defaults to the configured table path)
/// * `input` - Input file (defaults to standard input)
/// * `missing_key` - Policy for vertices without `_key` (defaults to config)
pub fn vertices(
    ctx: &Context,
    output_path: &Path,
    table: Option<&Path>,
    input: Option<&Path>,
    missing_key: Option<MissingKeyPolicy>,
) -> Result<RunSummary> {
    let verbosity = ctx.verbosity();
    let config = super::load_config(ctx)?;

    let table_path = table
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.table_path());
    let policy = missing_key.unwrap_or_else(|| config.missing_key());

    // Both outputs must open before any input is consumed.
    let mut records = create_output(output_path)?;
    let mut audit = create_output(&table_path)?;
    output::debug(
        format!(
            "Writing vertices to {}, audit table to {}",
            output_path.display(),
            table_path.display()
        ),
        verbosity,
    );
    output::debug(format!("Missing _key policy: {}", policy.name()), verbosity);

    let reader = open_input(input)?;
    let transformer = RecordTransformer::new(
        RecordKind::Vertex,
        KeyRewriter::new(KeyHasher::new(DEFAULT_SEED)),
    )
    .with_missing_key(policy);

    let summary = Runner::new(&transformer)
        .progress_interval(config.progress_interval())
        .verbosity(verbosity)
        .run(reader, &mut records, Some(&mut audit))
        .context("Vertex run aborted")?;

    Ok(summary)
}
