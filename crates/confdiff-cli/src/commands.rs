use anyhow::Context;
use confdiff_core::DiffReport;
use confdiff_render::{render_json, render_text};

use crate::cli::{Cli, OutputFormat};

/// Load both documents, compare them, and print the report.
///
/// Returns `Ok` whenever the comparison itself succeeds, differences or not;
/// only loader failures and non-mapping roots exit non-zero.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let current = confdiff_loader::load(&cli.current)?;
    let past = confdiff_loader::load(&cli.past)?;

    let report = DiffReport::compute(&current, &past).context("comparing documents")?;
    tracing::debug!(
        changed = report.classification.changed.len(),
        records = report.records.len(),
        "comparison complete"
    );

    let output = match cli.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    print!("{}", output);
    Ok(())
}
