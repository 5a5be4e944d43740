//! Refresh and stats command handlers.

use anyhow::{Context, Result};
use std::io::Write;

use crate::app::NotesApp;
use crate::cli::output::write_stats;

pub fn handle_refresh<W: Write>(app: &mut NotesApp, verbose: bool, out: &mut W) -> Result<()> {
    let report = app
        .refresh_index()
        .with_context(|| "failed to refresh index")?;

    if report.skipped.is_empty() {
        writeln!(out, "Indexed {} notes", report.indexed)?;
    } else {
        writeln!(
            out,
            "Indexed {} notes, skipped {}",
            report.indexed,
            report.skipped.len()
        )?;
        if verbose {
            for skipped in &report.skipped {
                writeln!(out, "  skipped: {}: {}", skipped.path.display(), skipped.error)?;
            }
        }
    }
    Ok(())
}

pub fn handle_stats<W: Write>(app: &NotesApp, out: &mut W) -> Result<()> {
    write_stats(out, app.stats())?;
    Ok(())
}
