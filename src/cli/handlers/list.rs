//! List and search command handlers.

use anyhow::Result;
use std::io::Write;

use crate::app::{NotesApp, SearchKind};
use crate::cli::output::write_notes;
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::Note;

pub fn handle_list<W: Write>(args: &ListArgs, app: &NotesApp, out: &mut W) -> Result<()> {
    let notes: Vec<&Note> = app.list_notes().iter().collect();
    write_notes(out, &notes, args.format)?;
    Ok(())
}

pub fn handle_search<W: Write>(args: &SearchArgs, app: &NotesApp, out: &mut W) -> Result<()> {
    let kind = SearchKind::from(args.kind.as_str());
    let notes = app.search(&args.query, kind);
    write_notes(out, &notes, args.format)?;
    Ok(())
}
