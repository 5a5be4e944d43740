//! Tag command handlers (tags, set-tags, add-tags, remove-tags).

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Write;

use super::tags_from_args;
use crate::app::{NotesApp, SearchKind};
use crate::cli::output::write_tags;
use crate::cli::{SetTagsArgs, TagEditArgs, TagsArgs};

pub fn handle_tags<W: Write>(args: &TagsArgs, app: &NotesApp, out: &mut W) -> Result<()> {
    let tags: Vec<(String, Option<usize>)> = match &args.note {
        Some(note) => app
            .note_tags(note)
            .with_context(|| format!("failed to read tags of '{}'", note))?
            .into_iter()
            .map(|tag| (tag, None))
            .collect(),
        None => app
            .all_tags()
            .into_iter()
            .map(|tag| {
                let count = args.counts.then(|| tagged_note_count(app, tag));
                (tag.to_string(), count)
            })
            .collect(),
    };

    write_tags(out, &tags, args.format)?;
    Ok(())
}

pub fn handle_set_tags<W: Write>(args: &SetTagsArgs, app: &mut NotesApp, out: &mut W) -> Result<()> {
    let tags = tags_from_args(&args.tags);
    app.update_note_tags(&args.note, tags)
        .with_context(|| format!("failed to set tags on '{}'", args.note))?;
    print_tags(&args.note, app, out)
}

pub fn handle_add_tags<W: Write>(args: &TagEditArgs, app: &mut NotesApp, out: &mut W) -> Result<()> {
    let tags = tags_from_args(&args.tags);
    app.add_tags_to_note(&args.note, &tags)
        .with_context(|| format!("failed to add tags to '{}'", args.note))?;
    print_tags(&args.note, app, out)
}

pub fn handle_remove_tags<W: Write>(
    args: &TagEditArgs,
    app: &mut NotesApp,
    out: &mut W,
) -> Result<()> {
    let tags = tags_from_args(&args.tags);
    app.remove_tags_from_note(&args.note, &tags)
        .with_context(|| format!("failed to remove tags from '{}'", args.note))?;
    print_tags(&args.note, app, out)
}

/// Counts distinct notes carrying `tag`. A note listing the tag in two
/// casings counts once.
fn tagged_note_count(app: &NotesApp, tag: &str) -> usize {
    app.search(tag, SearchKind::Tag)
        .into_iter()
        .map(|note| note.path())
        .collect::<HashSet<_>>()
        .len()
}

fn print_tags<W: Write>(note: &str, app: &NotesApp, out: &mut W) -> Result<()> {
    let tags = app.note_tags(note)?;
    if tags.is_empty() {
        writeln!(out, "{note}: no tags")?;
    } else {
        writeln!(out, "{note}: {}", tags.join(", "))?;
    }
    Ok(())
}
