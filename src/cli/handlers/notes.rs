//! Create, show, delete, and edit command handlers.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::Command;

use super::read_piped_stdin;
use crate::app::NotesApp;
use crate::cli::config::Config;
use crate::cli::{CreateArgs, DeleteArgs, EditArgs, ShowArgs};

pub fn handle_create<W: Write>(args: &CreateArgs, app: &mut NotesApp, out: &mut W) -> Result<()> {
    let content = match &args.content {
        Some(content) => content.clone(),
        None => read_piped_stdin()?.unwrap_or_default(),
    };

    let path = app
        .create_note(&args.name, &content)
        .with_context(|| format!("failed to create note '{}'", args.name))?;

    writeln!(out, "Created: {}", path.display())?;
    Ok(())
}

pub fn handle_show<W: Write>(args: &ShowArgs, app: &NotesApp, out: &mut W) -> Result<()> {
    let note = app
        .get_note(&args.note)
        .with_context(|| format!("failed to read note '{}'", args.note))?;

    writeln!(out, "# {}", note.name())?;
    writeln!(out)?;
    writeln!(
        out,
        "Path: {}  Modified: {}",
        note.path().display(),
        note.modified().format("%Y-%m-%d %H:%M")
    )?;
    if !note.tags().is_empty() {
        writeln!(out, "Tags: {}", note.tags().join(", "))?;
    }
    writeln!(out)?;

    if !note.content().is_empty() {
        writeln!(out, "{}", note.content())?;
    }
    Ok(())
}

/// Deletes a note, asking for confirmation on `input` unless `--yes` is set.
pub fn handle_delete<R: BufRead, W: Write>(
    args: &DeleteArgs,
    app: &mut NotesApp,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    // Resolve first so a typo fails before the prompt.
    let note = app
        .get_note(&args.note)
        .with_context(|| format!("failed to delete note '{}'", args.note))?;

    if !args.yes {
        write!(out, "Delete '{}'? (y/N) ", note.name())?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !is_yes(&answer) {
            writeln!(out, "Cancelled.")?;
            return Ok(());
        }
    }

    app.delete_note(note.path())
        .with_context(|| format!("failed to delete note '{}'", args.note))?;
    writeln!(out, "Deleted: {}", note.name())?;
    Ok(())
}

/// Accepts `y` or `yes` in any case.
pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Launches an editor on a file (mocked in tests).
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Editor from the config, `$EDITOR`, or `$VISUAL`.
struct ConfiguredEditor<'a>(&'a Config);

impl EditorLauncher for ConfiguredEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        let editor = self.0.editor();

        // Parse editor command (may include args like "code --wait")
        let mut parts = editor.split_whitespace();
        let Some(cmd) = parts.next() else {
            bail!("editor command is empty");
        };

        let status = Command::new(cmd)
            .args(parts)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", editor))?;

        if !status.success() {
            bail!("editor '{}' exited with non-zero status", editor);
        }
        Ok(())
    }
}

pub fn handle_edit<W: Write>(
    args: &EditArgs,
    app: &mut NotesApp,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let content = match &args.content {
        Some(content) => Some(content.clone()),
        None => read_piped_stdin()?,
    };
    edit_note(&args.note, content, app, &ConfiguredEditor(config), out)
}

/// Replaces a note's content with `content`, or opens it in `editor` when
/// there is none and re-indexes afterwards.
pub(crate) fn edit_note<E: EditorLauncher, W: Write>(
    name: &str,
    content: Option<String>,
    app: &mut NotesApp,
    editor: &E,
    out: &mut W,
) -> Result<()> {
    let note = app
        .get_note(name)
        .with_context(|| format!("failed to edit note '{}'", name))?;

    match content {
        Some(content) => {
            app.update_note_content(note.path(), &content)
                .with_context(|| format!("failed to edit note '{}'", name))?;
        }
        None => {
            editor.open(note.path())?;
            app.refresh_index()
                .with_context(|| "failed to refresh index after editing")?;
        }
    }

    writeln!(out, "Edited: {}", note.name())?;
    Ok(())
}
