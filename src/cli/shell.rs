//! Line-oriented interactive shell over the application facade.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

use crate::app::{NotesApp, SearchKind};
use crate::cli::handlers::is_yes;
use crate::cli::output::{write_note_details, write_stats};
use crate::domain::{Note, parse_tag_list};

/// Line that ends multi-line content input.
const END_OF_INPUT: &str = ".";

const HELP: &str = "\
Commands:
  help                          - Show this help
  create <name>                 - Create a new note
  list                          - List all notes
  search <query>                - Search notes by content
  search-tag <tag>              - Search notes by tag
  show-tags [note]              - Show all tags or tags for specific note
  set-tags <note> [tag1,tag2]   - Set note tags (replace all)
  add-tags <note> <tag1,tag2>   - Add tags to a note
  remove-tags <note> <tag1,tag2> - Remove tags from a note
  list-tags                     - List all unique tags
  delete <note>                 - Delete a note
  edit <note>                   - Edit note content
  stats                         - Show index statistics
  refresh                       - Refresh the index
  clear                         - Clear the screen
  quit                          - Exit the shell";

/// A parsed shell command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Create { name: String },
    List,
    Search { query: String },
    SearchTag { tag: String },
    ShowTags { note: Option<String> },
    SetTags { note: String, tags: Vec<String> },
    AddTags { note: String, tags: Vec<String> },
    RemoveTags { note: String, tags: Vec<String> },
    ListTags,
    Delete { note: String },
    Edit { note: String },
    Stats,
    Refresh,
    Clear,
    Quit,
}

/// Errors from parsing a shell command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: {0}\nType 'help' for available commands")]
    Unknown(String),
}

/// Returns the first argument, or a usage error when there is none.
fn required(args: &[&str], usage: &'static str) -> Result<String, ParseCommandError> {
    args.first()
        .map(|s| s.to_string())
        .ok_or(ParseCommandError::Usage(usage))
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            return Err(ParseCommandError::Empty);
        };

        let rest = || args.join(" ");
        let tags_after_note = || parse_tag_list(&args[1..].join(" "));

        let parsed = match command {
            "help" | "h" => ShellCommand::Help,
            "create" | "c" => {
                required(args, "create <name>")?;
                ShellCommand::Create { name: rest() }
            }
            "list" | "l" => ShellCommand::List,
            "search" | "?" => {
                required(args, "search <query>")?;
                ShellCommand::Search { query: rest() }
            }
            "search-tag" => ShellCommand::SearchTag {
                tag: required(args, "search-tag <tag>")?,
            },
            "show-tags" => ShellCommand::ShowTags {
                note: args.first().map(|s| s.to_string()),
            },
            "set-tags" | "st" => ShellCommand::SetTags {
                note: required(args, "set-tags <note-name> [tag1,tag2,tag3]")?,
                tags: tags_after_note(),
            },
            "add-tags" | "at" => {
                if args.len() < 2 {
                    return Err(ParseCommandError::Usage("add-tags <note-name> <tag1,tag2,tag3>"));
                }
                ShellCommand::AddTags {
                    note: args[0].to_string(),
                    tags: tags_after_note(),
                }
            }
            "remove-tags" | "rt" => {
                if args.len() < 2 {
                    return Err(ParseCommandError::Usage(
                        "remove-tags <note-name> <tag1,tag2,tag3>",
                    ));
                }
                ShellCommand::RemoveTags {
                    note: args[0].to_string(),
                    tags: tags_after_note(),
                }
            }
            "list-tags" | "lt" => ShellCommand::ListTags,
            "delete" | "d" => ShellCommand::Delete {
                note: required(args, "delete <note-name>")?,
            },
            "edit" | "e" => ShellCommand::Edit {
                note: required(args, "edit <note-name>")?,
            },
            "stats" => ShellCommand::Stats,
            "refresh" => ShellCommand::Refresh,
            "clear" | "cls" => ShellCommand::Clear,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(parsed)
    }
}

/// Interactive session reading commands from `input` and writing to `out`.
///
/// Failed operations print an `Error ...` line and the session continues.
/// The session ends on `quit` or end of input.
pub struct Shell<'a, R, W> {
    app: &'a mut NotesApp,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(app: &'a mut NotesApp, input: R, out: W) -> Self {
        Self { app, input, out }
    }

    /// Prints the banner and the current statistics.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "Notes - Using directory: {}", self.app.root().display())?;
        writeln!(self.out, "Type 'help' for available commands")?;
        write_stats(&mut self.out, self.app.stats())?;
        writeln!(self.out)
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                return Ok(());
            };

            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Quit) => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                Ok(command) => self.execute(command)?,
                Err(ParseCommandError::Empty) => {}
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }
    }

    /// Runs one command. Only output failures are returned.
    pub fn execute(&mut self, command: ShellCommand) -> io::Result<()> {
        match command {
            ShellCommand::Help => writeln!(self.out, "{HELP}"),
            ShellCommand::Create { name } => {
                let content = self.read_block("Enter note content")?;
                match self.app.create_note(&name, &content) {
                    Ok(_) => writeln!(self.out, "Note '{name}' created successfully"),
                    Err(err) => writeln!(self.out, "Error creating note: {err}"),
                }
            }
            ShellCommand::List => {
                let notes: Vec<&Note> = self.app.list_notes().iter().collect();
                write_note_details(&mut self.out, &notes)
            }
            ShellCommand::Search { query } => {
                let notes = self.app.search(&query, SearchKind::Content);
                write_note_details(&mut self.out, &notes)
            }
            ShellCommand::SearchTag { tag } => {
                let notes = self.app.search(&tag, SearchKind::Tag);
                write_note_details(&mut self.out, &notes)
            }
            ShellCommand::ShowTags { note: Some(note) } => match self.app.get_note(&note) {
                Ok(found) => writeln!(
                    self.out,
                    "Tags for '{}': [{}]",
                    found.name(),
                    found.tags().join(" ")
                ),
                Err(err) => writeln!(self.out, "Error showing tags: {err}"),
            },
            ShellCommand::ShowTags { note: None } | ShellCommand::ListTags => self.list_tags(),
            ShellCommand::SetTags { note, tags } => {
                match self.app.update_note_tags(&note, tags) {
                    Ok(()) => writeln!(self.out, "Tags updated successfully"),
                    Err(err) => writeln!(self.out, "Error setting tags: {err}"),
                }
            }
            ShellCommand::AddTags { note, tags } => {
                match self.app.add_tags_to_note(&note, &tags) {
                    Ok(()) => writeln!(self.out, "Tags added successfully"),
                    Err(err) => writeln!(self.out, "Error adding tags: {err}"),
                }
            }
            ShellCommand::RemoveTags { note, tags } => {
                match self.app.remove_tags_from_note(&note, &tags) {
                    Ok(()) => writeln!(self.out, "Tags removed successfully"),
                    Err(err) => writeln!(self.out, "Error removing tags: {err}"),
                }
            }
            ShellCommand::Delete { note } => self.delete(&note),
            ShellCommand::Edit { note } => self.edit(&note),
            ShellCommand::Stats => write_stats(&mut self.out, self.app.stats()),
            ShellCommand::Refresh => match self.app.refresh_index() {
                Ok(_) => {
                    writeln!(self.out, "Index refreshed successfully")?;
                    write_stats(&mut self.out, self.app.stats())
                }
                Err(err) => writeln!(self.out, "Error refreshing index: {err}"),
            },
            ShellCommand::Clear => write!(self.out, "\x1b[2J\x1b[H"),
            ShellCommand::Quit => writeln!(self.out, "Goodbye!"),
        }
    }

    fn list_tags(&mut self) -> io::Result<()> {
        let tags = self.app.all_tags();
        if tags.is_empty() {
            return writeln!(self.out, "No tags found.");
        }
        writeln!(self.out, "All tags ({}):", tags.len())?;
        for tag in tags {
            writeln!(self.out, "  {tag}")?;
        }
        Ok(())
    }

    fn delete(&mut self, note: &str) -> io::Result<()> {
        write!(self.out, "Are you sure you want to delete '{note}'? (y/N): ")?;
        self.out.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        if !is_yes(&answer) {
            return writeln!(self.out, "Delete cancelled");
        }

        match self.app.delete_note(note) {
            Ok(()) => writeln!(self.out, "Note '{note}' deleted successfully"),
            Err(err) => writeln!(self.out, "Error deleting note: {err}"),
        }
    }

    fn edit(&mut self, note: &str) -> io::Result<()> {
        let current = match self.app.get_note(note) {
            Ok(current) => current,
            Err(err) => return writeln!(self.out, "Error loading note: {err}"),
        };

        writeln!(self.out, "Current content of '{note}':")?;
        writeln!(self.out, "---")?;
        write!(self.out, "{}", current.content())?;
        if !current.content().is_empty() && !current.content().ends_with('\n') {
            writeln!(self.out)?;
        }
        writeln!(self.out, "---")?;

        let content = self.read_block("Enter new content")?;
        match self.app.update_note_content(current.path(), &content) {
            Ok(()) => writeln!(self.out, "Note '{note}' updated successfully"),
            Err(err) => writeln!(self.out, "Error updating note: {err}"),
        }
    }

    /// Reads one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Reads lines until a line holding only `.` or end of input. Every
    /// line read keeps a trailing newline.
    fn read_block(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.out, "{prompt} (type '{END_OF_INPUT}' on a new line to finish):")?;
        self.out.flush()?;

        let mut content = String::new();
        while let Some(line) = self.read_line()? {
            if line == END_OF_INPUT {
                break;
            }
            content.push_str(&line);
            content.push('\n');
        }
        Ok(content)
    }
}

/// Runs an interactive session on the process's stdin and stdout.
pub fn run_interactive(app: &mut NotesApp) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(app, stdin.lock(), stdout.lock());
    shell.greet()?;
    shell.run()
}
