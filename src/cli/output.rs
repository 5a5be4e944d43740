//! Output format types and renderers for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::domain::Note;
use crate::index::IndexStats;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub name: String,
    pub path: String,
    pub modified: String,
    pub tags: Vec<String>,
    pub preview: String,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            name: note.name().to_string(),
            path: note.path().to_string_lossy().to_string(),
            modified: note.modified().to_rfc3339(),
            tags: note.tags().to_vec(),
            preview: note.preview(),
        }
    }
}

/// A tag with optional count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Writes a list of notes in the requested format.
pub(crate) fn write_notes<W: Write>(
    out: &mut W,
    notes: &[&Note],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => write_note_table(out, notes),
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(|n| NoteListing::from(*n)).collect();
            write_json(out, &Output::new(listings))
        }
        OutputFormat::Paths => {
            for note in notes {
                writeln!(out, "{}", note.path().display())?;
            }
            Ok(())
        }
    }
}

fn write_note_table<W: Write>(out: &mut W, notes: &[&Note]) -> io::Result<()> {
    if notes.is_empty() {
        return writeln!(out, "No notes found.");
    }

    writeln!(out, "{:<30}  {:<30}  {:>16}", "Name", "Tags", "Modified")?;
    writeln!(
        out,
        "{:<30}  {:<30}  {:>16}",
        "-".repeat(30),
        "-".repeat(30),
        "-".repeat(16)
    )?;
    for note in notes {
        writeln!(
            out,
            "{:<30}  {:<30}  {:>16}",
            truncate_str(note.name(), 30),
            truncate_str(&note.tags().join(", "), 30),
            note.modified().format("%Y-%m-%d %H:%M")
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{} note(s)", notes.len())
}

/// Writes each note as a detail block, the layout the shell uses.
pub(crate) fn write_note_details<W: Write>(out: &mut W, notes: &[&Note]) -> io::Result<()> {
    if notes.is_empty() {
        return writeln!(out, "No notes found.");
    }

    writeln!(out, "Found {} note(s):\n", notes.len())?;
    for note in notes {
        writeln!(out, "Name: {}", note.name())?;
        writeln!(out, "Path: {}", note.path().display())?;
        writeln!(out, "Modified: {}", note.modified().format("%Y-%m-%d %H:%M:%S"))?;
        if !note.tags().is_empty() {
            writeln!(out, "Tags: {}", note.tags().join(", "))?;
        }
        let preview = note.preview();
        if !preview.is_empty() {
            writeln!(out, "Preview: {preview}")?;
        }
        writeln!(out, "---")?;
    }
    Ok(())
}

/// Writes tags in the requested format. `counts` pairs each tag with a
/// note count when present.
pub(crate) fn write_tags<W: Write>(
    out: &mut W,
    tags: &[(String, Option<usize>)],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            if tags.is_empty() {
                return writeln!(out, "No tags found.");
            }
            for (tag, count) in tags {
                match count {
                    Some(count) => writeln!(out, "{tag} ({count})")?,
                    None => writeln!(out, "{tag}")?,
                }
            }
            Ok(())
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags
                .iter()
                .map(|(name, count)| TagListing {
                    name: name.clone(),
                    count: *count,
                })
                .collect();
            write_json(out, &Output::new(listings))
        }
        OutputFormat::Paths => {
            for (tag, _) in tags {
                writeln!(out, "{tag}")?;
            }
            Ok(())
        }
    }
}

/// Writes the index statistics block.
pub(crate) fn write_stats<W: Write>(out: &mut W, stats: IndexStats) -> io::Result<()> {
    writeln!(out, "Index Statistics:")?;
    writeln!(out, "  Total notes: {}", stats.notes)?;
    writeln!(out, "  Unique tags: {}", stats.tags)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{json}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> Note {
        Note::new("/notes/shopping.note")
            .with_content("milk\neggs")
            .with_tags(["errands", "home"])
    }

    // ===========================================
    // truncate_str
    // ===========================================

    #[test]
    fn truncate_str_leaves_short_strings() {
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn truncate_str_adds_ellipsis() {
        assert_eq!(truncate_str("a long name", 6), "a lon…");
    }

    #[test]
    fn truncate_str_counts_chars_not_bytes() {
        assert_eq!(truncate_str("héllo", 5), "héllo");
    }

    // ===========================================
    // Note rendering
    // ===========================================

    #[test]
    fn human_table_lists_notes_and_count() {
        let note = sample();
        let text = render(|out| write_notes(out, &[&note], OutputFormat::Human));

        assert!(text.starts_with("Name"));
        assert!(text.contains("shopping"));
        assert!(text.contains("errands, home"));
        assert!(text.ends_with("1 note(s)\n"));
    }

    #[test]
    fn human_table_empty_says_so() {
        let text = render(|out| write_notes(out, &[], OutputFormat::Human));
        assert_eq!(text, "No notes found.\n");
    }

    #[test]
    fn json_wraps_listings_in_data() {
        let note = sample();
        let text = render(|out| write_notes(out, &[&note], OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["data"][0]["name"], "shopping");
        assert_eq!(value["data"][0]["tags"][1], "home");
        assert_eq!(value["data"][0]["preview"], "milk eggs");
    }

    #[test]
    fn paths_prints_one_per_line() {
        let a = Note::new("/n/a.note");
        let b = Note::new("/n/b.note");
        let text = render(|out| write_notes(out, &[&a, &b], OutputFormat::Paths));
        assert_eq!(text, "/n/a.note\n/n/b.note\n");
    }

    #[test]
    fn details_show_tags_preview_and_separator() {
        let note = sample();
        let text = render(|out| write_note_details(out, &[&note]));

        assert!(text.starts_with("Found 1 note(s):\n\nName: shopping\n"));
        assert!(text.contains("Path: /notes/shopping.note\n"));
        assert!(text.contains("Tags: errands, home\n"));
        assert!(text.contains("Preview: milk eggs\n"));
        assert!(text.ends_with("---\n"));
    }

    #[test]
    fn details_omit_empty_tags() {
        let note = Note::new("/notes/bare.note");
        let text = render(|out| write_note_details(out, &[&note]));
        assert!(!text.contains("Tags:"));
        assert!(!text.contains("Preview:"));
    }

    // ===========================================
    // Tags / stats
    // ===========================================

    #[test]
    fn tags_human_with_counts() {
        let tags = vec![("home".to_string(), Some(2)), ("work".to_string(), Some(1))];
        let text = render(|out| write_tags(out, &tags, OutputFormat::Human));
        assert_eq!(text, "home (2)\nwork (1)\n");
    }

    #[test]
    fn tags_json_skips_missing_counts() {
        let tags = vec![("home".to_string(), None)];
        let text = render(|out| write_tags(out, &tags, OutputFormat::Json));
        assert!(!text.contains("count"));
        assert!(text.contains("\"name\": \"home\""));
    }

    #[test]
    fn stats_block() {
        let text = render(|out| write_stats(out, IndexStats { notes: 3, tags: 2 }));
        assert_eq!(
            text,
            "Index Statistics:\n  Total notes: 3\n  Unique tags: 2\n"
        );
    }
}
