//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;
pub mod shell;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notes - plain-text notes with tags
#[derive(Parser, Debug)]
#[command(name = "notes", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides NOTES_PATH and the config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v enables debug logging)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    Create(CreateArgs),

    /// List all notes
    #[command(name = "ls", visible_alias = "list")]
    List(ListArgs),

    /// Search notes by content or by tag
    Search(SearchArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// List all tags, or the tags of one note
    Tags(TagsArgs),

    /// Replace all tags of a note
    SetTags(SetTagsArgs),

    /// Add tags to a note
    AddTags(TagEditArgs),

    /// Remove tags from a note
    RemoveTags(TagEditArgs),

    /// Delete a note and its metadata
    Delete(DeleteArgs),

    /// Replace a note's content
    Edit(EditArgs),

    /// Rebuild the index from disk
    Refresh,

    /// Show index statistics
    Stats,

    /// Start an interactive shell
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `create` command
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Note name (may include subdirectories, e.g. work/plan)
    pub name: String,

    /// Note content (read from stdin when piped and omitted)
    #[arg(short, long)]
    pub content: Option<String>,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// What to match: "tag" or "content" (anything else searches content)
    #[arg(short, long, default_value = "content")]
    pub kind: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note name or path
    pub note: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show the stored tags of this note instead of all tags
    pub note: Option<String>,

    /// Show note counts for each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `set-tags` command
#[derive(Parser, Debug)]
pub struct SetTagsArgs {
    /// Note name or path
    pub note: String,

    /// Comma-separated tags (omit to clear all tags)
    pub tags: Vec<String>,
}

/// Arguments for the `add-tags` and `remove-tags` commands
#[derive(Parser, Debug)]
pub struct TagEditArgs {
    /// Note name or path
    pub note: String,

    /// Comma-separated tags
    #[arg(required = true)]
    pub tags: Vec<String>,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note name or path
    pub note: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note name or path
    pub note: String,

    /// New content (read from stdin when piped, editor otherwise)
    #[arg(short, long)]
    pub content: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
