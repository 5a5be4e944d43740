//! Command handlers for the CLI.
//!
//! Handlers write to any `Write` so tests can capture their output.

mod index;
mod list;
mod notes;
mod tags;


use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};

// Re-export public items
pub use index::{handle_refresh, handle_stats};
pub use list::{handle_list, handle_search};
pub use notes::{EditorLauncher, handle_create, handle_delete, handle_edit, handle_show};
pub(crate) use notes::is_yes;
pub use tags::{handle_add_tags, handle_remove_tags, handle_set_tags, handle_tags};

// ===========================================
// Shared Utilities
// ===========================================

/// Reads all of stdin when it is piped. Returns `None` on a terminal or
/// when nothing was piped, so a closed stdin never stands in for content.
pub(crate) fn read_piped_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    read_content(stdin.lock())
}

/// Reads `reader` to the end. Empty input yields `None`.
pub(crate) fn read_content<R: Read>(mut reader: R) -> Result<Option<String>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .with_context(|| "failed to read note content from stdin")?;
    Ok((!content.is_empty()).then_some(content))
}

/// Joins tag words given on the command line and splits them on commas.
///
/// `["a,", "b"]` and `["a, b"]` both yield `["a", "b"]`.
pub(crate) fn tags_from_args(words: &[String]) -> Vec<String> {
    crate::domain::parse_tag_list(&words.join(" "))
}
