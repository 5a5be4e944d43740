//! Builder for test notes with sensible defaults.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use notes::domain::Note;
use std::path::Path;

/// Builder for creating test notes.
///
/// A note starts with empty content and no tags.
#[derive(Debug, Clone)]
pub struct TestNote {
    name: String,
    content: String,
    tags: Vec<String>,
}

impl TestNote {
    /// Creates a new test note with the given name.
    ///
    /// The name may contain `/` to place the note in a subdirectory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: String::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the content (builder method).
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the content.
    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Converts this TestNote to a domain Note stored under `root`.
    pub fn to_note(&self, root: &Path) -> Note {
        Note::new(root.join(format!("{}.note", self.name)))
            .with_content(self.content.clone())
            .with_tags(self.tags.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // TestNote Builder
    // ===========================================

    #[test]
    fn test_note_new_with_name() {
        let note = TestNote::new("groceries");
        assert_eq!(note.name(), "groceries");
        assert_eq!(note.get_content(), "");
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("plans/week")
            .content("ship it")
            .tag("work")
            .tag("Urgent");

        let domain_note = note.to_note(Path::new("/root"));
        assert_eq!(domain_note.path(), Path::new("/root/plans/week.note"));
        assert_eq!(domain_note.name(), "week");
        assert_eq!(domain_note.content(), "ship it");
        assert_eq!(domain_note.tags(), ["work", "Urgent"]);
    }
}
