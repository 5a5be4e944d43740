//! In-memory tag and content index over the full note set.

use crate::domain::Note;
use std::collections::HashMap;
use std::path::Path;

/// Counts reported by the `stats` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Total notes indexed.
    pub notes: usize,
    /// Distinct lowercased tags.
    pub tags: usize,
}

/// A derived, rebuildable index over notes.
///
/// Holds every note in the order it was supplied plus a map from lowercased
/// tag to the positions of the notes carrying it. After
/// [`rebuild`](Self::rebuild) the index depends on nothing but its input.
///
/// Nothing here performs I/O, so no query can fail. An empty index answers
/// every query with an empty result.
#[derive(Debug, Default)]
pub struct NoteIndex {
    notes: Vec<Note>,
    tags: HashMap<String, Vec<usize>>,
}

impl NoteIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole index with `notes`, keeping their order.
    pub fn rebuild(&mut self, notes: impl IntoIterator<Item = Note>) {
        self.notes.clear();
        self.tags.clear();
        for note in notes {
            self.insert(note);
        }
    }

    /// Appends one note, filing it under each of its tags.
    ///
    /// A note listing the same tag twice (in any casing) appears twice in
    /// that tag's bucket.
    pub fn insert(&mut self, note: Note) {
        let position = self.notes.len();
        for tag in note.tags() {
            self.tags.entry(tag.to_lowercase()).or_default().push(position);
        }
        self.notes.push(note);
    }

    /// Removes the first note stored at `path` and returns it.
    ///
    /// Afterwards every query answers as if the index had been rebuilt
    /// from the remaining notes in their current order.
    pub fn remove(&mut self, path: &Path) -> Option<Note> {
        let position = self.notes.iter().position(|n| n.path() == path)?;
        let removed = self.notes.remove(position);

        self.tags.retain(|_, bucket| {
            bucket.retain(|&p| p != position);
            for p in bucket.iter_mut() {
                if *p > position {
                    *p -= 1;
                }
            }
            !bucket.is_empty()
        });

        Some(removed)
    }

    /// Returns the notes filed under `tag`, compared case-insensitively.
    ///
    /// Only whole tags match; there is no prefix or substring matching.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.tags
            .get(&tag.to_lowercase())
            .map(|bucket| bucket.iter().map(|&p| &self.notes[p]).collect())
            .unwrap_or_default()
    }

    /// Returns every note whose content or name contains `query`,
    /// ignoring case. An empty query matches every note.
    pub fn search_by_content(&self, query: &str) -> Vec<&Note> {
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.content().to_lowercase().contains(&query)
                    || n.name().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Returns all notes in rebuild order.
    pub fn all_notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the distinct lowercased tags. Order is unspecified.
    pub fn all_tags(&self) -> Vec<&str> {
        self.tags.keys().map(String::as_str).collect()
    }

    /// Returns note and tag totals.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            notes: self.notes.len(),
            tags: self.tags.len(),
        }
    }

    /// Returns the number of indexed notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if no notes are indexed.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
