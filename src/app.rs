//! Application facade keeping the note store and the index consistent.


use crate::domain::{Note, merge_tags, remove_tags};
use crate::index::{IndexStats, NoteIndex};
use crate::infra::{FileStore, FsError, Logger, SkippedNote};
use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Which index query a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchKind {
    /// Case-insensitive substring match on content and name.
    #[default]
    Content,
    /// Case-insensitive exact tag match.
    Tag,
}

impl From<&str> for SearchKind {
    /// `"tag"` selects tag search; every other string selects content search.
    fn from(kind: &str) -> Self {
        match kind {
            "tag" => SearchKind::Tag,
            _ => SearchKind::Content,
        }
    }
}

impl FromStr for SearchKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Content => write!(f, "content"),
            SearchKind::Tag => write!(f, "tag"),
        }
    }
}

/// Outcome of a full index refresh.
#[derive(Debug, Default)]
pub struct RefreshReport {
    /// Notes now in the index.
    pub indexed: usize,
    /// Notes left out because they failed to load.
    pub skipped: Vec<SkippedNote>,
}

/// Note operations for front ends.
///
/// Owns the store and the index. Every method that changes a note on disk
/// finishes by re-reading the whole store and rebuilding the index, so reads
/// always reflect the directory as it is after the last mutation.
///
/// Notes returned by reads borrow from the index. A mutation needs
/// `&mut self`, which ends those borrows; re-read after mutating.
pub struct NotesApp {
    store: FileStore,
    index: NoteIndex,
    logger: Arc<dyn Logger>,
}

impl NotesApp {
    /// Creates the application for `root` without touching the disk.
    pub fn new(root: impl Into<PathBuf>, logger: Arc<dyn Logger>) -> Self {
        Self {
            store: FileStore::new(root, Arc::clone(&logger)),
            index: NoteIndex::new(),
            logger,
        }
    }

    /// Creates the application, ensures the root exists, and builds the
    /// index.
    pub fn open(root: impl Into<PathBuf>, logger: Arc<dyn Logger>) -> Result<Self, FsError> {
        let mut app = Self::new(root, logger);
        app.initialize()?;
        Ok(app)
    }

    /// Ensures the root directory exists and builds the index.
    pub fn initialize(&mut self) -> Result<RefreshReport, FsError> {
        self.store.initialize()?;
        self.refresh_index()
    }

    /// Returns the notes directory.
    pub fn root(&self) -> &Path {
        self.store.root()
    }

    /// Re-reads every note from disk and rebuilds the index.
    pub fn refresh_index(&mut self) -> Result<RefreshReport, FsError> {
        let scan = self.store.all_notes()?;
        let indexed = scan.notes.len();
        self.index.rebuild(scan.notes);
        self.logger.debug(&format!(
            "index rebuilt: {indexed} notes, {} skipped",
            scan.skipped.len()
        ));
        Ok(RefreshReport {
            indexed,
            skipped: scan.skipped,
        })
    }

    /// Creates a note with the given content and no tags.
    ///
    /// Returns the path the note was written to.
    ///
    /// # Errors
    ///
    /// Returns `FsError::AlreadyExists` if a note with that name exists.
    pub fn create_note(&mut self, name: &str, content: &str) -> Result<PathBuf, FsError> {
        let note = self.store.create(name, content)?;
        self.refresh_index()?;
        Ok(note.path().to_path_buf())
    }

    /// Loads a note straight from disk.
    pub fn get_note(&self, path: impl AsRef<Path>) -> Result<Note, FsError> {
        self.store.get(path)
    }

    /// Returns every indexed note.
    pub fn list_notes(&self) -> &[Note] {
        self.index.all_notes()
    }

    /// Runs a tag or content search against the index.
    pub fn search(&self, query: &str, kind: SearchKind) -> Vec<&Note> {
        match kind {
            SearchKind::Tag => self.index.search_by_tag(query),
            SearchKind::Content => self.index.search_by_content(query),
        }
    }

    /// Returns the distinct lowercased tags, sorted.
    pub fn all_tags(&self) -> Vec<&str> {
        let mut tags = self.index.all_tags();
        tags.sort_unstable();
        tags
    }

    /// Returns the stored tags of one note.
    pub fn note_tags(&self, path: impl AsRef<Path>) -> Result<Vec<String>, FsError> {
        Ok(self.store.get(path)?.tags().to_vec())
    }

    /// Returns index totals.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Replaces a note's tags with `tags`, verbatim.
    ///
    /// No trimming or deduplication happens here.
    pub fn update_note_tags(
        &mut self,
        path: impl AsRef<Path>,
        tags: Vec<String>,
    ) -> Result<(), FsError> {
        let mut note = self.store.get(path)?;
        note.set_tags(tags);
        note.save()?;
        self.refresh_index()?;
        Ok(())
    }

    /// Adds tags to a note.
    ///
    /// New tags are trimmed and blanks dropped. Comparison is
    /// case-sensitive, so `Work` and `work` are both kept.
    pub fn add_tags_to_note<S: AsRef<str>>(
        &mut self,
        path: impl AsRef<Path>,
        tags: &[S],
    ) -> Result<(), FsError> {
        let mut note = self.store.get(path)?;
        let merged = merge_tags(note.tags(), tags);
        note.set_tags(merged);
        note.save()?;
        self.refresh_index()?;
        Ok(())
    }

    /// Removes tags that exactly match the trimmed entries of `tags`.
    ///
    /// Tags not on the note are ignored.
    pub fn remove_tags_from_note<S: AsRef<str>>(
        &mut self,
        path: impl AsRef<Path>,
        tags: &[S],
    ) -> Result<(), FsError> {
        let mut note = self.store.get(path)?;
        let remaining = remove_tags(note.tags(), tags);
        note.set_tags(remaining);
        note.save()?;
        self.refresh_index()?;
        Ok(())
    }

    /// Deletes a note and its metadata.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the note does not exist.
    pub fn delete_note(&mut self, path: impl AsRef<Path>) -> Result<(), FsError> {
        let note = self.store.get(path)?;
        note.delete()?;
        self.refresh_index()?;
        Ok(())
    }

    /// Replaces a note's content. Tags are left alone.
    pub fn update_note_content(
        &mut self,
        path: impl AsRef<Path>,
        content: &str,
    ) -> Result<(), FsError> {
        let mut note = self.store.get(path)?;
        note.set_content(content);
        note.save()?;
        self.refresh_index()?;
        Ok(())
    }
}
