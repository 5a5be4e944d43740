//! Note entity: content, sidecar tag metadata, and modification time.

use crate::domain::Metadata;
use crate::infra::{FsError, read_note, remove_note, write_note};
use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Suffix identifying note content files.
pub const NOTE_SUFFIX: &str = ".note";

/// Suffix identifying sidecar metadata files.
pub const META_SUFFIX: &str = ".meta";

const PREVIEW_LINES: usize = 3;
const PREVIEW_CHARS: usize = 100;

/// A single note as loaded from (or destined for) the notes directory.
///
/// A note is two sibling files sharing a base path: `<name>.note` holds the
/// content and `<name>.meta` holds the tags. The `name` is derived from the
/// path and never stored separately.
///
/// Notes are snapshots. Once the note is mutated through the application,
/// any copy held by a caller is stale and should be fetched again.
///
/// # Examples
///
/// ```
/// use notes::domain::Note;
///
/// let note = Note::new("/tmp/notes/shopping.note")
///     .with_content("milk, eggs")
///     .with_tags(["errands"]);
/// assert_eq!(note.name(), "shopping");
/// assert_eq!(note.tags(), ["errands"]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    path: PathBuf,
    name: String,
    content: String,
    metadata: Metadata,
    modified: DateTime<Local>,
}

impl Note {
    /// Creates an empty note for `path` with no tags.
    ///
    /// The modification time is the Unix epoch until the note is loaded from
    /// disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = name_from_path(&path);
        Self {
            path,
            name,
            content: String::new(),
            metadata: Metadata::default(),
            modified: DateTime::<Local>::from(UNIX_EPOCH),
        }
    }

    /// Sets the content, builder style.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the tags verbatim, builder style.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the metadata, builder style.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Sets the modification time, builder style.
    pub fn with_modified(mut self, modified: DateTime<Local>) -> Self {
        self.modified = modified;
        self
    }

    /// Loads the note stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the content file does not exist.
    /// Returns `FsError::Parse` if the sidecar metadata is malformed.
    /// A missing sidecar is not an error; the note simply has no tags.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FsError> {
        read_note(path.as_ref())
    }

    /// Writes content and metadata to disk, creating parent directories.
    ///
    /// The two files are written independently. If the metadata write fails
    /// the new content is already on disk.
    pub fn save(&self) -> Result<(), FsError> {
        write_note(self)
    }

    /// Removes content and metadata from disk. Missing files are ignored.
    pub fn delete(&self) -> Result<(), FsError> {
        remove_note(self)
    }

    /// Returns the location of the content file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the note name: the file name without the note suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the note content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the tags in stored order.
    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }

    /// Returns the persisted metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the modification time reported by the filesystem.
    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    /// Returns the location of the sidecar metadata file.
    pub fn meta_path(&self) -> PathBuf {
        meta_path_for(&self.path)
    }

    /// Replaces the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Replaces the tag list verbatim.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.metadata.tags = tags;
    }

    /// Returns a one-line preview built from the first non-empty lines.
    ///
    /// At most three lines are considered, and collection stops once the
    /// preview passes one hundred bytes. A trailing `...` marks a cut.
    pub fn preview(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut length = 0;
        let mut cut = false;

        for (i, line) in self.content.lines().enumerate() {
            if i >= PREVIEW_LINES || length > PREVIEW_CHARS {
                cut = true;
                break;
            }
            if !line.is_empty() {
                length += line.len() + 1;
                parts.push(line);
            }
        }

        let mut preview = parts.join(" ");
        if cut {
            if !preview.is_empty() {
                preview.push(' ');
            }
            preview.push_str("...");
        }
        preview
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("tags", &self.metadata.tags)
            .field("modified", &self.modified)
            .field("content_len", &self.content.len())
            .finish()
    }
}

/// Returns true if the path names a note content file.
pub fn has_note_suffix(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .ends_with(NOTE_SUFFIX.as_bytes())
}

/// Returns the sidecar path for a content path.
///
/// The note suffix is replaced by the metadata suffix. A path without the
/// note suffix gets the metadata suffix appended.
pub fn meta_path_for(path: &Path) -> PathBuf {
    let mut base: OsString = match path.to_str().and_then(|s| s.strip_suffix(NOTE_SUFFIX)) {
        Some(stripped) => stripped.into(),
        None => path.as_os_str().to_owned(),
    };
    base.push(META_SUFFIX);
    PathBuf::from(base)
}

fn name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(NOTE_SUFFIX) {
        Some(name) => name.to_string(),
        None => file_name,
    }
}
