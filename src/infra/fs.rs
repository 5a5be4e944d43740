//! File I/O for notes and their sidecar metadata.

use crate::domain::{Metadata, Note, meta_path_for};
use chrono::{DateTime, Local};
use std::fmt;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Which half of a note a write was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotePart {
    Content,
    Metadata,
}

impl fmt::Display for NotePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotePart::Content => write!(f, "content"),
            NotePart::Metadata => write!(f, "metadata"),
        }
    }
}

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("note not found: {path}")]
    NotFound { path: PathBuf },

    #[error("note already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write note {part} to {path}: {source}")]
    Write {
        part: NotePart,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse metadata at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns true for `FsError::NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

/// Reads a note and its sidecar metadata.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the content file doesn't exist.
/// Returns `FsError::Io` if the content or metadata cannot be read.
/// Returns `FsError::Parse` if the metadata is malformed.
pub fn read_note(path: &Path) -> Result<Note, FsError> {
    let content = std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))?;

    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::<Local>::from)
        .map_err(|e| FsError::from_io(path, e))?;

    let metadata = read_metadata(&meta_path_for(path))?;

    Ok(Note::new(path)
        .with_content(content)
        .with_metadata(metadata)
        .with_modified(modified))
}

/// Reads a sidecar metadata file. A missing file yields empty metadata.
pub fn read_metadata(path: &Path) -> Result<Metadata, FsError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Metadata::default()),
        Err(e) => {
            return Err(FsError::Io {
                path: path.into(),
                source: e,
            });
        }
    };

    Metadata::from_json(&json).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })
}

/// Writes a note's content, then its metadata.
///
/// Missing parent directories are created. Each file is replaced atomically
/// through a temporary file, but the pair is not: a failed metadata write
/// leaves the new content in place.
///
/// # Errors
///
/// Returns `FsError::Io` if the parent directory cannot be created.
/// Returns `FsError::Write` naming the part that failed otherwise.
pub fn write_note(note: &Note) -> Result<(), FsError> {
    let path = note.path();
    let parent = parent_dir(path);
    std::fs::create_dir_all(parent).map_err(|e| FsError::Io {
        path: parent.into(),
        source: e,
    })?;

    write_atomic(path, note.content().as_bytes()).map_err(|e| FsError::Write {
        part: NotePart::Content,
        path: path.into(),
        source: e,
    })?;

    let meta_path = note.meta_path();
    note.metadata()
        .to_json()
        .map_err(io::Error::other)
        .and_then(|json| write_atomic(&meta_path, json.as_bytes()))
        .map_err(|e| FsError::Write {
            part: NotePart::Metadata,
            path: meta_path,
            source: e,
        })
}

/// Removes a note's content and metadata files.
///
/// Either file may already be gone; only other failures are reported.
pub fn remove_note(note: &Note) -> Result<(), FsError> {
    remove_if_present(note.path())?;
    remove_if_present(&note.meta_path())
}

fn remove_if_present(path: &Path) -> Result<(), FsError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsError::Io {
            path: path.into(),
            source: e,
        }),
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut temp = NamedTempFile::new_in(parent_dir(path))?;
    temp.write_all(bytes)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
