//! Storage adapter mapping note names onto files under a root directory.

use crate::domain::{NOTE_SUFFIX, Note, has_note_suffix};
use crate::infra::FsError;
use crate::infra::logging::Logger;
use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// A note that could not be loaded during enumeration.
#[derive(Debug)]
pub struct SkippedNote {
    /// Location of the content file.
    pub path: PathBuf,
    /// Why loading failed.
    pub error: FsError,
}

/// Result of enumerating every note under the root.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Notes that loaded, in directory walk order.
    pub notes: Vec<Note>,
    /// Notes that failed to load and were left out.
    pub skipped: Vec<SkippedNote>,
}

/// Filesystem-backed note store.
///
/// Every note lives under `root`, arbitrarily nested. Names given to the
/// store are resolved relative to the root and receive the `.note` suffix
/// when it is missing.
pub struct FileStore {
    root: PathBuf,
    logger: Arc<dyn Logger>,
}

impl FileStore {
    /// Creates a store rooted at `root`. Nothing touches the disk until
    /// [`initialize`](Self::initialize) or a note operation runs.
    pub fn new(root: impl Into<PathBuf>, logger: Arc<dyn Logger>) -> Self {
        Self {
            root: root.into(),
            logger,
        }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if needed. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<(), FsError> {
        self.logger
            .debug(&format!("initializing notes directory: {}", self.root.display()));
        std::fs::create_dir_all(&self.root).map_err(|e| FsError::Io {
            path: self.root.clone(),
            source: e,
        })
    }

    /// Resolves a note name or path to the content file location.
    ///
    /// A path already inside the root is taken relative to it. Any other
    /// name has its root or drive prefix dropped before being joined, and
    /// `..` never climbs above the root. The `.note` suffix is appended
    /// when absent.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        let name = name.as_ref();
        let relative = name.strip_prefix(&self.root).unwrap_or(name);

        let mut full = self.root.clone();
        let mut depth = 0usize;
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    full.push(part);
                    depth += 1;
                }
                Component::ParentDir if depth > 0 => {
                    full.pop();
                    depth -= 1;
                }
                _ => {}
            }
        }

        if has_note_suffix(&full) {
            full
        } else {
            let mut with_suffix: OsString = full.into_os_string();
            with_suffix.push(NOTE_SUFFIX);
            PathBuf::from(with_suffix)
        }
    }

    /// Loads every note under the root, recursively.
    ///
    /// Notes that fail to load are logged, listed in the report, and
    /// otherwise ignored. Unreadable subdirectories are skipped the same
    /// way.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` or `FsError::Io` only when the root
    /// itself cannot be read.
    pub fn all_notes(&self) -> Result<ScanReport, FsError> {
        self.logger
            .debug(&format!("getting all notes from directory: {}", self.root.display()));

        let mut report = ScanReport::default();
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(self.walk_error(e)),
                Err(e) => {
                    self.logger.warn(&format!("skipping unreadable entry: {e}"));
                    continue;
                }
            };

            if !entry.file_type().is_file() || !has_note_suffix(entry.path()) {
                continue;
            }

            match Note::load(entry.path()) {
                Ok(note) => report.notes.push(note),
                Err(error) => {
                    self.logger.warn(&format!(
                        "failed to load note {}: {error}",
                        entry.path().display()
                    ));
                    report.skipped.push(SkippedNote {
                        path: entry.path().to_path_buf(),
                        error,
                    });
                }
            }
        }

        self.logger.debug(&format!(
            "retrieved {} notes ({} skipped)",
            report.notes.len(),
            report.skipped.len()
        ));
        Ok(report)
    }

    /// Loads a single note by name or path.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if no such note exists.
    pub fn get(&self, name: impl AsRef<Path>) -> Result<Note, FsError> {
        let path = self.resolve(name);
        self.logger.debug(&format!("getting note: {}", path.display()));
        let note = Note::load(&path);
        if let Err(e) = &note {
            self.logger.debug(&format!("error getting note {}: {e}", path.display()));
        }
        note
    }

    /// Creates and saves a new note with the given content and no tags.
    ///
    /// # Errors
    ///
    /// Returns `FsError::AlreadyExists` if the resolved path is taken.
    pub fn create(&self, name: impl AsRef<Path>, content: &str) -> Result<Note, FsError> {
        let path = self.resolve(name);
        self.logger.debug(&format!("creating note: {}", path.display()));

        let occupied = path.try_exists().map_err(|e| FsError::Io {
            path: path.clone(),
            source: e,
        })?;
        if occupied {
            self.logger
                .debug(&format!("note already exists: {}", path.display()));
            return Err(FsError::AlreadyExists { path });
        }

        let note = Note::new(path).with_content(content);
        note.save()?;
        self.logger
            .debug(&format!("created note: {}", note.path().display()));
        Ok(note)
    }

    fn walk_error(&self, error: walkdir::Error) -> FsError {
        let path = error
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        match error.into_io_error() {
            Some(e) if e.kind() == io::ErrorKind::NotFound => FsError::NotFound { path },
            Some(e) => FsError::Io { path, source: e },
            None => FsError::Io {
                path,
                source: io::Error::other("filesystem loop detected"),
            },
        }
    }
}
