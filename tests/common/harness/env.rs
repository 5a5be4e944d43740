//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use super::{NotesCommand, TestNote};
use notes::domain::Note;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns where a note with this name is stored.
    pub fn note_path(&self, name: &str) -> PathBuf {
        self.notes_dir.join(format!("{name}.note"))
    }

    /// Returns where the metadata of a note with this name is stored.
    pub fn meta_path(&self, name: &str) -> PathBuf {
        self.notes_dir.join(format!("{name}.meta"))
    }

    /// Writes a test note and its metadata, returning the content path.
    pub fn add_note(&self, test_note: &TestNote) -> PathBuf {
        let note = test_note.to_note(&self.notes_dir);
        note.save().expect("Failed to write test note");
        note.path().to_path_buf()
    }

    /// Loads a note from disk by name.
    pub fn read_note(&self, name: &str) -> Note {
        Note::load(self.note_path(name)).expect("Failed to load note")
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new().dir(&self.notes_dir)
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir(), "notes directory should exist");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }

    // ===========================================
    // TestEnv Note Addition
    // ===========================================

    #[test]
    fn test_env_add_note_writes_both_files() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("pair").tag("x"));

        assert_eq!(path, env.note_path("pair"));
        assert!(path.is_file());
        assert!(env.meta_path("pair").is_file());
    }

    #[test]
    fn test_env_add_note_round_trips() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("nested/deep").content("body").tag("t"));

        let note = env.read_note("nested/deep");
        assert_eq!(note.content(), "body");
        assert_eq!(note.tags(), ["t"]);
    }
}
