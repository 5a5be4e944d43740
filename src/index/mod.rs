//! In-memory note index and its query operations

mod note_index;

pub use note_index::{IndexStats, NoteIndex};
