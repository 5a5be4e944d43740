//! Core types: Note, Metadata, and tag list operations

mod metadata;
mod note;
mod tags;

pub use metadata::Metadata;
pub use note::{META_SUFFIX, NOTE_SUFFIX, Note, has_note_suffix, meta_path_for};
pub use tags::{merge_tags, parse_tag_list, remove_tags};
