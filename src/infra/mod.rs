//! File I/O, the note store, and the logger handle

mod fs;
pub mod logging;
mod store;

pub use fs::{FsError, NotePart, read_metadata, read_note, remove_note, write_note};
pub use logging::{LogFacade, Logger, NoopLogger, noop_logger};
pub use store::{FileStore, ScanReport, SkippedNote};
