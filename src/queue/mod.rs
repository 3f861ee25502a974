//! Discovery and ordering of batch candidates.

mod discovery;
mod ordering;

pub use discovery::{scan_directory, FileEntry};
pub use ordering::{extract_number, sort_entries};
