//! Sequential per-file processing with batch-level outcome collection.

mod errors;
mod processor;

pub use errors::{FileError, FileResult};
pub use processor::{output_path_for, BatchProcessor};
