//! Format routing: which files are processable, and which of those need
//! conversion to an audio-only intermediate first.
//!
//! Policy is a fixed allow-list; anything else is skipped. A fixed subset
//! of the allow-list is normalized to an mp3 sibling with ffmpeg before
//! transcription.

use std::path::Path;

/// Extensions recognized as processable input (lowercase, without dot).
pub const SUPPORTED_EXTENSIONS: [&str; 34] = [
    "mp3", "mp4", "mpeg", "mpg", "mpga", "m4a", "wav", "webm", "mkv", "avi", "flv", "mov", "wmv",
    "3gp", "3g2", "vob", "flac", "aac", "ogg", "wma", "ac3", "dts", "mmf", "m4r", "mp2", "wv",
    "asf", "f4v", "m2ts", "mts", "rm", "rmvb", "swf", "wtv",
];

/// Supported extensions that must be converted to mp3 before transcription.
pub const CONVERSION_EXTENSIONS: [&str; 26] = [
    "mkv", "avi", "flv", "mov", "wmv", "3gp", "3g2", "vob", "flac", "aac", "ogg", "wma", "ac3",
    "dts", "mmf", "m4r", "mp2", "wv", "asf", "f4v", "m2ts", "mts", "rm", "rmvb", "swf", "wtv",
];

/// Routing decision for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Extension not in the allow-list; the file is skipped.
    Unsupported,
    /// Supported after conversion to an mp3 intermediate.
    Convert,
    /// Directly supported.
    Direct,
}

/// Decide how a file should be handled based on its extension.
///
/// Comparison is case-insensitive; a file without an extension is
/// unsupported.
pub fn route(path: &Path) -> Route {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return Route::Unsupported,
    };

    if CONVERSION_EXTENSIONS.contains(&ext.as_str()) {
        Route::Convert
    } else if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Route::Direct
    } else {
        Route::Unsupported
    }
}

/// Whether the file's extension is in the allow-list at all.
pub fn is_supported(path: &Path) -> bool {
    route(path) != Route::Unsupported
}
