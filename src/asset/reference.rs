//! The pair handed to a cache-buster.

use std::path::Path;

/// A web-facing asset path and the file backing it.
///
/// Built fresh for every resolution and dropped afterwards. `http_path` is
/// passed through for callbacks that want it; the mtime buster ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetReference<'a> {
    /// Path the browser requests, e.g. `css/app.css`.
    pub http_path: &'a str,
    /// Location of the file on disk.
    pub real_path: &'a Path,
}

impl<'a> AssetReference<'a> {
    pub const fn new(http_path: &'a str, real_path: &'a Path) -> Self {
        Self {
            http_path,
            real_path,
        }
    }
}
