//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`)
//! - [`route`]: Web path helpers (`join_url`, `relative_url`, `is_external_url`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, resolve_path};
pub use route::{append_query, is_external_url, join_url, relative_url};
