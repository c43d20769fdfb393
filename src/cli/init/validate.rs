//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// Refuse to initialize over an existing config file.
///
/// Existing Sass sources and other files in the directory are fine.
pub fn validate_target(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!(
            "Config file '{}' already exists.\n\
             Edit it directly or remove it to start over.",
            config_path.display()
        );
    }
    Ok(())
}
