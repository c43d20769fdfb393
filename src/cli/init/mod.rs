//! Project initialization module.
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::ProjectConfig, log};
use anyhow::{Context, Result};
use std::fs;

/// Create a config file and the Sass source directory.
///
/// # Steps
/// 1. Refuse if the config file already exists
/// 2. Create the project root and `sass_dir`
/// 3. Write the commented config template
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_project(project: &ProjectConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    validate::validate_target(&project.config_path)?;

    let sass_dir = &project.layout.sass_dir;
    fs::create_dir_all(sass_dir)
        .with_context(|| format!("Failed to create directory '{}'", sass_dir.display()))?;

    config::write_config(&project.config_path)?;

    log!("init"; "wrote {}", project.config_path.display());
    log!("init"; "sass sources go in {}", project.root_relative(sass_dir).display());
    Ok(())
}
