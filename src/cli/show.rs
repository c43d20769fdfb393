//! `show` command: print the effective configuration.

use anyhow::{Context, Result};

use crate::config::ProjectConfig;

/// Print the config with every default filled in and directories made absolute.
pub fn show_config(config: &ProjectConfig) -> Result<()> {
    print!("{}", render_config(config)?);
    Ok(())
}

fn render_config(config: &ProjectConfig) -> Result<String> {
    let body = toml::to_string_pretty(&config.effective())
        .context("Failed to render effective configuration")?;
    Ok(format!("# {}\n\n{body}", config.config_path.display()))
}
