//! Configuration file generation.
//!
//! Creates a commented stylebust.toml for new projects.

use anyhow::{Context, Result};
use std::{fmt::Write as _, fs, path::Path};

use crate::config::{HttpConfig, ProjectSection};

/// Generate stylebust.toml content with comments
pub fn generate_config_template() -> String {
    let project = ProjectSection::default();
    let http = HttpConfig::default();
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "# stylebust configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    );

    out.push_str("[project]\n");
    out.push_str("# Layout convention: stand_alone | rails\n");
    let _ = writeln!(out, "type = \"{}\"", project.kind);
    out.push_str("# production | development (development adds line comments)\n");
    let _ = writeln!(out, "environment = \"{}\"", project.environment);
    out.push_str("# Project root, relative to this file\n");
    let _ = writeln!(out, "path = \"{}\"\n", project.path.display());

    out.push_str("[paths]\n");
    out.push_str("# Relative to the project root; unset keys follow project.type\n");
    out.push_str("sass_dir = \"sass\"\n");
    out.push_str("css_dir = \"stylesheets\"\n");
    out.push_str("images_dir = \"images\"\n");
    out.push_str("javascripts_dir = \"javascripts\"\n");
    out.push_str("# Extra Sass import search paths\n");
    out.push_str("import_paths = []\n\n");

    out.push_str("[output]\n");
    out.push_str("# nested | expanded | compact | compressed\n");
    out.push_str("# (default: expanded in development, compressed in production)\n");
    out.push_str("# style = \"compressed\"\n");
    out.push_str("# Emit asset URLs relative to the stylesheet\n");
    out.push_str("relative_assets = false\n");
    out.push_str("# line_comments = false\n\n");

    out.push_str("[http]\n");
    out.push_str("# Web root; may be an asset host such as \"https://cdn.example.com\"\n");
    let _ = writeln!(out, "path = \"{}\"", http.path);
    let _ = writeln!(out, "images = \"{}\"", http.images);
    let _ = writeln!(out, "stylesheets = \"{}\"", http.stylesheets);
    let _ = writeln!(out, "javascripts = \"{}\"", http.javascripts);
    out.push_str("# Append ?<mtime> to asset URLs\n");
    let _ = writeln!(out, "cache_buster = {}", http.cache_buster);

    out
}

/// Write default configuration to `path`
pub fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template();
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}
