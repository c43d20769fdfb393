//! Project configuration management for `stylebust.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── project    # [project]
//! │   ├── paths      # [paths]
//! │   ├── output     # [output]
//! │   └── http       # [http]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! The config is loaded once in `main` and handed to commands by reference.
//! Nothing mutates it after [`ProjectConfig::load`] returns.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    Environment, HttpConfig, OutputConfig, OutputStyle, PathsConfig, ProjectLayout,
    ProjectSection, ProjectType,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    asset::AssetKind,
    cli::{Cli, Commands},
    logger,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing stylebust.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Resolved absolute directories (internal use only)
    #[serde(skip)]
    pub layout: ProjectLayout,

    /// Project type, environment and root
    #[serde(default)]
    pub project: ProjectSection,

    /// File-system directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// CSS output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Web paths and cache busting
    #[serde(default)]
    pub http: HttpConfig,
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is `project.path` resolved against the config file's
    /// directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'stylebust init' to create one",
                cli.config.display()
            )));
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.finalize(&config_path);

        // Init writes the config; nothing on disk to validate yet
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let path = match &cli.command {
            Commands::Init { name: Some(name), .. } => cwd.join(name).join(&cli.config),
            Commands::Init { name: None, .. } => cwd.join(&cli.config),
            _ => match find_config_file(&cli.config, &cwd) {
                Some(path) => return Ok((path, true)),
                None => cwd.join(&cli.config),
            },
        };
        let exists = path.exists();
        Ok((path, exists))
    }

    /// Resolve the project root and directories for a config located at `config_path`.
    pub fn finalize(&mut self, config_path: &Path) {
        self.config_path = normalize_path(config_path);

        let config_dir = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let root = normalize_path(&config_dir.join(&self.project.path));

        self.layout = self.paths.resolve(self.project.kind, &root);
    }

    /// Parse configuration from TOML string, rejecting nothing but syntax and type errors.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        logger::warn(
            "warning",
            &format!("unknown fields in {display_path}, ignoring:"),
        );
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Get the project root directory
    pub fn root(&self) -> &Path {
        &self.layout.root
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(self.root())
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    pub fn environment(&self) -> Environment {
        self.project.environment
    }

    /// CSS style after applying the environment default.
    pub fn style(&self) -> OutputStyle {
        self.output.effective_style(self.environment())
    }

    /// Line comments after applying the environment default.
    pub fn line_comments(&self) -> bool {
        self.output.effective_line_comments(self.environment())
    }

    /// On-disk directory holding assets of `kind`.
    pub fn real_dir(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Image => &self.layout.images_dir,
            AssetKind::Stylesheet => &self.layout.css_dir,
            AssetKind::Javascript => &self.layout.javascripts_dir,
        }
    }

    /// Copy with every defaulted value written out, for display.
    pub fn effective(&self) -> Self {
        let mut config = self.clone();
        config.project.path = self.layout.root.clone();
        config.paths = PathsConfig {
            sass_dir: Some(self.layout.sass_dir.clone()),
            css_dir: Some(self.layout.css_dir.clone()),
            images_dir: Some(self.layout.images_dir.clone()),
            javascripts_dir: Some(self.layout.javascripts_dir.clone()),
            import_paths: self.layout.import_paths.clone(),
        };
        config.output.style = Some(self.style());
        config.output.line_comments = Some(self.line_comments());
        config
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the finalized configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.project.validate(self.root(), &mut diag);
        PathsConfig::validate(&self.layout, &mut diag);
        self.output.validate(self.environment(), &mut diag);
        self.http.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Parse config TOML and finalize it as if it lived in `root`.
#[cfg(test)]
pub fn test_project(root: &Path, content: &str) -> ProjectConfig {
    let mut config = test_parse_config(content);
    config.finalize(&root.join("stylebust.toml"));
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.project.kind, ProjectType::StandAlone);
        assert_eq!(config.http.path, "/");
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (config, ignored) = ProjectConfig::parse_with_ignored(
            r#"
[output]
style = "compact"
colour = "red"

[extras]
anything = 1
"#,
        )
        .unwrap();
        assert_eq!(config.output.style, Some(OutputStyle::Compact));
        assert!(ignored.contains(&"output.colour".to_string()));
        assert!(ignored.contains(&"extras".to_string()));
    }

    #[test]
    fn test_finalize_resolves_project_path() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        let tools = root.join("tools/compass");
        fs::create_dir_all(&tools).unwrap();

        let config = test_project(
            &tools,
            r#"
[project]
path = "../../"

[paths]
sass_dir = "tools/compass/src"
css_dir = "src/static/css"
"#,
        );

        assert_eq!(config.root(), root);
        assert_eq!(config.layout.sass_dir, root.join("tools/compass/src"));
        assert_eq!(config.real_dir(AssetKind::Stylesheet), root.join("src/static/css"));
        assert_eq!(config.root_relative(&config.layout.css_dir), PathBuf::from("src/static/css"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let dir = TempDir::new().unwrap();
        let config = test_project(
            dir.path(),
            r#"
[paths]
import_paths = ["mixins"]

[http]
images = "img?x"
"#,
        );

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_validate_passes_for_minimal_project() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sass")).unwrap();
        let config = test_project(dir.path(), "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), "[project]\nenvironment = \"development\"");
        let effective = config.effective();

        assert_eq!(effective.output.style, Some(OutputStyle::Expanded));
        assert_eq!(effective.output.line_comments, Some(true));
        assert_eq!(effective.paths.sass_dir.as_deref(), Some(config.layout.sass_dir.as_path()));

        let rendered = toml::to_string(&effective).unwrap();
        assert!(rendered.contains("style = \"expanded\""));
        assert!(rendered.contains("environment = \"development\""));
    }
}
