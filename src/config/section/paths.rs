//! `[paths]` section configuration.
//!
//! File-system directories, relative to the project root. Unset keys take
//! the defaults of the project type:
//!
//! | Key               | `stand_alone`  | `rails`                   |
//! |-------------------|----------------|---------------------------|
//! | `sass_dir`        | `sass`         | `app/assets/stylesheets`  |
//! | `css_dir`         | `stylesheets`  | `public/stylesheets`      |
//! | `images_dir`      | `images`       | `public/images`           |
//! | `javascripts_dir` | `javascripts`  | `public/javascripts`      |
//!
//! # Example
//!
//! ```toml
//! [paths]
//! sass_dir = "tools/compass/src"
//! css_dir = "src/static/css"
//! images_dir = "tools/compass/images"
//! import_paths = ["tools/compass/mixins"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::project::ProjectType;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::normalize_path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Sass sources.
    pub sass_dir: Option<PathBuf>,
    /// Compiled CSS output.
    pub css_dir: Option<PathBuf>,
    /// Images referenced from stylesheets.
    pub images_dir: Option<PathBuf>,
    /// Scripts.
    pub javascripts_dir: Option<PathBuf>,
    /// Extra directories searched for Sass partials.
    pub import_paths: Vec<PathBuf>,
}

/// Absolute directories after defaults and normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub sass_dir: PathBuf,
    pub css_dir: PathBuf,
    pub images_dir: PathBuf,
    pub javascripts_dir: PathBuf,
    pub import_paths: Vec<PathBuf>,
}

struct Defaults {
    sass: &'static str,
    css: &'static str,
    images: &'static str,
    javascripts: &'static str,
}

const fn defaults(kind: ProjectType) -> Defaults {
    match kind {
        ProjectType::StandAlone => Defaults {
            sass: "sass",
            css: "stylesheets",
            images: "images",
            javascripts: "javascripts",
        },
        ProjectType::Rails => Defaults {
            sass: "app/assets/stylesheets",
            css: "public/stylesheets",
            images: "public/images",
            javascripts: "public/javascripts",
        },
    }
}

impl PathsConfig {
    pub const SASS_DIR: FieldPath = FieldPath::new("paths.sass_dir");
    pub const CSS_DIR: FieldPath = FieldPath::new("paths.css_dir");
    pub const IMAGES_DIR: FieldPath = FieldPath::new("paths.images_dir");
    pub const JAVASCRIPTS_DIR: FieldPath = FieldPath::new("paths.javascripts_dir");
    pub const IMPORT_PATHS: FieldPath = FieldPath::new("paths.import_paths");

    /// Fill unset directories from `kind` and make everything absolute under `root`.
    pub fn resolve(&self, kind: ProjectType, root: &Path) -> ProjectLayout {
        let defaults = defaults(kind);
        let dir = |value: &Option<PathBuf>, fallback: &str| {
            let relative = value.as_deref().unwrap_or(Path::new(fallback));
            normalize_path(&root.join(relative))
        };

        ProjectLayout {
            root: root.to_path_buf(),
            sass_dir: dir(&self.sass_dir, defaults.sass),
            css_dir: dir(&self.css_dir, defaults.css),
            images_dir: dir(&self.images_dir, defaults.images),
            javascripts_dir: dir(&self.javascripts_dir, defaults.javascripts),
            import_paths: self
                .import_paths
                .iter()
                .map(|p| normalize_path(&root.join(p)))
                .collect(),
        }
    }

    /// Validate resolved directories.
    ///
    /// # Checks
    /// - `sass_dir` must exist and be a directory
    /// - output directories may be missing (the compiler creates them),
    ///   but must be directories when present
    /// - every `import_paths` entry must be an existing directory
    pub fn validate(layout: &ProjectLayout, diag: &mut ConfigDiagnostics) {
        if !layout.sass_dir.exists() {
            diag.error_with_hint(
                Self::SASS_DIR,
                format!("directory not found: {}", layout.sass_dir.display()),
                format!("create it or point {} at your Sass sources", Self::SASS_DIR),
            );
        } else if !layout.sass_dir.is_dir() {
            diag.error(
                Self::SASS_DIR,
                format!("not a directory: {}", layout.sass_dir.display()),
            );
        }

        for (field, dir) in [
            (Self::CSS_DIR, &layout.css_dir),
            (Self::IMAGES_DIR, &layout.images_dir),
            (Self::JAVASCRIPTS_DIR, &layout.javascripts_dir),
        ] {
            if dir.exists() && !dir.is_dir() {
                diag.error(field, format!("not a directory: {}", dir.display()));
            }
        }

        for (idx, dir) in layout.import_paths.iter().enumerate() {
            if !dir.is_dir() {
                diag.error(
                    Self::IMPORT_PATHS,
                    format!("[{idx}] import path not found: {}", dir.display()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_unset() {
        let config = test_parse_config("");
        assert!(config.paths.sass_dir.is_none());
        assert!(config.paths.css_dir.is_none());
        assert!(config.paths.import_paths.is_empty());
    }

    #[test]
    fn test_resolve_stand_alone_defaults() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        let layout = PathsConfig::default().resolve(ProjectType::StandAlone, &root);

        assert_eq!(layout.sass_dir, root.join("sass"));
        assert_eq!(layout.css_dir, root.join("stylesheets"));
        assert_eq!(layout.images_dir, root.join("images"));
        assert_eq!(layout.javascripts_dir, root.join("javascripts"));
    }

    #[test]
    fn test_resolve_rails_defaults() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        let layout = PathsConfig::default().resolve(ProjectType::Rails, &root);

        assert_eq!(layout.sass_dir, root.join("app/assets/stylesheets"));
        assert_eq!(layout.css_dir, root.join("public/stylesheets"));
        assert_eq!(layout.images_dir, root.join("public/images"));
    }

    #[test]
    fn test_explicit_paths_win_over_defaults() {
        let config = test_parse_config(
            r#"
[paths]
sass_dir = "tools/compass/src"
css_dir = "src/static/css"
import_paths = ["tools/compass/mixins"]
"#,
        );
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        let layout = config.paths.resolve(ProjectType::Rails, &root);

        assert_eq!(layout.sass_dir, root.join("tools/compass/src"));
        assert_eq!(layout.css_dir, root.join("src/static/css"));
        assert_eq!(layout.images_dir, root.join("public/images"));
        assert_eq!(layout.import_paths, vec![root.join("tools/compass/mixins")]);
    }

    #[test]
    fn test_validate_reports_missing_sass_dir_and_imports() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        let paths = PathsConfig {
            import_paths: vec!["mixins".into()],
            ..Default::default()
        };
        let layout = paths.resolve(ProjectType::StandAlone, &root);

        let mut diag = ConfigDiagnostics::new();
        PathsConfig::validate(&layout, &mut diag);

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, PathsConfig::SASS_DIR);
        assert_eq!(diag.errors()[1].field, PathsConfig::IMPORT_PATHS);
    }

    #[test]
    fn test_validate_accepts_missing_output_dirs() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        fs::create_dir(root.join("sass")).unwrap();
        let layout = PathsConfig::default().resolve(ProjectType::StandAlone, &root);

        let mut diag = ConfigDiagnostics::new();
        PathsConfig::validate(&layout, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_rejects_file_as_output_dir() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        fs::create_dir(root.join("sass")).unwrap();
        fs::write(root.join("stylesheets"), "").unwrap();
        let layout = PathsConfig::default().resolve(ProjectType::StandAlone, &root);

        let mut diag = ConfigDiagnostics::new();
        PathsConfig::validate(&layout, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, PathsConfig::CSS_DIR);
    }
}
