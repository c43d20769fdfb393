//! `[project]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [project]
//! type = "stand_alone"        # stand_alone | rails
//! environment = "production"  # production | development
//! path = "../../"             # project root, relative to stylebust.toml
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Project layout convention. Selects defaults for unset `[paths]` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    StandAlone,
    Rails,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StandAlone => "stand_alone",
            Self::Rails => "rails",
        })
    }
}

/// Build environment. Development output carries line comments by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Development => "development",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    /// Layout convention.
    #[serde(rename = "type")]
    pub kind: ProjectType,

    /// Build environment.
    pub environment: Environment,

    /// Project root, relative to the directory holding the config file.
    pub path: PathBuf,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            kind: ProjectType::default(),
            environment: Environment::default(),
            path: ".".into(),
        }
    }
}

impl ProjectSection {
    pub const PATH: FieldPath = FieldPath::new("project.path");

    /// Validate the resolved project root.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if !root.exists() {
            diag.error_with_hint(
                Self::PATH,
                format!("project root not found: {}", root.display()),
                format!("{} is resolved relative to the config file", Self::PATH),
            );
        } else if !root.is_dir() {
            diag.error(
                Self::PATH,
                format!("project root is not a directory: {}", root.display()),
            );
        }
    }
}
