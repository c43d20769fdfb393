//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! style = "compact"        # nested | expanded | compact | compressed
//! relative_assets = true   # emit asset URLs relative to the stylesheet
//! line_comments = false    # source line comments in emitted CSS
//! ```
//!
//! `style` and `line_comments` fall back to environment defaults when unset:
//! development gets `expanded` with line comments, production gets
//! `compressed` without.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::project::Environment;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Formatting of the emitted CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    /// Indentation mirrors the Sass nesting.
    Nested,
    /// One declaration per line, rules flush left.
    Expanded,
    /// One rule per line.
    Compact,
    /// Minimal whitespace.
    Compressed,
}

impl OutputStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nested => "nested",
            Self::Expanded => "expanded",
            Self::Compact => "compact",
            Self::Compressed => "compressed",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSS formatting; environment default when unset.
    pub style: Option<OutputStyle>,

    /// Emit asset URLs relative to the stylesheet's web directory.
    pub relative_assets: bool,

    /// Source line comments; environment default when unset.
    pub line_comments: Option<bool>,
}

impl OutputConfig {
    pub const STYLE: FieldPath = FieldPath::new("output.style");
    pub const LINE_COMMENTS: FieldPath = FieldPath::new("output.line_comments");

    pub fn effective_style(&self, env: Environment) -> OutputStyle {
        self.style.unwrap_or(match env {
            Environment::Development => OutputStyle::Expanded,
            Environment::Production => OutputStyle::Compressed,
        })
    }

    pub fn effective_line_comments(&self, env: Environment) -> bool {
        self.line_comments
            .unwrap_or(env == Environment::Development)
    }

    /// Warn when explicitly requested line comments cannot appear in the output.
    pub fn validate(&self, env: Environment, diag: &mut ConfigDiagnostics) {
        if self.line_comments == Some(true)
            && self.effective_style(env) == OutputStyle::Compressed
        {
            diag.warn(
                Self::LINE_COMMENTS,
                format!(
                    "{} has no effect with {} = \"compressed\"",
                    Self::LINE_COMMENTS.as_str(),
                    Self::STYLE.as_str()
                ),
            );
        }
    }
}
