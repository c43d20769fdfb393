//! Asset kind definitions.

use std::fmt;

/// Kind of web asset, selecting which configured directory and web path apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AssetKind {
    /// Image under `paths.images_dir`, served from `http.images`.
    #[default]
    Image,
    /// Compiled stylesheet under `paths.css_dir`, served from `http.stylesheets`.
    Stylesheet,
    /// Script under `paths.javascripts_dir`, served from `http.javascripts`.
    Javascript,
}

impl AssetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Stylesheet => "stylesheet",
            Self::Javascript => "javascript",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
