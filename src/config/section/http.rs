//! `[http]` section configuration.
//!
//! Web-facing paths used when emitting asset URLs.
//!
//! # Example
//!
//! ```toml
//! [http]
//! path = "/static"      # web root of the project (may be an asset host URL)
//! images = "img"        # served location of paths.images_dir
//! stylesheets = "css"   # served location of paths.css_dir
//! javascripts = "js"    # served location of paths.javascripts_dir
//! cache_buster = true   # append ?<mtime> to asset URLs
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::AssetKind;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Web root that relative web paths hang off.
    pub path: String,
    /// Web path of images.
    pub images: String,
    /// Web path of compiled stylesheets.
    pub stylesheets: String,
    /// Web path of scripts.
    pub javascripts: String,
    /// Append a version token to generated asset URLs.
    pub cache_buster: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            path: "/".into(),
            images: "images".into(),
            stylesheets: "stylesheets".into(),
            javascripts: "javascripts".into(),
            cache_buster: true,
        }
    }
}

impl HttpConfig {
    pub const PATH: FieldPath = FieldPath::new("http.path");
    pub const IMAGES: FieldPath = FieldPath::new("http.images");
    pub const STYLESHEETS: FieldPath = FieldPath::new("http.stylesheets");
    pub const JAVASCRIPTS: FieldPath = FieldPath::new("http.javascripts");

    /// Web directory serving assets of `kind`.
    pub fn web_dir(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Image => &self.images,
            AssetKind::Stylesheet => &self.stylesheets,
            AssetKind::Javascript => &self.javascripts,
        }
    }

    /// Web paths are joined with asset names, so they cannot carry a query or fragment.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::PATH, &self.path),
            (Self::IMAGES, &self.images),
            (Self::STYLESHEETS, &self.stylesheets),
            (Self::JAVASCRIPTS, &self.javascripts),
        ] {
            if value.contains(['?', '#']) {
                diag.error_with_hint(
                    field,
                    format!("web path must not contain `?` or `#`: {value}"),
                    "version tokens are appended automatically, see `http.cache_buster`",
                );
            }
        }
    }
}
