//! Asset URL generation.
//!
//! Maps an asset name to the URL a stylesheet should reference, the way
//! `image-url()` and friends expand at compile time:
//!
//! ```text
//! image_url("logo.png")
//!   web path   http.images / logo.png               img/logo.png
//!   public     http.path + web path                 /static/img/logo.png
//!              (or relative to http.stylesheets)    ../img/logo.png
//!   real path  paths.images_dir / logo.png          <root>/images/logo.png
//!   result     public ? token                       /static/img/logo.png?1704067200
//! ```

use super::{AssetKind, AssetReference, BustError, CacheBuster};
use crate::config::ProjectConfig;
use crate::utils::path::{append_query, is_external_url, join_url, relative_url};

/// URL builder bound to one configuration and one cache buster.
pub struct AssetUrls<'a> {
    config: &'a ProjectConfig,
    buster: &'a dyn CacheBuster,
}

impl<'a> AssetUrls<'a> {
    pub fn new(config: &'a ProjectConfig, buster: &'a dyn CacheBuster) -> Self {
        Self { config, buster }
    }

    pub fn image_url(&self, path: &str) -> Result<String, BustError> {
        self.url(AssetKind::Image, path)
    }

    pub fn stylesheet_url(&self, path: &str) -> Result<String, BustError> {
        self.url(AssetKind::Stylesheet, path)
    }

    pub fn javascript_url(&self, path: &str) -> Result<String, BustError> {
        self.url(AssetKind::Javascript, path)
    }

    /// URL for `path`, an asset name relative to the directory of `kind`.
    ///
    /// External URLs are returned untouched.
    pub fn url(&self, kind: AssetKind, path: &str) -> Result<String, BustError> {
        if is_external_url(path) {
            return Ok(path.to_string());
        }

        let name = path.trim_start_matches('/');
        let http_path = join_url(self.config.http.web_dir(kind), name);
        let url = self.public_url(&http_path);

        if !self.config.http.cache_buster {
            return Ok(url);
        }

        let file = name.split(['?', '#']).next().unwrap_or(name);
        let real_path = self.config.real_dir(kind).join(file);
        let token = self
            .buster
            .bust(&AssetReference::new(&http_path, &real_path))?;

        Ok(append_query(&url, &token.to_string()))
    }

    fn public_url(&self, http_path: &str) -> String {
        let absolute = self.absolute(http_path);
        if !self.config.output.relative_assets {
            return absolute;
        }

        let from = self.absolute(&self.config.http.stylesheets);
        // Cannot relativize across hosts
        if is_external_url(&from) != is_external_url(&absolute) {
            return absolute;
        }
        relative_url(&from, &absolute)
    }

    fn absolute(&self, web_path: &str) -> String {
        if web_path.starts_with('/') || is_external_url(web_path) {
            web_path.to_string()
        } else {
            join_url(&self.config.http.path, web_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{MtimeBuster, VersionToken};
    use crate::config::test_project;
    use std::fs::{self, File};
    use std::path::Path;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};
    use tempfile::TempDir;

    const NEW_YEAR_2024: u64 = 1_704_067_200;

    fn fixed_clock() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_704_070_000)
    }

    fn write_with_mtime(path: &Path, secs: u64) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
        let file = File::options().write(true).open(path).unwrap();
        file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    const HTTP: &str = r#"
[http]
path = "/static"
images = "img"
stylesheets = "css"
javascripts = "js"
"#;

    #[test]
    fn test_absolute_url_with_mtime_token() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), HTTP);
        write_with_mtime(&config.layout.images_dir.join("logo.png"), NEW_YEAR_2024);

        let buster = MtimeBuster::new();
        let urls = AssetUrls::new(&config, &buster);
        assert_eq!(
            urls.image_url("logo.png").unwrap(),
            "/static/img/logo.png?1704067200"
        );
        // Leading slash on the asset name is ignored
        assert_eq!(
            urls.image_url("/logo.png").unwrap(),
            "/static/img/logo.png?1704067200"
        );
    }

    #[test]
    fn test_relative_assets() {
        let dir = TempDir::new().unwrap();
        let config = test_project(
            dir.path(),
            &format!("[output]\nrelative_assets = true\n{HTTP}"),
        );
        write_with_mtime(&config.layout.images_dir.join("icons/x.png"), NEW_YEAR_2024);
        write_with_mtime(&config.layout.css_dir.join("print.css"), NEW_YEAR_2024 + 1);

        let buster = MtimeBuster::new();
        let urls = AssetUrls::new(&config, &buster);
        assert_eq!(
            urls.image_url("icons/x.png").unwrap(),
            "../img/icons/x.png?1704067200"
        );
        assert_eq!(
            urls.stylesheet_url("print.css").unwrap(),
            "print.css?1704067201"
        );
    }

    #[test]
    fn test_missing_asset_uses_clock() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), HTTP);

        let buster = MtimeBuster::with_clock(fixed_clock);
        let urls = AssetUrls::new(&config, &buster);
        assert_eq!(
            urls.javascript_url("app.js").unwrap(),
            "/static/js/app.js?1704070000"
        );
    }

    #[test]
    fn test_cache_buster_disabled() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), &format!("{HTTP}cache_buster = false\n"));

        let buster = MtimeBuster::new();
        let urls = AssetUrls::new(&config, &buster);
        assert_eq!(urls.image_url("logo.png").unwrap(), "/static/img/logo.png");
    }

    #[test]
    fn test_external_urls_pass_through() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), HTTP);

        let buster = MtimeBuster::new();
        let urls = AssetUrls::new(&config, &buster);
        for url in [
            "https://example.com/a.png",
            "//cdn.example.com/a.png",
            "data:image/png;base64,AAAA",
        ] {
            assert_eq!(urls.image_url(url).unwrap(), url);
        }
    }

    #[test]
    fn test_fragment_stays_last_and_real_path_ignores_it() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), HTTP);
        write_with_mtime(&config.layout.images_dir.join("sprite.svg"), NEW_YEAR_2024);

        let buster = MtimeBuster::new();
        let urls = AssetUrls::new(&config, &buster);
        assert_eq!(
            urls.image_url("sprite.svg#arrow").unwrap(),
            "/static/img/sprite.svg?1704067200#arrow"
        );
    }

    #[test]
    fn test_asset_host_in_http_path() {
        let dir = TempDir::new().unwrap();
        let config = test_project(
            dir.path(),
            "[http]\npath = \"https://cdn.example.com\"\nimages = \"img\"\ncache_buster = false\n",
        );

        let buster = MtimeBuster::new();
        let urls = AssetUrls::new(&config, &buster);
        assert_eq!(
            urls.image_url("logo.png").unwrap(),
            "https://cdn.example.com/img/logo.png"
        );
    }

    #[test]
    fn test_buster_receives_web_and_real_paths() {
        fn expects_logo(asset: &AssetReference<'_>) -> Result<VersionToken, BustError> {
            let ok = asset.http_path == "img/logo.png"
                && asset.real_path.ends_with("images/logo.png");
            Ok(VersionToken::from_secs(u64::from(ok)))
        }

        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), HTTP);
        let urls = AssetUrls::new(&config, &expects_logo);
        assert_eq!(urls.image_url("logo.png").unwrap(), "/static/img/logo.png?1");
    }

    #[cfg(unix)]
    #[test]
    fn test_access_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), HTTP);
        // images_dir exists as a file, so stat of images/logo.png fails with ENOTDIR
        fs::write(&config.layout.images_dir, "").unwrap();

        let buster = MtimeBuster::with_clock(fixed_clock);
        let urls = AssetUrls::new(&config, &buster);
        let err = urls.image_url("logo.png").unwrap_err();
        assert!(matches!(err, BustError::Io { .. }));
        assert!(err.to_string().contains("logo.png"));
    }
}
