//! `token` and `url` commands: resolve cache-buster tokens in batches.
//!
//! Assets are resolved in parallel; output keeps argument order. Every
//! failure is reported with its path, and the command fails if any asset
//! could not be resolved, so a build script never picks up a stale URL.

use anyhow::{Result, bail};
use rayon::prelude::*;
use std::path::PathBuf;

use crate::{
    asset::{AssetKind, AssetReference, AssetUrls, BustError, CacheBuster, MtimeBuster, VersionToken},
    config::ProjectConfig,
    debug, logger,
    utils::path::resolve_path,
};

/// Print `PATH TOKEN` for each file.
pub fn print_tokens(config: &ProjectConfig, paths: &[PathBuf]) -> Result<()> {
    let buster = MtimeBuster::new();
    report(resolve_tokens(config, &buster, paths), |label, token| {
        format!("{label} {token}")
    })
}

/// Print the cache-busted URL of each asset.
pub fn print_urls(config: &ProjectConfig, kind: AssetKind, names: &[String]) -> Result<()> {
    let buster = MtimeBuster::new();
    report(resolve_urls(config, &buster, kind, names), |label, url| {
        debug!("url"; "{label} -> {url}");
        url.to_string()
    })
}

type Resolved<T> = Vec<(String, Result<T, BustError>)>;

fn resolve_tokens(
    config: &ProjectConfig,
    buster: &dyn CacheBuster,
    paths: &[PathBuf],
) -> Resolved<VersionToken> {
    paths
        .par_iter()
        .map(|path| {
            let label = path.to_string_lossy().replace('\\', "/");
            let real_path = resolve_path(path, config.root());
            let token = buster.bust(&AssetReference::new(&label, &real_path));
            (label, token)
        })
        .collect()
}

fn resolve_urls(
    config: &ProjectConfig,
    buster: &dyn CacheBuster,
    kind: AssetKind,
    names: &[String],
) -> Resolved<String> {
    let urls = AssetUrls::new(config, buster);
    names
        .par_iter()
        .map(|name| (name.clone(), urls.url(kind, name)))
        .collect()
}

fn report<T>(results: Resolved<T>, line: impl Fn(&str, &T) -> String) -> Result<()> {
    let mut failed = 0usize;
    for (label, result) in &results {
        match result {
            Ok(value) => println!("{}", line(label, value)),
            Err(err) => {
                failed += 1;
                let detail = std::error::Error::source(err)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                logger::failure(&err.to_string(), &detail);
            }
        }
    }

    if failed > 0 {
        bail!(
            "{failed} of {} asset{} could not be resolved",
            results.len(),
            if results.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_project;
    use std::fs::{self, File};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};
    use tempfile::TempDir;

    fn fixed_clock() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_704_070_000)
    }

    #[test]
    fn test_tokens_keep_argument_order() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), "");
        let existing = config.root().join("stylesheets/app.css");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "a {}").unwrap();
        File::options()
            .write(true)
            .open(&existing)
            .unwrap()
            .set_modified(UNIX_EPOCH + Duration::from_secs(1_704_067_200))
            .unwrap();

        let buster = MtimeBuster::with_clock(fixed_clock);
        let paths = vec![
            PathBuf::from("stylesheets/missing.css"),
            existing.clone(),
        ];
        let results = resolve_tokens(&config, &buster, &paths);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "stylesheets/missing.css");
        assert_eq!(results[0].1.as_ref().unwrap().to_string(), "1704070000");
        assert_eq!(results[1].1.as_ref().unwrap().to_string(), "1704067200");
    }

    #[test]
    fn test_urls_are_busted() {
        let dir = TempDir::new().unwrap();
        let config = test_project(dir.path(), "[http]\nstylesheets = \"css\"\n");
        let buster = MtimeBuster::with_clock(fixed_clock);

        let names = vec!["app.css".to_string(), "https://cdn.example.com/x.css".to_string()];
        let results = resolve_urls(&config, &buster, AssetKind::Stylesheet, &names);

        assert_eq!(results[0].1.as_ref().unwrap(), "/css/app.css?1704070000");
        assert_eq!(results[1].1.as_ref().unwrap(), "https://cdn.example.com/x.css");
    }

    #[test]
    fn test_report_fails_on_any_error() {
        let ok: Resolved<String> = vec![("a".into(), Ok("a?1".into()))];
        assert!(report(ok, |_, v| v.clone()).is_ok());

        let mixed: Resolved<String> = vec![
            ("a".into(), Ok("a?1".into())),
            (
                "b".into(),
                Err(BustError::BeforeEpoch {
                    path: PathBuf::from("b"),
                }),
            ),
        ];
        let err = report(mixed, |_, v| v.clone()).unwrap_err();
        assert!(err.to_string().contains("1 of 2 assets"));
    }
}
