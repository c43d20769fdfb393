//! Asset version tokens for cache busting.
//!
//! A token is the asset's modification time in whole seconds since the Unix
//! epoch. When the asset does not exist yet (a stylesheet the compiler has
//! not written, say) the current wall-clock time is used instead, so a token
//! is always produced. Any other file-system failure is an error: masking a
//! permission problem as "file absent" would ship a URL that never changes.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use super::AssetReference;
use crate::debug;

/// Version token appended to an asset URL.
///
/// Always renders as a non-empty run of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionToken(u64);

impl VersionToken {
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised while computing a version token.
#[derive(Debug, Error)]
pub enum BustError {
    /// The metadata lookup failed for a reason other than the file being absent.
    #[error("cannot read modification time of `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The timestamp (file mtime or wall clock) predates the Unix epoch.
    #[error("timestamp for `{}` is before the Unix epoch", path.display())]
    BeforeEpoch { path: PathBuf },
}

/// Computes the version token for an asset.
///
/// This is the hook a stylesheet compiler calls whenever it emits an asset
/// URL. Functions with the matching signature implement it too:
///
/// ```ignore
/// fn fixed(_: &AssetReference<'_>) -> Result<VersionToken, BustError> {
///     Ok(VersionToken::from_secs(42))
/// }
/// let urls = AssetUrls::new(&config, &fixed);
/// ```
pub trait CacheBuster: Send + Sync {
    fn bust(&self, asset: &AssetReference<'_>) -> Result<VersionToken, BustError>;
}

impl<F> CacheBuster for F
where
    F: Fn(&AssetReference<'_>) -> Result<VersionToken, BustError> + Send + Sync,
{
    fn bust(&self, asset: &AssetReference<'_>) -> Result<VersionToken, BustError> {
        self(asset)
    }
}

/// Cache buster keyed on file modification time.
///
/// Holds no state besides the clock, so one instance can serve any number of
/// threads. Nothing is cached: every call stats the file again.
#[derive(Debug, Clone, Copy)]
pub struct MtimeBuster {
    clock: fn() -> SystemTime,
}

impl Default for MtimeBuster {
    fn default() -> Self {
        Self {
            clock: SystemTime::now,
        }
    }
}

impl MtimeBuster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `clock` instead of the system clock for missing files.
    pub const fn with_clock(clock: fn() -> SystemTime) -> Self {
        Self { clock }
    }

    /// Resolve the token for `real_path`.
    ///
    /// `http_path` is accepted for parity with the compiler hook and does not
    /// affect the result.
    pub fn resolve(&self, http_path: &str, real_path: &Path) -> Result<VersionToken, BustError> {
        self.bust(&AssetReference::new(http_path, real_path))
    }
}

impl CacheBuster for MtimeBuster {
    fn bust(&self, asset: &AssetReference<'_>) -> Result<VersionToken, BustError> {
        let path = asset.real_path;

        let time = match path.metadata() {
            Ok(meta) => meta.modified().map_err(|source| BustError::Io {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("bust"; "{} not found, using current time", path.display());
                (self.clock)()
            }
            Err(source) => {
                return Err(BustError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        epoch_secs(time, path).map(VersionToken::from_secs)
    }
}

/// Resolve a token with the system clock.
///
/// Shorthand for `MtimeBuster::new().resolve(http_path, real_path)`.
pub fn resolve(http_path: &str, real_path: &Path) -> Result<VersionToken, BustError> {
    MtimeBuster::new().resolve(http_path, real_path)
}

fn epoch_secs(time: SystemTime, path: &Path) -> Result<u64, BustError> {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| BustError::BeforeEpoch {
            path: path.to_path_buf(),
        })
}
