//! Asset references, version tokens and URL generation.

mod kind;
mod reference;
mod url;
pub mod version;

// Types
pub use kind::AssetKind;
pub use reference::AssetReference;
pub use version::{BustError, CacheBuster, MtimeBuster, VersionToken};

// URL generation
pub use url::AssetUrls;
