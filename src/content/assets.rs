//! Asset path validation.
//!
//! Frontmatter image fields claim site-relative paths like
//! `/images/cover.png`. Before a record is handed to the rest of the
//! pipeline those claims are checked against the public assets root;
//! stale or absent paths are replaced with the configured placeholder
//! so the presentation layer never renders a broken image.
//!
//! The existence check is behind the [`AssetStore`] trait so loaders
//! can be tested without a real filesystem.

use crate::log;
use std::path::{Path, PathBuf};

/// File-existence oracle for the public assets tree.
pub trait AssetStore {
    /// Whether the site-relative path (leading `/` included) points
    /// at an existing asset.
    fn exists(&self, site_path: &str) -> bool;
}

/// Real-filesystem asset store rooted at the public assets directory.
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for FsAssets {
    fn exists(&self, site_path: &str) -> bool {
        let relative = site_path.trim_start_matches('/');
        self.root.join(relative).is_file()
    }
}

/// Closure-backed store, mainly for tests.
pub struct FnAssets<F>(pub F);

impl<F: Fn(&str) -> bool> AssetStore for FnAssets<F> {
    fn exists(&self, site_path: &str) -> bool {
        (self.0)(site_path)
    }
}

/// Resolve a frontmatter image value to a safe path.
///
/// The value is used as-is only when it is a non-empty site-relative
/// path (`/`-prefixed) that exists in the asset store; anything else
/// becomes the placeholder. A warning is logged only when a
/// plausible-looking path turns out to be stale - absent values are
/// substituted silently.
pub fn resolve_image(
    value: Option<&str>,
    assets: &dyn AssetStore,
    placeholder: &str,
    context: &str,
) -> String {
    match value {
        Some(path) if !path.is_empty() && path.starts_with('/') => {
            if assets.exists(path) {
                path.to_owned()
            } else {
                log!("warn"; "{context}: image not found: {path}, using placeholder");
                placeholder.to_owned()
            }
        }
        _ => placeholder.to_owned(),
    }
}

/// Resolve an image that has its own section-specific placeholder
/// (profile sections each carry one).
pub fn resolve_image_or(value: Option<&str>, assets: &dyn AssetStore, placeholder: &str) -> String {
    match value {
        Some(path) if !path.is_empty() && path.starts_with('/') && assets.exists(path) => {
            path.to_owned()
        }
        _ => placeholder.to_owned(),
    }
}
