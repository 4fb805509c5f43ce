//! `[content]` section configuration.
//!
//! Directory layout of the content store: one directory per content
//! type, plus the public assets root and the output location.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in site.toml - content store layout.
///
/// All paths are relative to the project root until
/// [`SiteConfig::update_with_cli`](super::SiteConfig::update_with_cli)
/// normalizes them to absolute paths.
///
/// # Example
/// ```toml
/// [content]
/// posts = "_posts"
/// projects = "_projects"
/// certifications = "_certifications"
/// profile = "_profile"
/// assets = "public"
/// output = "dist"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Project root directory (set from CLI, not from the config file).
    #[serde(default = "defaults::content::root")]
    #[educe(Default = defaults::content::root())]
    pub root: Option<PathBuf>,

    /// Blog posts directory.
    #[serde(default = "defaults::content::posts")]
    #[educe(Default = defaults::content::posts())]
    pub posts: PathBuf,

    /// Projects directory.
    #[serde(default = "defaults::content::projects")]
    #[educe(Default = defaults::content::projects())]
    pub projects: PathBuf,

    /// Certifications directory.
    #[serde(default = "defaults::content::certifications")]
    #[educe(Default = defaults::content::certifications())]
    pub certifications: PathBuf,

    /// Profile sections directory (one markdown file per section).
    #[serde(default = "defaults::content::profile")]
    #[educe(Default = defaults::content::profile())]
    pub profile: PathBuf,

    /// Public assets root. Site-relative image paths in frontmatter
    /// are validated against this directory.
    #[serde(default = "defaults::content::assets")]
    #[educe(Default = defaults::content::assets())]
    pub assets: PathBuf,

    /// Output directory for generated data files.
    #[serde(default = "defaults::content::output")]
    #[educe(Default = defaults::content::output())]
    pub output: PathBuf,

    /// Subdirectory of `output` that receives the JSON data files.
    #[serde(default = "defaults::content::data_dir")]
    #[educe(Default = defaults::content::data_dir())]
    pub data_dir: PathBuf,
}
