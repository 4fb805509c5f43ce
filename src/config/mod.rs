//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)             |
//! | `[content]` | Content store layout and output paths          |
//! | `[blog]`    | Blog list view tuning and the series list      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Portfolio"
//! description = "Personal site"
//!
//! [content]
//! posts = "_posts"
//! assets = "public"
//!
//! [blog]
//! page_size = 9
//!
//! [[blog.series]]
//! id = "machine-learning"
//! title = "Machine Learning"
//! ```

mod base;
mod blog;
mod content;
pub mod defaults;
mod error;

// Re-export public types used by other modules
pub use blog::{BlogConfig, SeriesConfig};
pub use content::ContentConfig;

// Internal imports used in this module
use base::BaseConfig;
use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content store layout
    #[serde(default)]
    pub content: ContentConfig,

    /// Blog list view settings and series list
    #[serde(default)]
    pub blog: BlogConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.content.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.content.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Look up a series entry by id in the fixed series list.
    pub fn series_by_id(&self, id: &str) -> Option<&SeriesConfig> {
        self.blog.series.iter().find(|s| s.id == id)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        self.set_root(&root);
        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.content.posts, cli.posts.as_ref());
        Self::update_option(&mut self.content.assets, cli.assets.as_ref());
        Self::update_option(&mut self.content.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.content.posts = Self::normalize_path(&root.join(&self.content.posts));
        self.content.projects = Self::normalize_path(&root.join(&self.content.projects));
        self.content.certifications =
            Self::normalize_path(&root.join(&self.content.certifications));
        self.content.profile = Self::normalize_path(&root.join(&self.content.profile));
        self.content.assets = Self::normalize_path(&root.join(&self.content.assets));
        self.content.output = Self::normalize_path(&root.join(&self.content.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if self.blog.page_size == 0 {
            bail!(ConfigError::Validation(
                "[blog.page_size] must be at least 1".into()
            ));
        }

        let mut seen = HashSet::new();
        for series in &self.blog.series {
            if series.id.is_empty() {
                bail!(ConfigError::Validation(
                    "[[blog.series]] entries require a non-empty id".into()
                ));
            }
            if !seen.insert(series.id.as_str()) {
                bail!(ConfigError::Validation(format!(
                    "duplicate series id: {}",
                    series.id
                )));
            }
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
