//! `[blog]` section configuration.
//!
//! Blog list-view tuning (page size, placeholder image) and the fixed
//! series configuration list. Series are declared here, not derived
//! from content: a post opts into a series by naming its id in
//! frontmatter, and membership is recomputed from the post collection
//! on every access.

use super::defaults;
use crate::content::Level;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[blog]` section in site.toml.
///
/// # Example
/// ```toml
/// [blog]
/// page_size = 9
/// placeholder_image = "/placeholder.png"
///
/// [[blog.series]]
/// id = "machine-learning"
/// title = "Machine Learning"
/// description = "ML algorithms, model training, and deployment"
/// icon = "🤖"
/// color = "bg-purple-500"
/// level = "intermediate"
/// estimated_duration = "16 weeks"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BlogConfig {
    /// Posts per page in the blog list view. The legacy flat list
    /// used 6; the series-aware view uses 9, which is the default.
    #[serde(default = "defaults::blog::page_size")]
    #[educe(Default = defaults::blog::page_size())]
    pub page_size: usize,

    /// Fallback image substituted for missing or invalid image paths.
    #[serde(default = "defaults::blog::placeholder_image")]
    #[educe(Default = defaults::blog::placeholder_image())]
    pub placeholder_image: String,

    /// The fixed list of learning series.
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

/// A single `[[blog.series]]` entry - static metadata for a series.
///
/// The derived post list lives on
/// [`BlogSeries`](crate::content::BlogSeries), never here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    /// Unique series id referenced by post frontmatter.
    pub id: String,

    /// Display title.
    pub title: String,

    /// One-paragraph description.
    #[serde(default)]
    pub description: String,

    /// Emoji or icon path shown on series cards.
    #[serde(default)]
    pub icon: String,

    /// Accent color class for series cards.
    #[serde(default)]
    pub color: String,

    /// Overall difficulty of the series.
    #[serde(default)]
    pub level: Level,

    /// Human-readable estimated completion time, e.g. "8 weeks".
    #[serde(default)]
    pub estimated_duration: String,
}
