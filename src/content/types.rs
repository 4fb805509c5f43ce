//! Typed content records.
//!
//! These are the immutable value records produced by the loaders and
//! consumed read-only by the repository, the view-model builder and
//! the JSON data emission. Optional fields are skipped during
//! serialization; list fields are always present (possibly empty).

use crate::config::SeriesConfig;
use serde::{Deserialize, Serialize};

/// Difficulty level of a post or series.
///
/// Variant order defines the ordinal used by the level sort
/// (beginner < intermediate < advanced).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Ordinal used for difficulty sorting: beginner=1, advanced=3.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    /// Parse a filter value. Anything but a known level name (the
    /// `"all"` sentinel included) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Post author reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// A single blog post, keyed by slug.
///
/// Created by placing a markdown file in the posts directory;
/// immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Post {
    /// Unique URL-safe key derived from the filename.
    pub slug: String,

    pub title: String,

    /// ISO date string (e.g., "2024-01-15"). Collections sort on this
    /// descending, so lexicographic order is date order.
    pub date: String,

    pub excerpt: String,

    /// Markdown body.
    pub content: String,

    /// Validated cover image path, never empty - the placeholder is
    /// substituted when the frontmatter value is absent or stale.
    pub cover_image: String,

    /// Estimated reading time in minutes.
    pub reading_time: u32,

    pub tags: Vec<String>,

    /// Series id this post belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    /// Position within the series (ascending).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_order: Option<i64>,

    pub level: Level,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub learning_objectives: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub math_formulas: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_examples: Option<bool>,
}

/// A series with its derived post list attached.
///
/// The static part comes from `[[blog.series]]` config; `posts` is
/// always recomputed from the post collection, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct BlogSeries {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub level: Level,
    pub estimated_duration: String,
    /// Member posts, ordered by `series_order` ascending.
    pub posts: Vec<Post>,
}

impl BlogSeries {
    /// Attach a computed post list to a static series entry.
    pub fn from_config(config: &SeriesConfig, posts: Vec<Post>) -> Self {
        Self {
            id: config.id.clone(),
            title: config.title.clone(),
            description: config.description.clone(),
            icon: config.icon.clone(),
            color: config.color.clone(),
            level: config.level,
            estimated_duration: config.estimated_duration.clone(),
            posts,
        }
    }
}

/// A certification, keyed by id. Sorted by `issue_date` descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub description: String,
    pub image: String,
    pub url: String,
    pub skills: Vec<String>,
    pub content: String,
}

/// A portfolio project, keyed by slug. Sorted by `date` descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Falls back to `description` when absent in frontmatter.
    pub long_description: String,
    pub image: String,
    pub category: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub date: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_projects: Vec<RelatedProject>,
}

/// Lightweight reference to another project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedProject {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
}
