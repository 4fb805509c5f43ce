//! Blog post loading.
//!
//! Reads every `.md` file in the posts directory, derives the slug
//! from the filename (stripping the legacy `YYYY-MM-DD-` prefix),
//! validates the cover image and returns the collection sorted by
//! date descending.

use super::{
    assets::{AssetStore, resolve_image},
    dedupe_by_key, frontmatter, markdown_files, string_list,
    types::{Author, Level, Post},
};
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::{fs, path::Path, sync::LazyLock};

/// Legacy post filenames carry a leading date segment:
/// `2024-01-01-intro.md` → slug `intro`.
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}-").unwrap());

/// Raw post frontmatter. Loose by design: every field is optional
/// here, and [`load_post`] applies the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PostFrontmatter {
    title: String,
    date: String,
    excerpt: String,
    cover_image: Option<String>,
    reading_time: Option<u32>,
    #[serde(deserialize_with = "string_list")]
    tags: Vec<String>,
    series: Option<String>,
    series_order: Option<i64>,
    level: Option<Level>,
    #[serde(deserialize_with = "string_list")]
    prerequisites: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    learning_objectives: Vec<String>,
    author: Option<Author>,
    math_formulas: Option<bool>,
    code_examples: Option<bool>,
}

/// Derive the unique slug from a post filename.
pub fn derive_slug(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    DATE_PREFIX.replace(&stem, "").into_owned()
}

/// Load the full post collection, sorted by date descending.
///
/// Malformed files are skipped with a warning; a missing directory
/// yields an empty collection. Slug collisions keep the later file.
pub fn load_posts(config: &SiteConfig, assets: &dyn AssetStore) -> Vec<Post> {
    let Some(files) = markdown_files(&config.content.posts, "posts") else {
        return Vec::new();
    };

    let mut posts: Vec<Post> = Vec::new();
    for path in &files {
        match load_post(path, config, assets) {
            Ok(post) => posts.push(post),
            Err(err) => log!("warn"; "skipping {}: {err:#}", path.display()),
        }
    }

    let mut posts = dedupe_by_key(posts, |post| &post.slug);
    // Stable sort: files that tie on date keep filename order
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

/// Load and coerce a single post file.
fn load_post(path: &Path, config: &SiteConfig, assets: &dyn AssetStore) -> Result<Post> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (meta, body) = frontmatter::parse::<PostFrontmatter>(&raw)?;

    let slug = derive_slug(path);
    let cover_image = resolve_image(
        meta.cover_image.as_deref(),
        assets,
        &config.blog.placeholder_image,
        &format!("post {slug}"),
    );

    Ok(Post {
        slug,
        title: meta.title,
        date: meta.date,
        excerpt: meta.excerpt,
        content: body.to_owned(),
        cover_image,
        reading_time: meta.reading_time.unwrap_or(0),
        tags: meta.tags,
        series: meta.series,
        series_order: meta.series_order,
        level: meta.level.unwrap_or_default(),
        prerequisites: meta.prerequisites,
        learning_objectives: meta.learning_objectives,
        author: meta.author,
        math_formulas: meta.math_formulas,
        code_examples: meta.code_examples,
    })
}
