//! JSON data emission.
//!
//! Serializes every loaded collection to pretty-printed JSON under
//! `<output>/<data_dir>/` so the rendered site (or any downstream
//! consumer) reads static files instead of re-parsing markdown.

use crate::{
    config::SiteConfig,
    log,
    repository::ContentRepository,
    view::{BlogFilters, BlogPage, BlogStats, Facets},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{collections::BTreeMap, fs, path::Path};

/// Blog index payload: aggregate numbers, filter facets and the
/// unfiltered first page.
#[derive(Debug, Serialize)]
struct BlogIndex {
    stats: BlogStats,
    facets: Facets,
    first_page: BlogPage,
}

/// Previous/next slugs for one series member, keyed by post slug in
/// `navigation.json`.
#[derive(Debug, Serialize)]
struct NavEntry<'a> {
    series: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<&'a str>,
}

/// Write all data files. Returns the number of files written.
pub fn write_data(config: &SiteConfig, repo: &ContentRepository) -> Result<usize> {
    let dir = config.content.output.join(&config.content.data_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;

    write_json(&dir, "posts.json", &repo.posts())?;
    write_json(&dir, "series.json", &repo.series_with_posts())?;
    write_json(&dir, "projects.json", &repo.projects())?;
    write_json(&dir, "certifications.json", &repo.certifications())?;
    write_json(&dir, "profile.json", repo.profile())?;

    let index = BlogIndex {
        stats: BlogStats::compute(repo.posts()),
        facets: Facets::collect(repo.posts()),
        first_page: BlogFilters::from_config(config).paginate(repo.posts()),
    };
    write_json(&dir, "blog.json", &index)?;

    write_json(&dir, "navigation.json", &navigation(repo))?;

    Ok(7)
}

/// Collect the series navigation of every series member, so post
/// pages can link previous/next without re-deriving order.
fn navigation<'r>(repo: &'r ContentRepository) -> BTreeMap<&'r str, NavEntry<'r>> {
    repo.posts()
        .iter()
        .filter_map(|post| {
            let series = post.series.as_deref()?;
            let nav = repo.series_navigation(post);
            Some((
                post.slug.as_str(),
                NavEntry {
                    series,
                    previous: nav.previous.map(|p| p.slug.as_str()),
                    next: nav.next.map(|p| p.slug.as_str()),
                },
            ))
        })
        .collect()
}

fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {name}"))?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    log!("build"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FnAssets;
    use tempfile::TempDir;

    const NO_ASSETS: FnAssets<fn(&str) -> bool> = FnAssets(|_| false);

    #[test]
    fn test_write_data_emits_all_files() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.content.posts = dir.path().join("_posts");
        config.content.output = dir.path().join("dist");

        std::fs::create_dir_all(dir.path().join("_posts")).unwrap();
        std::fs::write(
            dir.path().join("_posts/hello.md"),
            "---\ntitle: Hello\ndate: \"2024-01-01\"\ntags: [rust]\n---\nBody",
        )
        .unwrap();

        let repo = ContentRepository::load_with_assets(&config, &NO_ASSETS);
        let written = write_data(&config, &repo).unwrap();

        assert_eq!(written, 7);
        let data_dir = dir.path().join("dist/_data");
        for name in [
            "posts.json",
            "series.json",
            "projects.json",
            "certifications.json",
            "profile.json",
            "blog.json",
            "navigation.json",
        ] {
            assert!(data_dir.join(name).is_file(), "missing {name}");
        }

        let posts: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(data_dir.join("posts.json")).unwrap())
                .unwrap();
        assert_eq!(posts[0]["slug"], "hello");

        let blog: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(data_dir.join("blog.json")).unwrap())
                .unwrap();
        assert_eq!(blog["stats"]["post_count"], 1);
        assert_eq!(blog["first_page"]["page"], 1);
    }

    #[test]
    fn test_navigation_links_series_members() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.content.posts = dir.path().join("_posts");
        config.content.output = dir.path().join("dist");

        std::fs::create_dir_all(dir.path().join("_posts")).unwrap();
        for (name, order) in [("one.md", 1), ("two.md", 2)] {
            std::fs::write(
                dir.path().join("_posts").join(name),
                format!(
                    "---\ntitle: T\ndate: \"2024-01-0{order}\"\nseries: s\nseriesOrder: {order}\n---\n"
                ),
            )
            .unwrap();
        }

        let repo = ContentRepository::load_with_assets(&config, &NO_ASSETS);
        write_data(&config, &repo).unwrap();

        let nav: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("dist/_data/navigation.json")).unwrap(),
        )
        .unwrap();

        assert_eq!(nav["one"]["next"], "two");
        assert_eq!(nav["two"]["previous"], "one");
        assert!(nav["one"].get("previous").is_none());
    }
}
