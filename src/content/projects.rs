//! Portfolio project loading.

use super::{
    assets::{AssetStore, resolve_image},
    dedupe_by_key, frontmatter, markdown_files, string_list,
    types::{Project, RelatedProject},
};
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectFrontmatter {
    title: String,
    description: String,
    long_description: Option<String>,
    image: Option<String>,
    category: Option<String>,
    #[serde(deserialize_with = "string_list")]
    technologies: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    features: Vec<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    date: String,
    team: Option<String>,
    duration: Option<String>,
    related_projects: Vec<RelatedProject>,
}

/// Load the project collection, sorted by date descending. Same
/// degradation rules as the post loader.
pub fn load_projects(config: &SiteConfig, assets: &dyn AssetStore) -> Vec<Project> {
    let Some(files) = markdown_files(&config.content.projects, "projects") else {
        return Vec::new();
    };

    let mut projects: Vec<Project> = Vec::new();
    for path in &files {
        match load_project(path, config, assets) {
            Ok(project) => projects.push(project),
            Err(err) => log!("warn"; "skipping {}: {err:#}", path.display()),
        }
    }

    let mut projects = dedupe_by_key(projects, |project| &project.slug);
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    projects
}

fn load_project(path: &Path, config: &SiteConfig, assets: &dyn AssetStore) -> Result<Project> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (meta, body) = frontmatter::parse::<ProjectFrontmatter>(&raw)?;

    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let image = resolve_image(
        meta.image.as_deref(),
        assets,
        &config.blog.placeholder_image,
        &format!("project {slug}"),
    );

    // The long description falls back to the short one so detail pages
    // always have text
    let long_description = meta
        .long_description
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| meta.description.clone());

    Ok(Project {
        slug,
        title: meta.title,
        description: meta.description,
        long_description,
        image,
        category: meta.category.unwrap_or_else(|| "General".to_owned()),
        technologies: meta.technologies,
        features: meta.features,
        github_url: meta.github_url,
        live_url: meta.live_url,
        date: meta.date,
        content: body.to_owned(),
        team: meta.team,
        duration: meta.duration,
        related_projects: meta.related_projects,
    })
}
