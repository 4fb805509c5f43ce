//! Build orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── ContentRepository::load() ──► posts/projects/certs/profile
//!     │
//!     └── data::write_data() ──► <output>/<data_dir>/*.json
//! ```
//!
//! `check_site` runs the load phase only and reports what it found,
//! which surfaces every skip/placeholder warning without writing.

use crate::{config::SiteConfig, data, log, repository::ContentRepository};
use anyhow::{Context, Result};
use std::fs;

/// Load all content and write the JSON data files.
///
/// When `clean` is requested the output directory is removed first.
pub fn build_site(config: &'static SiteConfig, clean: bool) -> Result<()> {
    let output = &config.content.output;

    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        log!("build"; "cleaned {}", output.display());
    }

    let repo = load_and_report(config);
    let written = data::write_data(config, &repo)?;
    log!("build"; "done, {written} data files in {}", output.display());

    Ok(())
}

/// Load all content and report counts without writing anything.
pub fn check_site(config: &'static SiteConfig) -> Result<()> {
    load_and_report(config);
    log!("check"; "content ok");
    Ok(())
}

fn load_and_report(config: &'static SiteConfig) -> ContentRepository<'static> {
    let repo = ContentRepository::load(config);

    log!("build"; "{} posts, {} projects, {} certifications",
        repo.posts().len(),
        repo.projects().len(),
        repo.certifications().len());
    log!("build"; "profile: {} skills, {} education, {} experience, {} publications, {} team, {} faqs",
        repo.skills().len(),
        repo.education().len(),
        repo.experience().len(),
        repo.research().publications.len(),
        repo.about().team.len(),
        repo.contact().faqs.len());

    if repo.posts().is_empty() && repo.projects().is_empty() && repo.certifications().is_empty() {
        log!("warn"; "no content found under {}", config.get_root().display());
    }
    if repo.basic_info().name.is_empty() {
        log!("warn"; "profile basic info has no name");
    }

    verify_references(config, &repo);

    repo
}

/// Warn about dangling cross references. None of these stop a build;
/// the emitted data simply carries the dangling id.
fn verify_references(config: &SiteConfig, repo: &ContentRepository) {
    for post in repo.posts() {
        if let Some(series) = post.series.as_deref()
            && config.series_by_id(series).is_none()
        {
            log!("warn"; "post {} references unknown series {series}", post.slug);
        }
    }

    for project in repo.projects() {
        for related in &project.related_projects {
            if repo.project_by_slug(&related.id).is_none() {
                log!("warn"; "project {} references unknown project {}", project.slug, related.id);
            }
        }
    }
}
