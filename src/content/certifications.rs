//! Certification loading.

use super::{
    assets::{AssetStore, resolve_image},
    dedupe_by_key, frontmatter, markdown_files, string_list,
    types::Certificate,
};
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CertificateFrontmatter {
    name: String,
    platform: String,
    issue_date: String,
    expiry_date: Option<String>,
    description: String,
    image: Option<String>,
    url: String,
    #[serde(deserialize_with = "string_list")]
    skills: Vec<String>,
}

/// Load the certification collection, sorted by issue date descending.
pub fn load_certifications(config: &SiteConfig, assets: &dyn AssetStore) -> Vec<Certificate> {
    let Some(files) = markdown_files(&config.content.certifications, "certifications") else {
        return Vec::new();
    };

    let mut certs: Vec<Certificate> = Vec::new();
    for path in &files {
        match load_certificate(path, config, assets) {
            Ok(cert) => certs.push(cert),
            Err(err) => log!("warn"; "skipping {}: {err:#}", path.display()),
        }
    }

    let mut certs = dedupe_by_key(certs, |cert| &cert.id);
    certs.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
    certs
}

fn load_certificate(
    path: &Path,
    config: &SiteConfig,
    assets: &dyn AssetStore,
) -> Result<Certificate> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (meta, body) = frontmatter::parse::<CertificateFrontmatter>(&raw)?;

    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let image = resolve_image(
        meta.image.as_deref(),
        assets,
        &config.blog.placeholder_image,
        &format!("certification {id}"),
    );

    Ok(Certificate {
        id,
        name: meta.name,
        platform: meta.platform,
        issue_date: meta.issue_date,
        expiry_date: meta.expiry_date,
        description: meta.description,
        image,
        url: meta.url,
        skills: meta.skills,
        content: body.to_owned(),
    })
}
