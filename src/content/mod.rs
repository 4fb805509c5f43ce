//! Content loading: markdown files with YAML frontmatter in, typed
//! immutable records out.
//!
//! One submodule per content type plus the shared pieces:
//!
//! | Module           | Purpose                                   |
//! |------------------|-------------------------------------------|
//! | `frontmatter`    | `---`-fenced YAML block extraction        |
//! | `types`          | Post / Certificate / Project records      |
//! | `assets`         | Image path validation against public root |
//! | `posts`          | Blog post loader                          |
//! | `projects`       | Project loader                            |
//! | `certifications` | Certification loader                      |
//! | `profile`        | Per-section profile loaders               |
//!
//! Loaders degrade per file: a malformed file is skipped with a
//! warning and the rest of the directory still loads. A missing
//! directory yields an empty collection, so a site builds with zero
//! content.

pub mod assets;
pub mod frontmatter;
pub mod posts;
pub mod profile;
pub mod types;

mod certifications;
mod projects;

pub use assets::{AssetStore, FnAssets, FsAssets};
pub use certifications::load_certifications;
pub use posts::load_posts;
pub use profile::{Profile, load_profile};
pub use projects::load_projects;
pub use types::{Author, BlogSeries, Certificate, Level, Post, Project, RelatedProject};

use crate::log;
use serde::{Deserialize, Deserializer};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Enumerate the markdown files of a content-type directory in
/// deterministic (filename) order.
///
/// A missing directory is not an error: the warning is logged here
/// and the caller gets `None`, which every loader maps to an empty
/// collection.
pub(crate) fn markdown_files(dir: &Path, kind: &str) -> Option<Vec<PathBuf>> {
    if !dir.is_dir() {
        log!("warn"; "{kind} directory not found: {}", dir.display());
        return None;
    }

    let files = WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();

    Some(files)
}

/// Drop records whose key collides with an earlier one, keeping the
/// later record in place of the earlier (last one loaded wins).
/// Precedence between colliding files is explicitly undefined; the
/// only guarantee is that the output has unique keys.
pub(crate) fn dedupe_by_key<T>(items: Vec<T>, key: impl Fn(&T) -> &str) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        match index.get(key(&item)) {
            Some(&slot) => out[slot] = item,
            None => {
                index.insert(key(&item).to_owned(), out.len());
                out.push(item);
            }
        }
    }

    out
}

/// Lenient list deserializer: a YAML sequence of scalars becomes a
/// string list, anything else (absent, scalar, mapping) becomes an
/// empty list. Loaders never propagate a missing list downstream.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(yaml_string_list(value))
}

/// Convert a YAML value into a list of strings, dropping non-scalar
/// entries.
pub(crate) fn yaml_string_list(value: serde_yaml::Value) -> Vec<String> {
    use serde_yaml::Value;

    match value {
        Value::Sequence(seq) => seq
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
