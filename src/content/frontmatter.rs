//! YAML frontmatter extraction and parsing.
//!
//! Content files open with a `---`-fenced YAML block followed by a
//! markdown body:
//!
//! ```text
//! ---
//! title: Hello
//! date: "2024-01-01"
//! ---
//!
//! Body text...
//! ```
//!
//! Splitting is pure string work; schema enforcement happens in the
//! per-type loaders, which deserialize the YAML into their own
//! frontmatter structs.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Frontmatter delimiter fence
const DELIM: &str = "---";

/// Errors produced while extracting or parsing a frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("frontmatter fence opened but never closed")]
    Unterminated,

    #[error("frontmatter is not valid YAML")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split raw file text into the YAML frontmatter block and the body.
///
/// Fences only count on their own line, so a `---` embedded in a
/// value never closes the block. A file without a leading fence is
/// all body (`None` metadata) - the profile loaders tolerate this. A
/// fence that opens but never closes is a hard error.
pub fn split(raw: &str) -> Result<(Option<&str>, &str), FrontmatterError> {
    let content = raw.trim_start();

    if !content.starts_with(DELIM) {
        return Ok((None, raw));
    }

    let rest = &content[DELIM.len()..];
    if !line_ends_here(rest) {
        // The first line is not a bare fence, e.g. a thematic break
        // like "------"
        return Ok((None, raw));
    }

    let end = closing_fence(rest).ok_or(FrontmatterError::Unterminated)?;

    let yaml = rest[..end].trim();
    let body = rest[end + 1 + DELIM.len()..].trim_start();

    Ok((Some(yaml), body))
}

/// Whether a line boundary (or end of input) follows immediately.
fn line_ends_here(rest: &str) -> bool {
    matches!(rest.as_bytes().first(), None | Some(b'\n') | Some(b'\r'))
}

/// Byte offset in `rest` of the newline preceding the closing fence,
/// i.e. the first line that consists of exactly `---`.
fn closing_fence(rest: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(pos) = rest[from..].find("\n---") {
        let at = from + pos;
        if line_ends_here(&rest[at + 1 + DELIM.len()..]) {
            return Some(at);
        }
        from = at + 1;
    }
    None
}

/// Split and deserialize the frontmatter into a typed struct.
///
/// A missing frontmatter block deserializes from the empty document,
/// so every field of `T` must carry a serde default.
pub fn parse<T: DeserializeOwned>(raw: &str) -> Result<(T, &str), FrontmatterError> {
    let (yaml, body) = split(raw)?;
    let meta: T = serde_yaml::from_str(yaml.unwrap_or(""))?;
    Ok((meta, body))
}
