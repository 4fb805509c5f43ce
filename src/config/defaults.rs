//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn posts() -> PathBuf {
        "_posts".into()
    }

    pub fn projects() -> PathBuf {
        "_projects".into()
    }

    pub fn certifications() -> PathBuf {
        "_certifications".into()
    }

    pub fn profile() -> PathBuf {
        "_profile".into()
    }

    pub fn assets() -> PathBuf {
        "public".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn data_dir() -> PathBuf {
        "_data".into()
    }
}

// ============================================================================
// [blog] Section Defaults
// ============================================================================

pub mod blog {
    pub fn page_size() -> usize {
        9
    }

    pub fn placeholder_image() -> String {
        "/placeholder.png".into()
    }
}
