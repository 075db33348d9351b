//! Catalog file loader.
//!
//! Catalogs are read once at startup from TOML (`[[posts]]` tables) or JSON
//! (a bare array of posts, or an object with a `posts` array). The format is
//! chosen by file extension.

use serde::Deserialize;
use std::path::Path;

use super::types::{CatalogError, PostRecord};
use super::Catalog;

/// Maximum catalog file size (1 MB).
const MAX_FILE_SIZE: u64 = 1_048_576;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    posts: Vec<PostRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<PostRecord>),
    Wrapped(CatalogFile),
}

/// Supported on-disk catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat(ext)),
        }
    }
}

/// Read and validate a catalog file.
pub(super) fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let format = CatalogFormat::from_path(path)?;

    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_FILE_SIZE {
        return Err(CatalogError::TooLarge(format!(
            "Catalog file is {} bytes (max {} bytes)",
            meta.len(),
            MAX_FILE_SIZE
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog = parse(&content, format)?;
    tracing::info!(
        path = %path.display(),
        posts = catalog.len(),
        featured = catalog.featured().len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Parse catalog text in the given format.
pub(super) fn parse(content: &str, format: CatalogFormat) -> Result<Catalog, CatalogError> {
    let records = match format {
        CatalogFormat::Toml => toml::from_str::<CatalogFile>(content)?.posts,
        CatalogFormat::Json => match serde_json::from_str::<JsonCatalog>(content)? {
            JsonCatalog::Bare(posts) => posts,
            JsonCatalog::Wrapped(file) => file.posts,
        },
    };

    let posts = records
        .into_iter()
        .map(PostRecord::into_post)
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::from_posts(posts)
}
