use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while building or loading a catalog.
///
/// Querying a constructed `Catalog` never fails; every variant here belongs
/// to construction time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in catalog file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON in catalog file: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file exceeds the maximum allowed size.
    #[error("Catalog file too large: {0}")]
    TooLarge(String),

    #[error("Unsupported catalog format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Duplicate post id {0}")]
    DuplicateId(i64),

    #[error("Post {id} has invalid read time {read_time} (must be positive)")]
    InvalidReadTime { id: i64, read_time: i64 },

    #[error("Post {id} has unparseable date '{date}'")]
    InvalidDate { id: i64, date: String },

    #[error("Post {id} has unknown category '{code}'")]
    UnknownCategory { id: i64, code: String },
}

// ============================================================================
// Category
// ============================================================================

/// Display color for unknown category codes.
pub const DEFAULT_CATEGORY_COLOR: &str = "#4ab098";

/// Closed set of post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Doctor,
    Nursing,
    Hospital,
    Education,
}

impl Category {
    /// All categories in the order the filter dropdown lists them.
    pub const ALL: [Category; 4] = [
        Category::Doctor,
        Category::Nursing,
        Category::Hospital,
        Category::Education,
    ];

    /// Stable lowercase code used in catalog files and on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Nursing => "nursing",
            Self::Hospital => "hospital",
            Self::Education => "education",
        }
    }

    /// Parse a category code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "doctor" => Some(Self::Doctor),
            "nursing" => Some(Self::Nursing),
            "hospital" => Some(Self::Hospital),
            "education" => Some(Self::Education),
            _ => None,
        }
    }

    /// Label used by the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Doctor => "Doctor Careers",
            Self::Nursing => "Nursing Careers",
            Self::Hospital => "Hospital HR",
            Self::Education => "Medical Education",
        }
    }

    /// Hex color of the category chip on a post card.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Doctor | Self::Hospital => "#4ab098",
            Self::Nursing | Self::Education => "#464d79",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Chip color for a raw category code, falling back to the default color
/// for codes outside the closed set.
pub fn category_color_for_code(code: &str) -> &'static str {
    Category::from_code(code)
        .map(Category::color_hex)
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

// ============================================================================
// Post
// ============================================================================

/// One blog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub author_img: Option<String>,
    pub category: Category,
    pub category_name: String,
    /// Minutes, always positive.
    pub read_time: u32,
    pub date: NaiveDate,
    pub featured: bool,
    pub url: String,
}

impl Post {
    /// Date as shown on cards, e.g. "Feb 10, 2026".
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Case-insensitive substring match against title, excerpt, author and
    /// category name. `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.category_name.to_lowercase().contains(needle)
    }
}

// ============================================================================
// Raw Records
// ============================================================================

/// Date formats accepted in catalog files, tried in order.
const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%Y-%m-%d"];

/// Parse a post date written either as "Feb 10, 2026" or "2026-02-10".
pub fn parse_post_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Post as written in a catalog file, before validation.
///
/// Accepts both snake_case keys and the camelCase keys of the site's data
/// script (`categoryName`, `readTime`, `authorImg`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PostRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub author: String,
    #[serde(default, alias = "authorImg")]
    pub author_img: Option<String>,
    pub category: String,
    #[serde(alias = "categoryName")]
    pub category_name: String,
    #[serde(alias = "readTime")]
    pub read_time: i64,
    pub date: String,
    #[serde(default)]
    pub featured: bool,
    pub url: String,
}

impl PostRecord {
    pub(crate) fn into_post(self) -> Result<Post, CatalogError> {
        let category =
            Category::from_code(&self.category).ok_or_else(|| CatalogError::UnknownCategory {
                id: self.id,
                code: self.category.clone(),
            })?;

        let read_time = u32::try_from(self.read_time)
            .ok()
            .filter(|&minutes| minutes > 0)
            .ok_or(CatalogError::InvalidReadTime {
                id: self.id,
                read_time: self.read_time,
            })?;

        let date = parse_post_date(&self.date).ok_or_else(|| CatalogError::InvalidDate {
            id: self.id,
            date: self.date.clone(),
        })?;

        Ok(Post {
            id: self.id,
            title: self.title,
            excerpt: self.excerpt,
            author: self.author,
            author_img: self.author_img,
            category,
            category_name: self.category_name,
            read_time,
            date,
            featured: self.featured,
            url: self.url,
        })
    }
}
