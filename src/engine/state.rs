use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::Category;

/// Number of posts per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A filter or sort code outside its closed set.
    #[error("Invalid {kind} '{value}' (expected one of: {expected})")]
    InvalidArgument {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

// ============================================================================
// Category Filter
// ============================================================================

/// Category selection: every category, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    /// Next option in dropdown order: all, doctor, nursing, hospital, education.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::Doctor),
            Self::Only(Category::Doctor) => Self::Only(Category::Nursing),
            Self::Only(Category::Nursing) => Self::Only(Category::Hospital),
            Self::Only(Category::Hospital) => Self::Only(Category::Education),
            Self::Only(Category::Education) => Self::All,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.code(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Categories",
            Self::Only(c) => c.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Category::from_code(s)
            .map(Self::Only)
            .ok_or_else(|| EngineError::InvalidArgument {
                kind: "category",
                value: s.to_string(),
                expected: "all, doctor, nursing, hospital, education",
            })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Sort Mode
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Date descending.
    #[default]
    Newest,
    /// Date ascending.
    Oldest,
    /// Read time ascending.
    ReadingTime,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::ReadingTime,
            Self::ReadingTime => Self::Newest,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::ReadingTime => "reading-time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::ReadingTime => "Reading Time",
        }
    }
}

impl FromStr for SortMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "reading-time" => Ok(Self::ReadingTime),
            _ => Err(EngineError::InvalidArgument {
                kind: "sort",
                value: s.to_string(),
                expected: "newest, oldest, reading-time",
            }),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Time Filter
// ============================================================================

/// Reading-time tier selection.
///
/// Tiers partition positive read times: short `<= 5`, medium `6..=10`,
/// long `> 10` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFilter {
    #[default]
    All,
    Short,
    Medium,
    Long,
}

impl TimeFilter {
    /// The tier a read time falls into. Never returns `All`.
    pub fn tier_of(read_time: u32) -> Self {
        match read_time {
            0..=5 => Self::Short,
            6..=10 => Self::Medium,
            _ => Self::Long,
        }
    }

    pub fn matches(self, read_time: u32) -> bool {
        match self {
            Self::All => true,
            tier => Self::tier_of(read_time) == tier,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Short,
            Self::Short => Self::Medium,
            Self::Medium => Self::Long,
            Self::Long => Self::All,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Any Length",
            Self::Short => "Short (≤5 min)",
            Self::Medium => "Medium (6-10 min)",
            Self::Long => "Long (>10 min)",
        }
    }
}

impl FromStr for TimeFilter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(EngineError::InvalidArgument {
                kind: "time filter",
                value: s.to_string(),
                expected: "all, short, medium, long",
            }),
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// View State
// ============================================================================

/// Current filter, sort and page selections.
///
/// Only `ViewEngine` mutates a live `ViewState`; callers get a shared
/// reference through `ViewEngine::state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub sort: SortMode,
    pub time_filter: TimeFilter,
    pub search: String,
    pub page_size: usize,
    /// 1-based.
    pub current_page: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            category: CategoryFilter::All,
            sort: SortMode::Newest,
            time_filter: TimeFilter::All,
            search: String::new(),
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// True when no filter or search narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All
            && self.time_filter == TimeFilter::All
            && self.search.is_empty()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
