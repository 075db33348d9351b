//! View engine: filter, sort and paginate the catalog for the listing view.
//!
//! `ViewEngine` owns the single `ViewState` and re-derives the matching set
//! after every mutation, so reads (`visible_posts`, `pagination_summary`) are
//! cheap and side-effect free.
//!
//! - Changing category, sort, time filter or search resets to page 1.
//! - Page navigation never touches filters, and out-of-range pages are ignored.
//! - All arithmetic is defined for zero matches.

mod pagination;
mod query;
mod state;

use std::sync::Arc;

use crate::catalog::{Catalog, Post};

pub use pagination::PaginationSummary;
pub use state::{
    CategoryFilter, EngineError, SortMode, TimeFilter, ViewState, DEFAULT_PAGE_SIZE,
};

/// Listing view over a shared catalog.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    catalog: Arc<Catalog>,
    state: ViewState,
    /// Catalog indices of the filtered + sorted result.
    matches: Vec<usize>,
}

impl ViewEngine {
    /// Create an engine with the default page size.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_page_size(catalog, DEFAULT_PAGE_SIZE)
    }

    /// Create an engine with a fixed page size (zero is raised to one).
    pub fn with_page_size(catalog: Arc<Catalog>, page_size: usize) -> Self {
        let mut engine = Self {
            catalog,
            state: ViewState::new(page_size),
            matches: Vec::new(),
        };
        engine.rederive();
        engine
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Featured posts, independent of every filter.
    pub fn featured(&self) -> Vec<&Post> {
        self.catalog.featured()
    }

    // ========================================================================
    // Filter Mutations
    // ========================================================================

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.state.category = category;
        self.reset_page_and_rederive();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.state.sort = sort;
        self.reset_page_and_rederive();
    }

    pub fn set_time_filter(&mut self, time_filter: TimeFilter) {
        self.state.time_filter = time_filter;
        self.reset_page_and_rederive();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search = text.into();
        self.reset_page_and_rederive();
    }

    /// Set the category from its code ("all", "doctor", ...).
    ///
    /// Unknown codes leave the state untouched.
    pub fn set_category_code(&mut self, code: &str) -> Result<(), EngineError> {
        let category = code.parse()?;
        self.set_category(category);
        Ok(())
    }

    /// Set the sort from its code ("newest", "oldest", "reading-time").
    pub fn set_sort_code(&mut self, code: &str) -> Result<(), EngineError> {
        let sort = code.parse()?;
        self.set_sort(sort);
        Ok(())
    }

    /// Set the time filter from its code ("all", "short", "medium", "long").
    pub fn set_time_filter_code(&mut self, code: &str) -> Result<(), EngineError> {
        let time_filter = code.parse()?;
        self.set_time_filter(time_filter);
        Ok(())
    }

    /// Restore every filter and the page to their defaults.
    pub fn reset_all(&mut self) {
        self.state = ViewState::new(self.state.page_size);
        self.rederive();
    }

    // ========================================================================
    // Page Navigation
    // ========================================================================

    /// Jump to page `page` if it exists in the current result.
    ///
    /// Returns whether the page changed position. Out-of-range requests are
    /// no-ops.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages {
            tracing::debug!(page, total_pages, "Ignoring out-of-range page request");
            return false;
        }
        let changed = self.state.current_page != page;
        self.state.current_page = page;
        changed
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page.saturating_sub(1))
    }

    // ========================================================================
    // Derived Output
    // ========================================================================

    /// Posts on the current page, possibly empty.
    pub fn visible_posts(&self) -> Vec<&Post> {
        let (start, end) = query::page_range(
            self.matches.len(),
            self.state.page_size,
            self.state.current_page,
        );
        let posts = self.catalog.all();
        self.matches[start..end].iter().map(|&i| &posts[i]).collect()
    }

    /// Every matching post across all pages, in display order.
    pub fn filtered_posts(&self) -> Vec<&Post> {
        let posts = self.catalog.all();
        self.matches.iter().map(|&i| &posts[i]).collect()
    }

    pub fn pagination_summary(&self) -> PaginationSummary {
        PaginationSummary::compute(
            self.matches.len(),
            self.state.page_size,
            self.state.current_page,
        )
    }

    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn total_pages(&self) -> usize {
        self.matches.len().div_ceil(self.state.page_size)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn reset_page_and_rederive(&mut self) {
        self.state.current_page = 1;
        self.rederive();
    }

    fn rederive(&mut self) {
        self.matches = query::run(self.catalog.all(), &self.state);
        self.state.current_page = self.state.current_page.clamp(1, self.total_pages().max(1));
        tracing::debug!(
            category = %self.state.category,
            sort = %self.state.sort,
            time = %self.state.time_filter,
            search = %self.state.search,
            matches = self.matches.len(),
            page = self.state.current_page,
            "Re-derived listing"
        );
    }
}
