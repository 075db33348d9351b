use std::fmt;

/// Position of the current page within the filtered result.
///
/// `start_index`/`end_index` are 1-based inclusive display bounds
/// ("Showing 7-12 of 12"). With zero matches every count is zero and
/// `current_page` stays at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    pub start_index: usize,
    pub end_index: usize,
    pub total_matches: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl PaginationSummary {
    pub(crate) fn compute(total_matches: usize, page_size: usize, current_page: usize) -> Self {
        if total_matches == 0 {
            return Self::empty();
        }

        let page_size = page_size.max(1);
        let total_pages = total_matches.div_ceil(page_size);
        let current_page = current_page.clamp(1, total_pages);
        let start_index = (current_page - 1) * page_size + 1;
        let end_index = (current_page * page_size).min(total_matches);

        Self {
            start_index,
            end_index,
            total_matches,
            total_pages,
            current_page,
        }
    }

    /// Summary of a result with no matches.
    pub fn empty() -> Self {
        Self {
            start_index: 0,
            end_index: 0,
            total_matches: 0,
            total_pages: 0,
            current_page: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page-number buttons are only shown when there is more than one page.
    pub fn shows_page_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// Range text such as "1-6".
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.start_index, self.end_index)
    }
}

impl fmt::Display for PaginationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("No posts found")
        } else {
            write!(
                f,
                "Showing {} of {}",
                self.range_label(),
                self.total_matches
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_twelve() {
        let s = PaginationSummary::compute(12, 6, 1);
        assert_eq!((s.start_index, s.end_index), (1, 6));
        assert_eq!(s.total_pages, 2);
        assert!(!s.has_prev());
        assert!(s.has_next());
        assert_eq!(s.to_string(), "Showing 1-6 of 12");
    }

    #[test]
    fn partial_last_page() {
        let s = PaginationSummary::compute(13, 6, 3);
        assert_eq!((s.start_index, s.end_index), (13, 13));
        assert_eq!(s.total_pages, 3);
        assert!(s.has_prev());
        assert!(!s.has_next());
    }

    #[test]
    fn zero_matches_is_well_defined() {
        let s = PaginationSummary::compute(0, 6, 1);
        assert_eq!(s, PaginationSummary::empty());
        assert!(s.is_empty());
        assert!(!s.has_next());
        assert!(!s.has_prev());
        assert!(!s.shows_page_controls());
        assert_eq!(s.to_string(), "No posts found");
    }

    #[test]
    fn single_page_hides_controls() {
        let s = PaginationSummary::compute(4, 6, 1);
        assert_eq!(s.range_label(), "1-4");
        assert_eq!(s.total_pages, 1);
        assert!(!s.shows_page_controls());
    }

    #[test]
    fn stale_page_is_clamped() {
        let s = PaginationSummary::compute(4, 2, 9);
        assert_eq!(s.current_page, 2);
        assert_eq!((s.start_index, s.end_index), (3, 4));
    }
}
