//! The listing query pipeline: search, category, time tier, sort.
//!
//! Stages run in that fixed order and each one narrows the candidate set.
//! The result is a list of indices into the catalog slice.

use std::cmp::Ordering;

use super::state::{SortMode, ViewState};
use crate::catalog::Post;

/// Run the full pipeline and return matching catalog indices in display order.
pub(crate) fn run(posts: &[Post], state: &ViewState) -> Vec<usize> {
    let needle = state.search.to_lowercase();

    let mut matches: Vec<usize> = posts
        .iter()
        .enumerate()
        .filter(|(_, post)| needle.is_empty() || post.matches_lowercase(&needle))
        .filter(|(_, post)| state.category.matches(post.category))
        .filter(|(_, post)| state.time_filter.matches(post.read_time))
        .map(|(idx, _)| idx)
        .collect();

    matches.sort_by(|&a, &b| compare(&posts[a], &posts[b], state.sort));
    matches
}

/// Order two posts under a sort mode. Equal keys fall back to ascending id.
pub(crate) fn compare(a: &Post, b: &Post, sort: SortMode) -> Ordering {
    let primary = match sort {
        SortMode::Newest => b.date.cmp(&a.date),
        SortMode::Oldest => a.date.cmp(&b.date),
        SortMode::ReadingTime => a.read_time.cmp(&b.read_time),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Half-open slice bounds of `page` (1-based) over `total` items.
///
/// Pages past the end yield an empty range rather than panicking.
pub(crate) fn page_range(total: usize, page_size: usize, page: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = page.saturating_mul(page_size).min(total);
    (start, end)
}
