//! The post catalog: a fixed collection of posts held for the whole session.
//!
//! A `Catalog` is built once (from the built-in sample or a catalog file) and
//! never mutated afterwards. All queries are infallible.

mod loader;
mod seed;
mod types;

use std::collections::HashSet;
use std::path::Path;

pub use loader::CatalogFormat;
pub use types::{
    category_color_for_code, parse_post_date, Category, CatalogError, Post,
    DEFAULT_CATEGORY_COLOR,
};

/// Immutable, ordered collection of posts with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    posts: Vec<Post>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and non-positive read times.
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(CatalogError::DuplicateId(post.id));
            }
            if post.read_time == 0 {
                return Err(CatalogError::InvalidReadTime {
                    id: post.id,
                    read_time: 0,
                });
            }
        }
        Ok(Self { posts })
    }

    /// The twelve posts shipped with the site.
    pub fn sample() -> Self {
        Self {
            posts: seed::sample_posts(),
        }
    }

    /// Load a catalog from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        loader::load(path)
    }

    /// Parse catalog text in an explicit format.
    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self, CatalogError> {
        loader::parse(content, format)
    }

    /// All posts in catalog order.
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Featured posts, catalog order preserved.
    pub fn featured(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.featured).collect()
    }

    pub fn get(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(id: i64, featured: bool) -> Post {
        Post {
            id,
            title: format!("Post {}", id),
            excerpt: String::new(),
            author: "Author".to_string(),
            author_img: None,
            category: Category::Doctor,
            category_name: "Doctor Careers".to_string(),
            read_time: 5,
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            featured,
            url: String::new(),
        }
    }

    #[test]
    fn all_preserves_insertion_order() {
        let catalog = Catalog::from_posts(vec![post(3, false), post(1, true), post(2, true)]).unwrap();
        let ids: Vec<i64> = catalog.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn featured_is_ordered_subsequence() {
        let catalog = Catalog::from_posts(vec![post(3, false), post(1, true), post(2, true)]).unwrap();
        let ids: Vec<i64> = catalog.featured().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = Catalog::from_posts(vec![post(1, false), post(1, true)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn zero_read_time_rejected() {
        let mut p = post(9, false);
        p.read_time = 0;
        assert!(Catalog::from_posts(vec![p]).is_err());
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::from_posts(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.featured().is_empty());
    }

    #[test]
    fn sample_catalog_lookup() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 12);
        assert_eq!(
            catalog.get(6).map(|p| p.title.as_str()),
            Some("Abroad Nursing Jobs: UK, USA, Middle East Guide")
        );
        assert!(catalog.get(99).is_none());
    }
}
