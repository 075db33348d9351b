//! Utility functions shared by the UI and the CLI listing.
//!
//! - **Text**: Unicode-aware width, truncation, wrapping and control-char stripping
//! - **Links**: resolving post URLs and validating them before they are opened

mod text;
mod url_validator;

pub use text::{display_width, strip_control_chars, truncate_to_width, wrap_to_width};
pub use url_validator::{
    directory_base_url, resolve_post_url, validate_url_for_open, UrlValidationError,
};

/// Maximum search query length accepted from the search box.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 256;
