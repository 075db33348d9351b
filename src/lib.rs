//! blogdeck: browse a blog catalog in the terminal.
//!
//! The [`catalog`] holds posts, the [`engine`] derives the filtered, sorted
//! and paginated listing, and [`ui`] draws it with ratatui.

pub mod app;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod keybindings;
pub mod theme;
pub mod ui;
pub mod util;
