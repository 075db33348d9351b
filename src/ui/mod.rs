//! Terminal User Interface module.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `render` - Layout and overlay dispatch
//! - `posts` - Post card list
//! - `filters` - Search box and filter bar
//! - `pagination` - Page buttons and range text
//! - `status` - Status bar widget
//! - `help` - Keybinding overlay

mod filters;
mod help;
mod input;
mod loop_runner;
mod pagination;
mod posts;
mod render;
mod status;

pub use loop_runner::{run, Action};
