use crate::catalog::Post;
use crate::config::{Config, DEFAULT_SEARCH_DEBOUNCE_MS};
use crate::engine::ViewEngine;
use crate::keybindings::KeybindingRegistry;
use crate::theme::{StyleMap, ThemeVariant};
use crate::util::{resolve_post_url, UrlValidationError, MAX_SEARCH_QUERY_LENGTH};
use ratatui::style::Style;
use std::borrow::Cow;
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

/// How long a status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(3);

// ============================================================================
// View Enum
// ============================================================================

/// Which listing is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Featured posts only, unaffected by filters.
    Featured,
    /// Filter bar, paginated listing and page controls.
    All,
}

impl View {
    /// Label of the toggle that leads away from this view.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Featured => "View All Blogs",
            Self::All => "Show Featured Only",
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state
pub struct App {
    /// Filtering, sorting and pagination over the catalog.
    pub engine: ViewEngine,

    // Theme
    pub theme_variant: ThemeVariant,
    /// Active style map for all UI rendering.
    pub theme: StyleMap,

    pub keybindings: KeybindingRegistry,

    // UI State
    pub view: View,
    /// Cursor within the posts currently on screen.
    pub selected: usize,

    // Search
    pub search_mode: bool,
    pub search_input: String,
    /// Time of the last search keystroke that has not been applied yet.
    pub search_debounce: Option<Instant>,
    pub pending_search: Option<String>,
    pub search_debounce_window: Duration,

    /// Base that relative post links are resolved against.
    pub base_url: Option<Url>,

    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders
    pub needs_redraw: bool,

    pub show_help: bool,
    pub help_scroll_offset: usize,
}

impl App {
    pub fn new(engine: ViewEngine) -> Self {
        Self {
            engine,
            theme_variant: ThemeVariant::Dark,
            theme: StyleMap::from_palette(&ThemeVariant::Dark.palette()),
            keybindings: KeybindingRegistry::new(),
            view: View::Featured,
            selected: 0,
            search_mode: false,
            search_input: String::new(),
            search_debounce: None,
            pending_search: None,
            search_debounce_window: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            base_url: None,
            status_message: None,
            needs_redraw: true,
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    /// Apply user configuration. Returns warnings for settings that were ignored.
    pub fn apply_config(&mut self, config: &Config) -> Vec<String> {
        let mut warnings = self.keybindings.apply_overrides(&config.keybindings);

        match ThemeVariant::from_str_name(&config.theme) {
            Some(variant) => self.set_theme(variant),
            None => warnings.push(format!(
                "Unknown theme '{}', using {}",
                config.theme,
                self.theme_variant.name()
            )),
        }

        self.search_debounce_window = config.search_debounce();
        if config.start_in_all_view {
            self.view = View::All;
        }
        warnings
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant. Returns the new theme's name.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ------------------------------------------------------------------------
    // Posts and selection
    // ------------------------------------------------------------------------

    /// Posts currently on screen: the featured set or the current page.
    pub fn current_posts(&self) -> Vec<&Post> {
        match self.view {
            View::Featured => self.engine.featured(),
            View::All => self.engine.visible_posts(),
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.current_posts().get(self.selected).copied()
    }

    /// Keep the cursor inside the posts on screen.
    pub fn clamp_selection(&mut self) {
        let len = self.current_posts().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn nav_down(&mut self) {
        let len = self.current_posts().len();
        if len > 0 {
            self.selected = self.selected.saturating_add(1).min(len - 1);
        }
    }

    /// Switch between the featured posts and the full listing.
    pub fn toggle_view(&mut self) -> View {
        self.view = match self.view {
            View::Featured => View::All,
            View::All => View::Featured,
        };
        if self.view == View::Featured {
            self.leave_search_mode();
        }
        self.selected = 0;
        self.view
    }

    // ------------------------------------------------------------------------
    // Filters and pages
    // ------------------------------------------------------------------------

    pub fn cycle_category(&mut self) {
        let next = self.engine.state().category.next();
        self.engine.set_category(next);
        self.after_listing_change();
        self.set_status(format!("Category: {}", next.label()));
    }

    pub fn cycle_sort(&mut self) {
        let next = self.engine.state().sort.next();
        self.engine.set_sort(next);
        self.after_listing_change();
        self.set_status(format!("Sort: {}", next.label()));
    }

    pub fn cycle_time_filter(&mut self) {
        let next = self.engine.state().time_filter.next();
        self.engine.set_time_filter(next);
        self.after_listing_change();
        self.set_status(format!("Length: {}", next.label()));
    }

    /// Restore every filter, the search box and page one.
    pub fn reset_filters(&mut self) {
        self.engine.reset_all();
        self.search_input.clear();
        self.pending_search = None;
        self.search_debounce = None;
        self.after_listing_change();
        self.set_status("Filters reset");
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let changed = self.engine.go_to_page(page);
        if changed {
            self.after_listing_change();
        }
        changed
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.engine.next_page();
        if changed {
            self.after_listing_change();
        }
        changed
    }

    pub fn prev_page(&mut self) -> bool {
        let changed = self.engine.prev_page();
        if changed {
            self.after_listing_change();
        }
        changed
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        let last = self.engine.total_pages();
        self.go_to_page(last)
    }

    fn after_listing_change(&mut self) {
        self.selected = 0;
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    /// Focus the search box, seeded with the query currently applied.
    pub fn enter_search_mode(&mut self) {
        self.view = View::All;
        self.search_mode = true;
        self.search_input = self.engine.state().search.clone();
        self.pending_search = None;
        self.search_debounce = None;
    }

    /// Leave the search box. Unapplied keystrokes are dropped and the box
    /// shows the query that is in effect.
    pub fn leave_search_mode(&mut self) {
        self.search_mode = false;
        self.pending_search = None;
        self.search_debounce = None;
        self.search_input = self.engine.state().search.clone();
    }

    /// Append a typed character and restart the debounce window.
    ///
    /// Returns false when the query is already at its maximum length.
    pub fn push_search_char(&mut self, c: char) -> bool {
        if self.search_input.chars().count() >= MAX_SEARCH_QUERY_LENGTH {
            self.set_status(format!(
                "Search query at max length ({} chars)",
                MAX_SEARCH_QUERY_LENGTH
            ));
            return false;
        }
        self.search_input.push(c);
        self.schedule_search();
        true
    }

    pub fn pop_search_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.schedule_search();
        }
    }

    fn schedule_search(&mut self) {
        self.search_debounce = Some(Instant::now());
        self.pending_search = Some(self.search_input.clone());
    }

    /// Apply the pending query once the debounce window has elapsed.
    ///
    /// Returns true when the listing changed.
    pub fn apply_pending_search_if_due(&mut self) -> bool {
        let Some(last_keystroke) = self.search_debounce else {
            return false;
        };
        if last_keystroke.elapsed() < self.search_debounce_window {
            return false;
        }
        self.search_debounce = None;
        match self.pending_search.take() {
            Some(query) => {
                self.apply_search(query);
                true
            }
            None => false,
        }
    }

    /// Apply the search box immediately and leave search mode.
    pub fn commit_search(&mut self) {
        self.search_debounce = None;
        self.search_mode = false;
        let query = self
            .pending_search
            .take()
            .unwrap_or_else(|| self.search_input.clone());
        self.apply_search(query);
    }

    /// Empty the search box and drop the search from the listing.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.pending_search = None;
        self.search_debounce = None;
        self.apply_search(String::new());
    }

    /// Every applied search returns to page 1, even when the text is unchanged.
    fn apply_search(&mut self, query: String) {
        tracing::debug!(query = %query, "Applying search");
        self.engine.set_search(query);
        self.after_listing_change();
    }

    // ------------------------------------------------------------------------
    // Links
    // ------------------------------------------------------------------------

    /// Absolute URL of the selected post, ready for the system opener.
    pub fn selected_post_url(&self) -> Option<Result<Url, UrlValidationError>> {
        let post = self.selected_post()?;
        Some(resolve_post_url(self.base_url.as_ref(), &post.url))
    }

    // ------------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------------

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear status message if expired. Returns true if a message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed() >= STATUS_TTL {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::engine::{CategoryFilter, SortMode, TimeFilter};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio::time;

    fn test_app() -> App {
        App::new(ViewEngine::new(Arc::new(Catalog::sample())))
    }

    fn all_view_app() -> App {
        let mut app = test_app();
        app.view = View::All;
        app
    }

    fn ids(posts: &[&Post]) -> Vec<i64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_starts_on_featured_posts() {
        let app = test_app();
        assert_eq!(app.view, View::Featured);
        assert_eq!(ids(&app.current_posts()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(app.selected_post().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_toggle_view_shows_first_page() {
        let mut app = test_app();
        app.selected = 3;
        assert_eq!(app.toggle_view(), View::All);
        assert_eq!(app.selected, 0);
        assert_eq!(ids(&app.current_posts()), vec![8, 7, 9, 6, 10, 5]);
        assert_eq!(app.view.toggle_label(), "Show Featured Only");
        assert_eq!(app.toggle_view(), View::Featured);
    }

    #[test]
    fn test_nav_is_bounded() {
        let mut app = test_app();
        app.nav_up();
        assert_eq!(app.selected, 0);
        for _ in 0..20 {
            app.nav_down();
        }
        assert_eq!(app.selected, 5);
    }

    #[test]
    fn test_cycle_category_filters_and_reports() {
        let mut app = all_view_app();
        app.selected = 4;
        app.cycle_category();
        assert_eq!(
            app.engine.state().category,
            CategoryFilter::Only(crate::catalog::Category::Doctor)
        );
        assert_eq!(app.selected, 0);
        assert_eq!(ids(&app.current_posts()), vec![7, 5, 11, 1]);
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Category: Doctor Careers");
    }

    #[test]
    fn test_cycle_sort_and_time() {
        let mut app = all_view_app();
        app.cycle_sort();
        assert_eq!(app.engine.state().sort, SortMode::Oldest);
        app.cycle_time_filter();
        assert_eq!(app.engine.state().time_filter, TimeFilter::Short);
        assert_eq!(ids(&app.current_posts()), vec![6]);
    }

    #[test]
    fn test_paging_resets_selection() {
        let mut app = all_view_app();
        app.selected = 2;
        assert!(app.next_page());
        assert_eq!(app.selected, 0);
        assert_eq!(ids(&app.current_posts()), vec![4, 11, 3, 12, 2, 1]);
        assert!(!app.next_page());
        assert!(app.first_page());
        assert!(app.last_page());
        assert_eq!(app.engine.pagination_summary().current_page, 2);
        assert!(!app.go_to_page(7));
    }

    #[test]
    fn test_commit_search_applies_immediately() {
        let mut app = test_app();
        app.enter_search_mode();
        assert_eq!(app.view, View::All);
        for c in "nursing".chars() {
            assert!(app.push_search_char(c));
        }
        assert_eq!(app.engine.state().search, "");
        app.commit_search();
        assert!(!app.search_mode);
        assert!(app.search_debounce.is_none());
        assert_eq!(app.engine.state().search, "nursing");
        assert_eq!(ids(&app.current_posts()), vec![8, 6, 2]);
    }

    #[tokio::test]
    async fn test_search_applies_after_debounce_window() {
        time::pause();
        let mut app = test_app();
        app.enter_search_mode();
        app.push_search_char('m');
        app.push_search_char('b');

        time::advance(Duration::from_millis(299)).await;
        assert!(!app.apply_pending_search_if_due());
        assert_eq!(app.engine.state().search, "");

        app.push_search_char('a');
        time::advance(Duration::from_millis(299)).await;
        assert!(!app.apply_pending_search_if_due());

        time::advance(Duration::from_millis(1)).await;
        assert!(app.apply_pending_search_if_due());
        assert_eq!(app.engine.state().search, "mba");
        assert_eq!(ids(&app.current_posts()), vec![9]);
        assert!(app.pending_search.is_none());
        assert!(!app.apply_pending_search_if_due());
    }

    #[tokio::test]
    async fn test_configured_debounce_window() {
        time::pause();
        let mut app = test_app();
        let config = Config {
            search_debounce_ms: 50,
            ..Config::default()
        };
        app.apply_config(&config);
        app.enter_search_mode();
        app.push_search_char('x');
        time::advance(Duration::from_millis(50)).await;
        assert!(app.apply_pending_search_if_due());
    }

    #[tokio::test]
    async fn test_unchanged_search_still_returns_to_first_page() {
        time::pause();
        let mut app = all_view_app();
        assert!(app.go_to_page(2));

        app.enter_search_mode();
        app.push_search_char('a');
        app.pop_search_char();
        time::advance(Duration::from_millis(400)).await;
        assert!(app.apply_pending_search_if_due());
        assert_eq!(app.engine.state().search, "");
        assert_eq!(app.engine.state().current_page, 1);

        assert!(app.go_to_page(2));
        app.enter_search_mode();
        app.commit_search();
        assert_eq!(app.engine.state().current_page, 1);

        assert!(app.go_to_page(2));
        app.clear_search();
        assert_eq!(app.engine.state().current_page, 1);
    }

    #[test]
    fn test_leave_search_mode_keeps_applied_query() {
        let mut app = test_app();
        app.enter_search_mode();
        for c in "guide".chars() {
            app.push_search_char(c);
        }
        app.commit_search();

        app.enter_search_mode();
        assert_eq!(app.search_input, "guide");
        app.push_search_char('s');
        app.leave_search_mode();
        assert_eq!(app.engine.state().search, "guide");
        assert_eq!(app.search_input, "guide");
        assert!(app.pending_search.is_none());
    }

    #[test]
    fn test_clear_search_restores_listing() {
        let mut app = all_view_app();
        app.enter_search_mode();
        for c in "zzz".chars() {
            app.push_search_char(c);
        }
        app.commit_search();
        assert!(app.current_posts().is_empty());
        assert!(app.selected_post().is_none());

        app.clear_search();
        assert_eq!(app.engine.state().search, "");
        assert_eq!(app.current_posts().len(), 6);
    }

    #[test]
    fn test_backspace_reschedules() {
        let mut app = test_app();
        app.enter_search_mode();
        app.pop_search_char();
        assert!(app.pending_search.is_none());
        app.push_search_char('a');
        app.pop_search_char();
        assert_eq!(app.pending_search.as_deref(), Some(""));
    }

    #[test]
    fn test_search_length_limit() {
        let mut app = test_app();
        app.enter_search_mode();
        for _ in 0..MAX_SEARCH_QUERY_LENGTH {
            assert!(app.push_search_char('a'));
        }
        assert!(!app.push_search_char('a'));
        assert_eq!(app.search_input.len(), MAX_SEARCH_QUERY_LENGTH);
    }

    #[test]
    fn test_reset_filters_clears_everything() {
        let mut app = all_view_app();
        app.cycle_category();
        app.cycle_sort();
        app.enter_search_mode();
        app.push_search_char('a');
        app.commit_search();

        app.reset_filters();
        assert!(app.engine.state().is_unfiltered());
        assert_eq!(app.engine.state().sort, SortMode::Newest);
        assert!(app.search_input.is_empty());
        assert_eq!(app.current_posts().len(), 6);
    }

    #[test]
    fn test_selection_clamped_after_shrink() {
        let mut app = all_view_app();
        app.selected = 5;
        app.engine.set_category(CategoryFilter::Only(crate::catalog::Category::Hospital));
        app.clamp_selection();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_selected_post_url_needs_base_for_relative_links() {
        let mut app = test_app();
        assert!(matches!(
            app.selected_post_url(),
            Some(Err(UrlValidationError::RelativeWithoutBase(_)))
        ));

        app.base_url = Some(Url::parse("https://blog.example.com/").unwrap());
        let url = app.selected_post_url().unwrap().unwrap();
        assert_eq!(url.as_str(), "https://blog.example.com/blogs/doctor-salary.html");
    }

    #[test]
    fn test_apply_config() {
        let mut app = test_app();
        let mut config = Config {
            theme: "light".to_string(),
            start_in_all_view: true,
            ..Config::default()
        };
        config
            .keybindings
            .insert("bogus_action".to_string(), "z".to_string());
        let warnings = app.apply_config(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(app.theme_variant, ThemeVariant::Light);
        assert_eq!(app.view, View::All);

        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        let warnings = app.apply_config(&config);
        assert!(warnings[0].contains("neon"));
        assert_eq!(app.theme_variant, ThemeVariant::Light);
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = test_app();
        assert_eq!(app.cycle_theme(), "Light");
        assert_eq!(app.style("status_bar"), ThemeVariant::Light.palette().status_bar);
    }

    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        time::pause();
        let mut app = test_app();
        app.set_status("Test message");

        time::advance(Duration::from_secs(2)).await;
        assert!(!app.clear_expired_status());
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(1)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }
}
