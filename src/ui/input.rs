//! Input handling for the TUI.
//!
//! Keys are resolved through the keybinding registry in the context of the
//! current view, then dispatched to `App` operations.

use crate::app::{App, View};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

fn view_context(view: View) -> KbContext {
    match view {
        View::Featured => KbContext::Featured,
        View::All => KbContext::Listing,
    }
}

/// Main input dispatch function.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    if app.show_help {
        return handle_help_input(app, code);
    }

    if app.search_mode {
        handle_search_input(app, code, modifiers);
        return Action::Continue;
    }

    let context = view_context(app.view);
    let Some(action) = app.keybindings.action_for_key(code, modifiers, context) else {
        // Digits jump straight to a page, like the page-number buttons.
        if let (View::All, KeyCode::Char(c)) = (app.view, code) {
            if let Some(page) = c.to_digit(10).filter(|d| *d > 0) {
                app.go_to_page(page as usize);
            }
        }
        return Action::Continue;
    };

    match action {
        KbAction::Quit => return Action::Quit,
        KbAction::NavDown => app.nav_down(),
        KbAction::NavUp => app.nav_up(),
        KbAction::Back => {
            if app.view == View::All {
                app.toggle_view();
            }
        }
        KbAction::OpenPost => {
            if app.view == View::All && app.engine.total_matches() == 0 {
                app.reset_filters();
            } else {
                open_selected(app);
            }
        }
        KbAction::ToggleView => {
            app.toggle_view();
        }
        KbAction::NextPage => {
            app.next_page();
        }
        KbAction::PrevPage => {
            app.prev_page();
        }
        KbAction::FirstPage => {
            app.first_page();
        }
        KbAction::LastPage => {
            app.last_page();
        }
        KbAction::CycleCategory => app.cycle_category(),
        KbAction::CycleSort => app.cycle_sort(),
        KbAction::CycleTimeFilter => app.cycle_time_filter(),
        KbAction::EnterSearch => app.enter_search_mode(),
        KbAction::ClearSearch => {
            app.clear_search();
            app.set_status("Search cleared");
        }
        KbAction::ResetFilters => app.reset_filters(),
        KbAction::CycleTheme => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KbAction::ShowHelp => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        KbAction::ExitSearch | KbAction::CommitSearch => {}
    }
    Action::Continue
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input while the search box has focus.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Search)
    {
        Some(KbAction::ExitSearch) => app.leave_search_mode(),
        Some(KbAction::CommitSearch) => app.commit_search(),
        Some(KbAction::ClearSearch) => app.clear_search(),
        _ => match code {
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.push_search_char(c);
            }
            _ => {}
        },
    }
}

/// Open the selected post in the system browser.
fn open_selected(app: &mut App) {
    let Some(post) = app.selected_post() else {
        return;
    };
    let title = post.title.clone();

    match app.selected_post_url() {
        None => {}
        Some(Err(e)) => app.set_status(e.to_string()),
        Some(Ok(url)) => match open::that(url.as_str()) {
            Ok(()) => {
                tracing::info!(url = %url, "Opened post");
                app.set_status(format!("Opened \"{}\"", title));
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to open post");
                app.set_status(format!("Failed to open browser: {}", e));
            }
        },
    }
}
