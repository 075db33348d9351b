//! Render functions for the TUI.
//!
//! Lays out the header, the filter bar and page controls (full listing
//! only), the post cards and the status bar, then draws overlays.

use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{filters, help, pagination, posts, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 12;

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    match app.view {
        View::Featured => render_featured(f, app),
        View::All => render_all(f, app),
    }

    if app.show_help {
        help::render(f, app);
    }
}

/// Featured posts: header, cards, status bar.
fn render_featured(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, app, chunks[0], "Featured Posts");
    posts::render(f, app, chunks[1]);
    status::render(f, app, chunks[2]);
}

/// Full listing: header, filter bar, cards, page controls, status bar.
fn render_all(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(filters::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, app, chunks[0], "All Posts");
    filters::render(f, app, chunks[1]);
    posts::render(f, app, chunks[2]);
    pagination::render(f, app, chunks[3]);
    status::render(f, app, chunks[4]);
}

/// Title on the left, view toggle hint on the right.
fn render_header(f: &mut Frame, app: &App, area: Rect, title: &str) {
    let toggle = format!("[v] {} ", app.view.toggle_label());
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(toggle.len() as u16)])
        .split(area);

    let left = Line::from(vec![
        Span::styled(" blogdeck ", app.style("header_title")),
        Span::styled(format!("· {}", title), app.style("post_meta")),
    ]);
    f.render_widget(Paragraph::new(left), halves[0]);
    f.render_widget(
        Paragraph::new(Span::styled(toggle, app.style("filter_label")))
            .alignment(Alignment::Right),
        halves[1],
    );
}
