use crate::app::{App, View};
use crate::catalog::Post;
use crate::theme::category_chip;
use crate::util::{strip_control_chars, truncate_to_width, wrap_to_width};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Excerpt lines shown per card.
const EXCERPT_LINES: usize = 2;

/// Render the post cards for the current view.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let posts = app.current_posts();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"));

    if posts.is_empty() {
        render_empty(f, app, area, block);
        return;
    }

    // Borders and the highlight symbol take four columns.
    let inner_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| ListItem::new(card_lines(app, post, inner_width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.style("post_selected"))
        .highlight_symbol("▌ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

/// One card: chip and read time, title, excerpt, byline, spacer.
fn card_lines(app: &App, post: &Post, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(EXCERPT_LINES + 4);

    let mut top = vec![
        Span::styled(
            format!(" {} ", post.category_name),
            category_chip(post.category),
        ),
        Span::styled(format!("  {} min read", post.read_time), app.style("post_meta")),
    ];
    if post.featured && app.view == View::All {
        top.push(Span::styled("  ★", app.style("post_featured_mark")));
    }
    lines.push(Line::from(top));

    let title = strip_control_chars(&post.title);
    lines.push(Line::from(Span::styled(
        truncate_to_width(&title, width).into_owned(),
        app.style("post_title"),
    )));

    let excerpt = strip_control_chars(&post.excerpt);
    for line in wrap_to_width(&excerpt, width, EXCERPT_LINES) {
        lines.push(Line::from(Span::styled(line, app.style("post_excerpt"))));
    }

    let byline = format!(
        "By {} · {}",
        strip_control_chars(&post.author),
        post.display_date()
    );
    lines.push(Line::from(Span::styled(
        truncate_to_width(&byline, width).into_owned(),
        app.style("post_meta"),
    )));
    lines.push(Line::from(""));
    lines
}

/// The "no results" panel with its reset hint.
fn render_empty(f: &mut Frame, app: &App, area: Rect, block: Block<'_>) {
    let lines = match app.view {
        View::Featured => vec![Line::from(Span::styled(
            "No featured posts",
            app.style("empty_title"),
        ))],
        View::All => vec![
            Line::from(Span::styled("No blogs found", app.style("empty_title"))),
            Line::from(""),
            Line::from(Span::styled(
                "Try adjusting your filters or search terms",
                app.style("empty_hint"),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Reset All Filters",
                app.style("filter_active"),
            )),
        ],
    };

    let top_pad = area.height.saturating_sub(lines.len() as u16 + 2) / 2;
    let mut padded = vec![Line::from(""); top_pad as usize];
    padded.extend(lines);

    f.render_widget(
        Paragraph::new(padded).block(block).alignment(Alignment::Center),
        area,
    );
}
