use crate::app::App;
use crate::engine::PaginationSummary;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Page numbers shown before the list collapses into a window with gaps.
const MAX_PAGE_BUTTONS: usize = 9;

/// One element of the page control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageItem {
    Prev { enabled: bool },
    Page { number: usize, current: bool },
    Gap,
    Next { enabled: bool },
}

/// Controls for a summary: nothing when everything fits on one page.
fn page_items(summary: &PaginationSummary) -> Vec<PageItem> {
    if !summary.shows_page_controls() {
        return Vec::new();
    }

    let total = summary.total_pages;
    let current = summary.current_page;
    let mut items = vec![PageItem::Prev {
        enabled: summary.has_prev(),
    }];

    let page = |number| PageItem::Page {
        number,
        current: number == current,
    };

    if total <= MAX_PAGE_BUTTONS {
        items.extend((1..=total).map(page));
    } else {
        // First, last and a window around the current page.
        let window_start = current.saturating_sub(2).max(2);
        let window_end = (current + 2).min(total - 1);
        items.push(page(1));
        if window_start > 2 {
            items.push(PageItem::Gap);
        }
        items.extend((window_start..=window_end).map(page));
        if window_end < total - 1 {
            items.push(PageItem::Gap);
        }
        items.push(page(total));
    }

    items.push(PageItem::Next {
        enabled: summary.has_next(),
    });
    items
}

/// Render page buttons on the left and the range text on the right.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.engine.pagination_summary();

    let spans: Vec<Span> = page_items(&summary)
        .into_iter()
        .map(|item| match item {
            PageItem::Prev { enabled } => Span::styled(
                " ‹ Prev ",
                if enabled {
                    app.style("page_number")
                } else {
                    app.style("page_disabled")
                },
            ),
            PageItem::Next { enabled } => Span::styled(
                " Next › ",
                if enabled {
                    app.style("page_number")
                } else {
                    app.style("page_disabled")
                },
            ),
            PageItem::Page { number, current } => Span::styled(
                format!(" {} ", number),
                if current {
                    app.style("page_current")
                } else {
                    app.style("page_number")
                },
            ),
            PageItem::Gap => Span::styled(" … ", app.style("page_disabled")),
        })
        .collect();

    let range = format!("{} ", summary);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(range.chars().count() as u16)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(spans)), halves[0]);
    f.render_widget(
        Paragraph::new(Span::styled(range, app.style("page_range"))).alignment(Alignment::Right),
        halves[1],
    );
}
