use crate::app::App;
use crate::engine::{CategoryFilter, SortMode, TimeFilter};
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the filter bar, borders included.
pub const HEIGHT: u16 = 3;

/// Render the search box and the current filter selections.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.state();

    let search_style = if app.search_mode {
        app.style("search_input_active")
    } else {
        app.style("search_input")
    };
    let query = if app.search_mode {
        format!("{}_", app.search_input)
    } else if state.search.is_empty() {
        "(press / to search)".to_string()
    } else {
        state.search.clone()
    };
    let query = truncate_to_width(&query, 28).into_owned();

    let pick = |is_default: bool| {
        if is_default {
            app.style("filter_value")
        } else {
            app.style("filter_active")
        }
    };

    let line = Line::from(vec![
        Span::styled("Search ", app.style("filter_label")),
        Span::styled(query, search_style),
        separator(app),
        Span::styled("[c] ", app.style("filter_label")),
        Span::styled(
            state.category.label(),
            pick(state.category == CategoryFilter::All),
        ),
        separator(app),
        Span::styled("[s] ", app.style("filter_label")),
        Span::styled(state.sort.label(), pick(state.sort == SortMode::Newest)),
        separator(app),
        Span::styled("[t] ", app.style("filter_label")),
        Span::styled(
            state.time_filter.label(),
            pick(state.time_filter == TimeFilter::All),
        ),
    ]);

    let border = if app.search_mode {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Filters "),
    );
    f.render_widget(paragraph, area);
}

fn separator(app: &App) -> Span<'static> {
    Span::styled(" │ ", app.style("filter_label"))
}
