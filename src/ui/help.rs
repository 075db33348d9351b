//! Help overlay: the live keybinding table, grouped by context.
//!
//! Built from the registry at draw time, so config overrides show up as the
//! keys the user actually has.

use crate::app::App;
use crate::keybindings::{BindingInfo, Context};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table},
    Frame,
};

const SECTIONS: [(Context, &str); 4] = [
    (Context::Global, "General"),
    (Context::Featured, "Featured Posts"),
    (Context::Listing, "All Posts"),
    (Context::Search, "Search Box"),
];

/// Row of the help table before styling.
#[derive(Debug, PartialEq, Eq)]
enum HelpLine {
    Section(&'static str),
    Entry(String, &'static str),
    Gap,
}

/// Group bindings under their section headings; empty sections are skipped.
fn help_lines(bindings: &[BindingInfo]) -> Vec<HelpLine> {
    let mut lines = Vec::new();

    for (context, title) in SECTIONS {
        let mut entries = bindings
            .iter()
            .filter(|b| b.context == context)
            .map(|b| HelpLine::Entry(b.key.clone(), b.action.describe()))
            .peekable();
        if entries.peek().is_none() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(HelpLine::Gap);
        }
        lines.push(HelpLine::Section(title));
        lines.extend(entries);

        // Digit jumps are handled by the input layer, not the registry.
        if context == Context::Listing {
            lines.push(HelpLine::Entry("1-9".to_string(), "Jump to page"));
        }
    }

    lines
}

pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(80, 80, f.area());
    if overlay.width < 20 || overlay.height < 6 {
        return;
    }
    f.render_widget(Clear, overlay);

    let lines = help_lines(&app.keybindings.all_bindings());

    // Borders plus the header row and its margin.
    let body_height = overlay.height.saturating_sub(4) as usize;
    let max_scroll = lines.len().saturating_sub(body_height);
    let scroll = app.help_scroll_offset.min(max_scroll);

    let rows: Vec<Row> = lines
        .into_iter()
        .skip(scroll)
        .take(body_height)
        .map(|line| match line {
            HelpLine::Section(title) => Row::new(vec![
                Line::from(Span::styled(
                    format!("-- {} --", title),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::default(),
            ])
            .style(app.style("header_title")),
            HelpLine::Entry(key, text) => Row::new(vec![format!("  {}", key), text.to_string()]),
            HelpLine::Gap => Row::new(vec![String::new(), String::new()]),
        })
        .collect();

    let title = if max_scroll == 0 {
        " Help (? to close) ".to_string()
    } else {
        format!(" Help ({}/{}) ", scroll + 1, max_scroll + 1)
    };

    let header = Row::new(vec!["Key", "Action"])
        .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .bottom_margin(1);

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(20)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(title),
        )
        .style(app.style("post_title").remove_modifier(Modifier::BOLD));
    f.render_widget(table, overlay);

    if scroll < max_scroll {
        let footer = Rect {
            x: overlay.x + 1,
            y: overlay.bottom().saturating_sub(1),
            width: overlay.width.saturating_sub(2),
            height: 1,
        };
        let hint = Span::styled(" j/k to scroll, ? or Esc to close ", app.style("post_meta"));
        f.render_widget(Paragraph::new(Line::from(hint)), footer);
    }
}

/// `percent_x` by `percent_y` of `area`, centered.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::KeybindingRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn centered_rect_is_inside_area() {
        let r = centered_rect(80, 80, Rect::new(0, 0, 100, 40));
        assert_eq!(r, Rect::new(10, 4, 80, 32));
    }

    #[test]
    fn sections_follow_context_order() {
        let lines = help_lines(&KeybindingRegistry::new().all_bindings());
        let sections: Vec<&str> = lines
            .iter()
            .filter_map(|l| match l {
                HelpLine::Section(title) => Some(*title),
                _ => None,
            })
            .collect();
        // No default key is bound only in the featured view.
        assert_eq!(sections, vec!["General", "All Posts", "Search Box"]);
        assert_eq!(lines[0], HelpLine::Section("General"));
        assert_eq!(lines[1], HelpLine::Entry("q".to_string(), "Quit"));
    }

    #[test]
    fn digit_jump_listed_with_listing_keys() {
        let lines = help_lines(&KeybindingRegistry::new().all_bindings());
        let jump = lines
            .iter()
            .position(|l| *l == HelpLine::Entry("1-9".to_string(), "Jump to page"))
            .unwrap();
        let search = lines
            .iter()
            .position(|l| *l == HelpLine::Section("Search Box"))
            .unwrap();
        assert_eq!(lines[jump + 1], HelpLine::Gap);
        assert_eq!(jump + 2, search);
    }

    #[test]
    fn empty_registry_has_no_lines() {
        assert!(help_lines(&[]).is_empty());
    }
}
