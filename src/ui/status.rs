use crate::app::{App, View};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.search_mode {
        Cow::Borrowed("Type to search | Esc done | Enter apply now | Ctrl+u clear")
    } else {
        match app.view {
            View::Featured => {
                Cow::Borrowed("[j/k]move [Enter]open [v]iew all [T]heme [?]help [q]uit")
            }
            View::All => Cow::Borrowed(
                "[/]search [c]ategory [s]ort [t]ime [n/p]page [r]eset [Enter]open [?]help [q]uit",
            ),
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
