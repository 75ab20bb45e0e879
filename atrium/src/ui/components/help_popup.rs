use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, theme};

/// Render the key reference popup. Help is only reachable from the
/// main screen; the form screens document their keys in the help bar.
pub fn render_help_popup(f: &mut Frame) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = HELP_ITEMS
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

const HELP_ITEMS: [(&str, &str); 7] = [
    ("Tab/→/l", "Next tab"),
    ("Shift+Tab/←/h", "Previous tab"),
    ("1/2/3", "Jump to Home/Explore/Profile"),
    ("q", "Quit application"),
    ("", ""),
    ("?", "Toggle this help"),
    ("Ctrl+C", "Quit application"),
];
