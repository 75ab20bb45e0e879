use ratatui::layout::Rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::Session;
use crate::ui::theme;

pub fn render(f: &mut Frame, area: Rect, session: &Session) {
    let mut lines = vec![
        Line::styled("Profile", theme::title_style()),
        Line::raw(""),
        // "Guest" stands in until a login succeeds
        Line::from(format!("Welcome, {}!", session.display_name())),
        Line::raw(""),
        Line::raw("Here's your profile information:"),
        Line::raw(""),
    ];

    if session.is_authenticated() {
        lines.push(Line::from(vec![
            Span::styled("Username:  ", theme::header_style()),
            Span::raw(session.username().to_string()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Full name: ", theme::header_style()),
            Span::raw(session.full_name().to_string()),
        ]));
    } else {
        lines.push(Line::raw("Please log in to see your profile details."));
    }

    let body =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Profile "));

    f.render_widget(body, area);
}
