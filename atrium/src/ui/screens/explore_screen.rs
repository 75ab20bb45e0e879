use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let outer = Block::default().borders(Borders::ALL).title(" Explore ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Length(5), Constraint::Min(0)])
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::styled("Explore", theme::title_style()),
        Line::raw(""),
        Line::raw("Check out these exciting features:"),
    ]);
    f.render_widget(intro, chunks[0]);

    // Feature card, as a bordered block with title and subtitle
    let card = Paragraph::new(vec![
        Line::styled("Explore new functionalities", theme::help_text_style()),
        Line::raw(""),
        Line::raw("Learn about the latest updates and features in the app."),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" Feature 1 "));
    f.render_widget(card, chunks[1]);
}
