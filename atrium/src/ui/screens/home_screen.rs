use ratatui::layout::Rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let body = Paragraph::new(vec![
        Line::styled("Welcome to the Home Screen", theme::title_style()),
        Line::raw(""),
        Line::raw("Explore the app, check out the latest features, and stay connected with us!"),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" Home "));

    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn shows_welcome_headline() {
        let mut terminal = Terminal::new(TestBackend::new(90, 12)).unwrap();
        terminal
            .draw(|f| render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Welcome to the Home Screen"));
        assert!(text.contains("stay connected with us!"));
    }
}
