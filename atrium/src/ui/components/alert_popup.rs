//! Modal popup for auth-call outcomes.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::{Alert, AlertKind};
use crate::ui::{layouts, theme};

/// Render the outcome alert over the current screen. The alert is
/// modal: input is captured until it is dismissed.
pub fn render_alert(f: &mut Frame, alert: &Alert) {
    let (title, border_style) = match alert.kind {
        AlertKind::Info => (" Notice ", theme::info_border_style()),
        AlertKind::Error => (" Error ", theme::danger_border_style()),
    };

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        title,
        border_style,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    // Server-supplied messages are shown verbatim
    let message = Paragraph::new(alert.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let hint = Paragraph::new("Press Enter or Esc to dismiss")
        .style(theme::help_text_style())
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);
}
