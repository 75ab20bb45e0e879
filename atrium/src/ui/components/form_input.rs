//! Bordered text inputs and buttons for the auth forms.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a labelled single-line text input.
///
/// `masked` replaces every character with a bullet; the underlying
/// value is untouched. The focused field gets the highlight style and
/// a trailing cursor marker.
pub fn render_text_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    masked: bool,
) {
    let shown = if masked {
        "\u{2022}".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let text = if focused {
        format!("{shown}\u{2588}")
    } else {
        shown
    };

    let style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {label} ")),
    );

    f.render_widget(input, area);
}

/// Render a button-like element
pub fn render_button(f: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(button, area);
}
