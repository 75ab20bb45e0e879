//! Shared screen title component with submission indicator.

use ratatui::prelude::Rect;
use ratatui::{widgets::Paragraph, Frame};

use crate::state::LoadingState;
use crate::ui::{layouts, theme};

/// Render a screen title with the submission indicator on the right.
pub fn render_screen_title(f: &mut Frame, area: Rect, title: &str, loading_state: &LoadingState) {
    let (title_area, indicator_area) = layouts::title_with_loading(area);

    let title = Paragraph::new(title).style(theme::title_style());
    f.render_widget(title, title_area);

    super::loading_indicator::render_loading_indicator(f, indicator_area, loading_state);
}
