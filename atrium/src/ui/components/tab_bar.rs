//! Tab bar for the authenticated main screen.

use ratatui::prelude::Rect;
use ratatui::{
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::state::MainTab;
use crate::ui::theme;

pub fn render_tab_bar(f: &mut Frame, area: Rect, active_tab: MainTab) {
    let titles: Vec<String> = MainTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active_tab.index())
        .style(theme::form_field_style())
        .highlight_style(theme::tab_selected_style())
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(tabs, area);
}
