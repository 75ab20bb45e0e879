use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{MainState, MainTab, Session};
use crate::ui::components::{help_bar, tab_bar};
use crate::ui::{layouts, theme};

use super::{explore_screen, home_screen, profile_screen};

pub fn render(f: &mut Frame, state: &MainState, session: &Session) {
    let (title_area, tab_area, content_area, help_area) =
        layouts::screen_layout_with_tabs(f.area());

    let title = Paragraph::new("atrium").style(theme::title_style());
    f.render_widget(title, title_area);

    tab_bar::render_tab_bar(f, tab_area, state.active_tab);

    match state.active_tab {
        MainTab::Home => home_screen::render(f, content_area),
        MainTab::Explore => explore_screen::render(f, content_area),
        MainTab::Profile => profile_screen::render(f, content_area, session),
    }

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_MAIN);
}
