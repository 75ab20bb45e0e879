pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    match state.current_screen() {
        Screen::Register(register_state) => {
            register_screen::render(f, register_state);
        }
        Screen::Login(login_state) => {
            login_screen::render(f, login_state);
        }
        Screen::Main(main_state) => {
            main_screen::render(f, main_state, &state.session);
        }
    }

    // Outcome alert sits above the screen until dismissed
    if let Some(alert) = state.current_alert() {
        components::alert_popup::render_alert(f, alert);
    }

    // Help popup on top of everything
    if state.help_visible {
        components::help_popup::render_help_popup(f);
    }
}
