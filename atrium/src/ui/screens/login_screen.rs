use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::state::{LoginField, LoginState};
use crate::ui::components::{form_input, help_bar, screen_title};
use crate::ui::layouts;
use crate::ui::theme::FORM_FIELD_HEIGHT;

pub fn render(f: &mut Frame, state: &LoginState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "Log in", &state.submit_loading);

    let form_area = layouts::centered_form(48, content_area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(form_area);

    form_input::render_text_input(
        f,
        rows[0],
        "Username",
        &state.username,
        state.focus == LoginField::Username,
        false,
    );
    form_input::render_text_input(
        f,
        rows[1],
        "Password",
        &state.password,
        state.focus == LoginField::Password,
        true,
    );
    form_input::render_button(
        f,
        rows[2],
        "Log in",
        state.focus == LoginField::SubmitButton,
    );

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_FORM);
}
