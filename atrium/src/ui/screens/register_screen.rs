use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::state::{RegisterField, RegisterState};
use crate::ui::components::{form_input, help_bar, screen_title};
use crate::ui::layouts;
use crate::ui::theme::FORM_FIELD_HEIGHT;

pub fn render(f: &mut Frame, state: &RegisterState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "Create an account", &state.submit_loading);

    let form_area = layouts::centered_form(48, content_area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Length(FORM_FIELD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(form_area);

    form_input::render_text_input(
        f,
        rows[0],
        "Email",
        &state.email,
        state.focus == RegisterField::Email,
        false,
    );
    form_input::render_text_input(
        f,
        rows[1],
        "Username",
        &state.username,
        state.focus == RegisterField::Username,
        false,
    );
    form_input::render_text_input(
        f,
        rows[2],
        "Password",
        &state.password,
        state.focus == RegisterField::Password,
        true,
    );
    form_input::render_button(
        f,
        rows[3],
        "Register",
        state.focus == RegisterField::SubmitButton,
    );
    form_input::render_button(
        f,
        rows[4],
        "Already have an account? Log in",
        state.focus == RegisterField::GoToLoginButton,
    );

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_FORM);
}
