use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::{MainTab, RegisterField};
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &crate::state::AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl shortcuts work everywhere, including inside text fields
    if event.modifiers.ctrl {
        return match key {
            Key::Char('c') | Key::Char('q') => Some(AppCommand::Quit),
            Key::Char('u') if state.current_alert().is_none() => Some(AppCommand::ClearField),
            _ => None,
        };
    }

    // Priority 1: an alert popup is modal until dismissed
    if state.current_alert().is_some() {
        return match key {
            Key::Enter | Key::Esc => Some(AppCommand::DismissAlert),
            _ => None,
        };
    }

    // Priority 2: help popup (reachable from the Main screen)
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    match state.current_screen() {
        Screen::Register(register_state) => match key {
            Key::Tab | Key::Down => Some(AppCommand::FocusNextField),
            Key::BackTab | Key::Up => Some(AppCommand::FocusPreviousField),
            Key::Enter => match register_state.focus {
                RegisterField::GoToLoginButton => Some(AppCommand::GoToLogin),
                _ => Some(AppCommand::SubmitRegister),
            },
            Key::Backspace => Some(AppCommand::DeleteFieldChar),
            Key::Char(c) => Some(AppCommand::AppendFieldChar(c)),
            _ => None,
        },

        Screen::Login(_) => match key {
            Key::Tab | Key::Down => Some(AppCommand::FocusNextField),
            Key::BackTab | Key::Up => Some(AppCommand::FocusPreviousField),
            // Enter submits from any element; button focus is only the
            // visual affordance.
            Key::Enter => Some(AppCommand::SubmitLogin),
            Key::Backspace => Some(AppCommand::DeleteFieldChar),
            Key::Char(c) => Some(AppCommand::AppendFieldChar(c)),
            _ => None,
        },

        Screen::Main(..) => match key {
            Key::Char('q') => Some(AppCommand::Quit),
            Key::Char('?') => Some(AppCommand::ToggleHelp),
            Key::Tab | Key::Right | Key::Char('l') => Some(AppCommand::NextTab),
            Key::BackTab | Key::Left | Key::Char('h') => Some(AppCommand::PreviousTab),
            Key::Char('1') => Some(AppCommand::SelectTab(MainTab::Home)),
            Key::Char('2') => Some(AppCommand::SelectTab(MainTab::Explore)),
            Key::Char('3') => Some(AppCommand::SelectTab(MainTab::Profile)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, LoginState};

    #[test]
    fn typing_on_register_screen_appends_chars() {
        let state = AppState::new();
        let command = handle_key_input(KeyEvent::new(Key::Char('a')), &state);
        assert_eq!(command, Some(AppCommand::AppendFieldChar('a')));
    }

    #[test]
    fn q_does_not_quit_inside_a_form() {
        let state = AppState::new();
        let command = handle_key_input(KeyEvent::new(Key::Char('q')), &state);
        assert_eq!(command, Some(AppCommand::AppendFieldChar('q')));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let state = AppState::new();
        let command = handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state);
        assert_eq!(command, Some(AppCommand::Quit));
    }

    #[test]
    fn enter_on_login_screen_submits() {
        let mut state = AppState::new();
        state.navigate_to(Screen::Login(LoginState::default()));
        let command = handle_key_input(KeyEvent::new(Key::Enter), &state);
        assert_eq!(command, Some(AppCommand::SubmitLogin));
    }
}
