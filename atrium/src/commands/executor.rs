use std::sync::Arc;

use throbber_widgets_tui::ThrobberState;

use crate::background::{AuthSubmitter, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::{AppState, LoadingState, LoginState, RegisterField};
use crate::ui::screens::Screen;

/// Execute a command: mutate state and spawn background submissions.
///
/// Pure state transitions happen inline; network calls are handed to
/// the task manager so the event loop never blocks on IO.
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    submitter: &Arc<AuthSubmitter>,
) {
    apply_local_command(&command, state);

    match command {
        AppCommand::SubmitRegister => {
            if let Screen::Register(register_state) = state.current_screen_mut() {
                let seq = begin_register_submission(register_state);
                let email = register_state.email.clone();
                let username = register_state.username.clone();
                let password = register_state.password.clone();
                let submitter = Arc::clone(submitter);
                task_manager.spawn_task(format!("register_{seq}"), async move {
                    submitter.submit_register(email, username, password).await;
                });
            }
        }

        AppCommand::SubmitLogin => {
            if let Screen::Login(login_state) = state.current_screen_mut() {
                let seq = begin_login_submission(login_state);
                let username = login_state.username.clone();
                let password = login_state.password.clone();
                let submitter = Arc::clone(submitter);
                task_manager.spawn_task(format!("login_{seq}"), async move {
                    submitter.submit_login(username, password).await;
                });
            }
        }

        _ => {}
    }
}

/// Everything execute_command does except spawning tasks. Tests drive
/// this and inject DataEvents directly instead of hitting the network.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    apply_local_command(&command, state);

    match command {
        AppCommand::SubmitRegister => {
            if let Screen::Register(register_state) = state.current_screen_mut() {
                begin_register_submission(register_state);
            }
        }
        AppCommand::SubmitLogin => {
            if let Screen::Login(login_state) = state.current_screen_mut() {
                begin_login_submission(login_state);
            }
        }
        _ => {}
    }
}

/// Mark a submission started. Every submit gets a fresh sequence number
/// and a fresh task; in-flight calls are never cancelled, so concurrent
/// submissions race and the last one to resolve wins.
fn begin_register_submission(register_state: &mut crate::state::RegisterState) -> u64 {
    register_state.alert = None;
    register_state.submit_loading = LoadingState::Loading(ThrobberState::default());
    register_state.submit_seq += 1;
    tracing::info!(
        "Submitting registration #{} for {}",
        register_state.submit_seq,
        register_state.username
    );
    register_state.submit_seq
}

fn begin_login_submission(login_state: &mut crate::state::LoginState) -> u64 {
    login_state.alert = None;
    login_state.submit_loading = LoadingState::Loading(ThrobberState::default());
    login_state.submit_seq += 1;
    tracing::info!(
        "Submitting login #{} for {}",
        login_state.submit_seq,
        login_state.username
    );
    login_state.submit_seq
}

/// State transitions that need no background work
fn apply_local_command(command: &AppCommand, state: &mut AppState) {
    match command {
        AppCommand::FocusNextField => match state.current_screen_mut() {
            Screen::Register(s) => s.focus = s.focus.next(),
            Screen::Login(s) => s.focus = s.focus.next(),
            Screen::Main(_) => {}
        },

        AppCommand::FocusPreviousField => match state.current_screen_mut() {
            Screen::Register(s) => s.focus = s.focus.previous(),
            Screen::Login(s) => s.focus = s.focus.previous(),
            Screen::Main(_) => {}
        },

        AppCommand::AppendFieldChar(c) => match state.current_screen_mut() {
            Screen::Register(s) => {
                if let Some(field) = register_field_mut(s) {
                    field.push(*c);
                }
            }
            Screen::Login(s) => {
                if let Some(field) = login_field_mut(s) {
                    field.push(*c);
                }
            }
            Screen::Main(_) => {}
        },

        AppCommand::DeleteFieldChar => match state.current_screen_mut() {
            Screen::Register(s) => {
                if let Some(field) = register_field_mut(s) {
                    field.pop();
                }
            }
            Screen::Login(s) => {
                if let Some(field) = login_field_mut(s) {
                    field.pop();
                }
            }
            Screen::Main(_) => {}
        },

        AppCommand::ClearField => match state.current_screen_mut() {
            Screen::Register(s) => {
                if let Some(field) = register_field_mut(s) {
                    field.clear();
                }
            }
            Screen::Login(s) => {
                if let Some(field) = login_field_mut(s) {
                    field.clear();
                }
            }
            Screen::Main(_) => {}
        },

        AppCommand::GoToLogin => {
            if matches!(state.current_screen(), Screen::Register(_)) {
                state.navigate_to(Screen::Login(LoginState::default()));
            }
        }

        AppCommand::DismissAlert => match state.current_screen_mut() {
            Screen::Register(s) => s.alert = None,
            Screen::Login(s) => s.alert = None,
            Screen::Main(_) => {}
        },

        AppCommand::NextTab => {
            if let Screen::Main(main_state) = state.current_screen_mut() {
                main_state.active_tab = main_state.active_tab.next();
            }
        }

        AppCommand::PreviousTab => {
            if let Screen::Main(main_state) = state.current_screen_mut() {
                main_state.active_tab = main_state.active_tab.previous();
            }
        }

        AppCommand::SelectTab(tab) => {
            if let Screen::Main(main_state) = state.current_screen_mut() {
                main_state.active_tab = *tab;
            }
        }

        AppCommand::ToggleHelp => {
            if matches!(state.current_screen(), Screen::Main(_)) {
                state.help_visible = !state.help_visible;
            }
        }

        AppCommand::Quit => {
            state.should_quit = true;
        }

        // Handled by the caller after local transitions run
        AppCommand::SubmitRegister | AppCommand::SubmitLogin => {}
    }
}

fn register_field_mut(state: &mut crate::state::RegisterState) -> Option<&mut String> {
    match state.focus {
        RegisterField::Email => Some(&mut state.email),
        RegisterField::Username => Some(&mut state.username),
        RegisterField::Password => Some(&mut state.password),
        RegisterField::SubmitButton | RegisterField::GoToLoginButton => None,
    }
}

fn login_field_mut(state: &mut crate::state::LoginState) -> Option<&mut String> {
    match state.focus {
        crate::state::LoginField::Username => Some(&mut state.username),
        crate::state::LoginField::Password => Some(&mut state.password),
        crate::state::LoginField::SubmitButton => None,
    }
}
