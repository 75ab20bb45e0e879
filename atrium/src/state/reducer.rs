use super::{Alert, AppState, LoadingState, MainState};
use crate::events::DataEvent;
use crate::ui::screens::Screen;

/// Pure state transition function for auth-call outcomes.
///
/// Register outcomes never touch the session. Login success is the
/// single writer of the session; login failure leaves all state as it
/// was apart from the screen-local alert. When concurrent submissions
/// race, whichever event is reduced last determines the final outcome.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::RegisterSucceeded { message } => {
            if let Screen::Register(register_state) = state.current_screen_mut() {
                register_state.submit_loading = LoadingState::Loaded;
                register_state.alert = Some(Alert::info(message));
            } else {
                // Screen changed while the call was in flight; the
                // outcome has nowhere to display.
                tracing::debug!("Register succeeded after leaving the Register screen");
            }
        }

        DataEvent::RegisterFailed { error } => {
            if let Screen::Register(register_state) = state.current_screen_mut() {
                register_state.submit_loading = LoadingState::Error(error.clone());
                register_state.alert = Some(Alert::error(error));
            }
        }

        DataEvent::LoginSucceeded {
            username,
            full_name,
        } => {
            // Sole mutation point of the session.
            state.session.set(&username, &full_name);
            tracing::info!("Logged in as {}", username);

            match state.current_screen() {
                Screen::Login(_) => {
                    state.navigate_to(Screen::Main(MainState::default()));
                }
                Screen::Main(_) => {
                    // A concurrent submission resolved after navigation;
                    // the session above already reflects it.
                }
                Screen::Register(_) => {}
            }
        }

        DataEvent::LoginFailed { error } => {
            if let Screen::Login(login_state) = state.current_screen_mut() {
                login_state.submit_loading = LoadingState::Error(error.clone());
                login_state.alert = Some(Alert::error(error));
            }
            // Failure never mutates the session and never navigates.
        }
    }
}
