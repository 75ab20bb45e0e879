use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Abstracts the side effects of command execution so tests can swap in
/// a handler that never spawns tasks or touches the network.
pub trait DataEventHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Application core without terminal dependencies.
///
/// Holds the state machine and routes input through it: keys become
/// commands, commands run through the handler, auth outcomes go through
/// the reducer. The render loop and terminal plumbing live elsewhere.
pub struct AppCore<H: DataEventHandler> {
    state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(handler: H) -> Self {
        Self {
            state: AppState::new(),
            handler,
        }
    }

    /// Translate a key press into a command and execute it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.state) {
            self.handler.execute_with_context(command, &mut self.state);
        }
    }

    /// Apply an auth-call outcome. Production feeds these from the
    /// submission tasks; tests inject them directly.
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.state, event);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }
}
