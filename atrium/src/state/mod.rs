pub mod reducer;

use crate::ui::screens::Screen;
use throbber_widgets_tui::ThrobberState;

/// Represents the submission state of a form, separate from field state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Outcome message surfaced to the user over the current screen
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// In-process record of the authenticated identity.
///
/// Created empty at startup and written exactly once per successful
/// login, by the reducer's login-success path. Nothing else mutates it
/// and nothing clears it (there is no logout).
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Session {
    logged_in_user: String,
    full_name: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, username: &str, full_name: &str) {
        self.logged_in_user = username.to_string();
        self.full_name = full_name.to_string();
    }

    pub fn is_authenticated(&self) -> bool {
        !self.logged_in_user.is_empty()
    }

    pub fn username(&self) -> &str {
        &self.logged_in_user
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Name to greet the user with; "Guest" while unauthenticated.
    pub fn display_name(&self) -> &str {
        if self.is_authenticated() {
            &self.logged_in_user
        } else {
            "Guest"
        }
    }
}

/// Focusable elements on the Register screen, in tab order
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    #[default]
    Email,
    Username,
    Password,
    SubmitButton,
    GoToLoginButton,
}

impl RegisterField {
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Username,
            Self::Username => Self::Password,
            Self::Password => Self::SubmitButton,
            Self::SubmitButton => Self::GoToLoginButton,
            Self::GoToLoginButton => Self::Email,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Email => Self::GoToLoginButton,
            Self::Username => Self::Email,
            Self::Password => Self::Username,
            Self::SubmitButton => Self::Password,
            Self::GoToLoginButton => Self::SubmitButton,
        }
    }
}

/// Focusable elements on the Login screen, in tab order
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    SubmitButton,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::SubmitButton,
            Self::SubmitButton => Self::Username,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Username => Self::SubmitButton,
            Self::Password => Self::Username,
            Self::SubmitButton => Self::Password,
        }
    }
}

/// Tabs of the authenticated Main screen
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    #[default]
    Home,
    Explore,
    Profile,
}

impl MainTab {
    pub const ALL: [MainTab; 3] = [MainTab::Home, MainTab::Explore, MainTab::Profile];

    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Explore,
            Self::Explore => Self::Profile,
            Self::Profile => Self::Home,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Home => Self::Profile,
            Self::Explore => Self::Home,
            Self::Profile => Self::Explore,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Explore => "Explore",
            Self::Profile => "Profile",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Explore => 1,
            Self::Profile => 2,
        }
    }
}

/// View-model for the Register screen.
///
/// Field contents are transient: they exist only for the lifetime of
/// this screen and are never stored anywhere else.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RegisterState {
    pub email: String,
    pub username: String,
    pub password: String,
    pub focus: RegisterField,
    pub submit_loading: LoadingState,
    pub alert: Option<Alert>,
    /// Monotonic submission counter. Every submit spawns a fresh task;
    /// concurrent submissions are allowed and race to resolution.
    pub submit_seq: u64,
}

/// View-model for the Login screen
#[derive(Default, Debug, Clone, PartialEq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub submit_loading: LoadingState,
    pub alert: Option<Alert>,
    pub submit_seq: u64,
}

/// View-model for the authenticated tab set
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MainState {
    pub active_tab: MainTab,
}

#[derive(Debug, Clone)]
pub struct AppState {
    screen: Screen,

    /// Shared session context, read by any screen, written only by the
    /// reducer's login-success path.
    pub session: Session,

    // UI state
    pub help_visible: bool,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Register(RegisterState::default()),
            session: Session::new(),
            help_visible: false,
            should_quit: false,
        }
    }

    pub fn current_screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current_screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Replace the current screen. There is no back stack: the
    /// navigation graph is Register → Login → Main, forward only.
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!("Navigating: {} -> {}", self.screen.name(), screen.name());
        self.screen = screen;
    }

    /// Alert shown over the current screen, if any
    pub fn current_alert(&self) -> Option<&Alert> {
        match &self.screen {
            Screen::Register(s) => s.alert.as_ref(),
            Screen::Login(s) => s.alert.as_ref(),
            Screen::Main(_) => None,
        }
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.current_screen_mut() {
            Screen::Register(state) => {
                if let LoadingState::Loading(ref mut throbber_state) = state.submit_loading {
                    return Some(throbber_state);
                }
            }
            Screen::Login(state) => {
                if let LoadingState::Loading(ref mut throbber_state) = state.submit_loading {
                    return Some(throbber_state);
                }
            }
            Screen::Main(_) => {
                // Main screen performs no network calls
            }
        }
        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.display_name(), "Guest");
    }

    #[test]
    fn session_set_records_identity() {
        let mut session = Session::new();
        session.set("alice", "Alice A.");
        assert!(session.is_authenticated());
        assert_eq!(session.username(), "alice");
        assert_eq!(session.full_name(), "Alice A.");
        assert_eq!(session.display_name(), "alice");
    }

    #[test]
    fn register_focus_cycles_through_all_elements() {
        let mut field = RegisterField::Email;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, RegisterField::Email);

        assert_eq!(RegisterField::Email.previous(), RegisterField::GoToLoginButton);
    }

    #[test]
    fn main_tab_cycles_both_directions() {
        assert_eq!(MainTab::Profile.next(), MainTab::Home);
        assert_eq!(MainTab::Home.previous(), MainTab::Profile);
        assert_eq!(MainTab::Explore.index(), 1);
    }

    #[test]
    fn initial_screen_is_register() {
        let state = AppState::new();
        assert!(matches!(state.current_screen(), Screen::Register(_)));
    }
}
