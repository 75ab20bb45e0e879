pub mod explore_screen;
pub mod home_screen;
pub mod login_screen;
pub mod main_screen;
pub mod profile_screen;
pub mod register_screen;

use crate::state::{LoginState, MainState, RegisterState};

/// The current screen and its view-model.
///
/// Navigation replaces one variant with another; there is no back
/// stack. The flow is Register → Login → Main, forward only.
#[derive(Debug, Clone)]
pub enum Screen {
    Register(RegisterState),
    Login(LoginState),
    Main(MainState),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Register(_) => "Register",
            Screen::Login(_) => "Login",
            Screen::Main(_) => "Main",
        }
    }
}
