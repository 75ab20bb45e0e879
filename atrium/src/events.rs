use crate::state::MainTab;

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Form focus and editing (Register/Login screens)
    FocusNextField,
    FocusPreviousField,
    AppendFieldChar(char),
    DeleteFieldChar,
    ClearField,

    // Auth flow
    SubmitRegister,
    SubmitLogin,
    GoToLogin,
    DismissAlert,

    // Main tab set
    NextTab,
    PreviousTab,
    SelectTab(MainTab),

    // System
    ToggleHelp,
    Quit,
}

/// Events from background submission tasks (responses to commands)
#[derive(Debug, Clone, PartialEq)]
pub enum DataEvent {
    RegisterSucceeded {
        message: String,
    },
    RegisterFailed {
        error: String,
    },
    LoginSucceeded {
        username: String,
        full_name: String,
    },
    LoginFailed {
        error: String,
    },
}
