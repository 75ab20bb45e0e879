use atrium::events::DataEvent;
use atrium::input::{Key, KeyEvent};
use atrium::state::{AlertKind, LoadingState, MainTab};
use atrium::testing::TestApp;
use atrium::ui::screens::Screen;

/// Drive the app from the initial Register screen to the Login screen
fn go_to_login(app: &mut TestApp) {
    // Tab past email, username, password, register button to the
    // go-to-login button, then activate it
    app.send_keys(&[Key::Tab, Key::Tab, Key::Tab, Key::Tab, Key::Enter]);
    assert!(matches!(app.state().current_screen(), Screen::Login(_)));
}

/// Fill the login form and submit
fn submit_login(app: &mut TestApp, username: &str, password: &str) {
    app.type_str(username);
    app.send_key(Key::Tab);
    app.type_str(password);
    app.send_key(Key::Enter);
}

#[test]
fn test_starts_on_register_screen() {
    let app = TestApp::new();
    assert!(matches!(app.state().current_screen(), Screen::Register(_)));
    assert!(!app.state().session.is_authenticated());
}

#[test]
fn test_register_to_login_navigation() {
    let mut app = TestApp::new();
    go_to_login(&mut app);

    // The login form starts empty; register field contents are gone
    let Screen::Login(login_state) = app.state().current_screen() else {
        panic!("expected login screen");
    };
    assert!(login_state.username.is_empty());
    assert!(login_state.password.is_empty());
}

#[test]
fn test_successful_login_sets_session_and_navigates() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "correct-password");

    // Submission is in flight
    let Screen::Login(login_state) = app.state().current_screen() else {
        panic!("expected login screen");
    };
    assert!(matches!(login_state.submit_loading, LoadingState::Loading(_)));

    app.send_data_event(DataEvent::LoginSucceeded {
        username: "alice".to_string(),
        full_name: "Alice Anderson".to_string(),
    });

    assert!(matches!(app.state().current_screen(), Screen::Main(_)));
    assert_eq!(app.state().session.username(), "alice");
    assert_eq!(app.state().session.full_name(), "Alice Anderson");
}

#[test]
fn test_failed_login_shows_alert_and_stays() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "wrong-password");

    app.send_data_event(DataEvent::LoginFailed {
        error: "invalid credentials".to_string(),
    });

    let Screen::Login(login_state) = app.state().current_screen() else {
        panic!("expected login screen");
    };
    let alert = login_state.alert.as_ref().expect("error alert shown");
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.message, "invalid credentials");
    assert!(!app.state().session.is_authenticated());

    // The typed credentials survive the failure
    assert_eq!(login_state.username, "alice");
    assert_eq!(login_state.password, "wrong-password");
}

#[test]
fn test_register_success_shows_alert_without_navigation() {
    let mut app = TestApp::new();

    app.type_str("a@b.com");
    app.send_key(Key::Tab);
    app.type_str("alice");
    app.send_key(Key::Tab);
    app.type_str("secret");
    app.send_key(Key::Enter);

    app.send_data_event(DataEvent::RegisterSucceeded {
        message: "account created".to_string(),
    });

    // Still on Register; the user navigates to Login themselves
    let Screen::Register(register_state) = app.state().current_screen() else {
        panic!("expected register screen");
    };
    let alert = register_state.alert.as_ref().expect("info alert shown");
    assert_eq!(alert.kind, AlertKind::Info);
    assert_eq!(alert.message, "account created");
    assert!(!app.state().session.is_authenticated());
}

#[test]
fn test_register_failure_keeps_field_contents() {
    let mut app = TestApp::new();

    app.type_str("a@b.com");
    app.send_key(Key::Tab);
    app.type_str("alice");
    app.send_key(Key::Tab);
    app.type_str("secret");
    app.send_key(Key::Enter);

    app.send_data_event(DataEvent::RegisterFailed {
        error: "username taken".to_string(),
    });

    let Screen::Register(register_state) = app.state().current_screen() else {
        panic!("expected register screen");
    };
    assert_eq!(register_state.email, "a@b.com");
    assert_eq!(register_state.username, "alice");
    assert_eq!(register_state.password, "secret");
    let alert = register_state.alert.as_ref().expect("error alert shown");
    assert_eq!(alert.kind, AlertKind::Error);
}

#[test]
fn test_alert_is_modal_until_dismissed() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "wrong");

    app.send_data_event(DataEvent::LoginFailed {
        error: "invalid credentials".to_string(),
    });

    // Typing is swallowed while the alert is up. Focus is still on the
    // password field after submitting.
    app.type_str("x");
    {
        let Screen::Login(login_state) = app.state().current_screen() else {
            panic!("expected login screen");
        };
        assert_eq!(login_state.password, "wrong");
        assert!(login_state.alert.is_some());
    }

    // Enter dismisses; typing works again
    app.send_key(Key::Enter);
    app.type_str("x");
    let Screen::Login(login_state) = app.state().current_screen() else {
        panic!("expected login screen");
    };
    assert!(login_state.alert.is_none());
    assert_eq!(login_state.password, "wrongx");
}

#[test]
fn test_double_submit_last_resolution_wins() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "pw");
    // Second submit while the first is still in flight
    app.send_key(Key::Enter);

    {
        let Screen::Login(login_state) = app.state().current_screen() else {
            panic!("expected login screen");
        };
        assert_eq!(login_state.submit_seq, 2);
    }

    // First resolves as failure, second as success: the later
    // resolution determines the final state.
    app.send_data_event(DataEvent::LoginFailed {
        error: "invalid credentials".to_string(),
    });
    app.send_data_event(DataEvent::LoginSucceeded {
        username: "alice".to_string(),
        full_name: "Alice Anderson".to_string(),
    });

    assert!(matches!(app.state().current_screen(), Screen::Main(_)));
    assert!(app.state().session.is_authenticated());
}

#[test]
fn test_late_failure_after_navigation_is_ignored() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "pw");
    app.send_key(Key::Enter);

    app.send_data_event(DataEvent::LoginSucceeded {
        username: "alice".to_string(),
        full_name: "Alice Anderson".to_string(),
    });
    // The slower submission fails after the screen changed
    app.send_data_event(DataEvent::LoginFailed {
        error: "invalid credentials".to_string(),
    });

    // Session survives; no alert has anywhere to show
    assert!(matches!(app.state().current_screen(), Screen::Main(_)));
    assert_eq!(app.state().session.username(), "alice");
}

#[test]
fn test_profile_shows_guest_before_login() {
    let app = TestApp::new();
    assert_eq!(app.state().session.display_name(), "Guest");
}

#[test]
fn test_main_tab_navigation() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "pw");
    app.send_data_event(DataEvent::LoginSucceeded {
        username: "alice".to_string(),
        full_name: "Alice Anderson".to_string(),
    });

    app.send_key(Key::Tab);
    {
        let Screen::Main(main_state) = app.state().current_screen() else {
            panic!("expected main screen");
        };
        assert_eq!(main_state.active_tab, MainTab::Explore);
    }

    app.send_key(Key::Char('3'));
    {
        let Screen::Main(main_state) = app.state().current_screen() else {
            panic!("expected main screen");
        };
        assert_eq!(main_state.active_tab, MainTab::Profile);
    }

    app.send_key(Key::Char('h'));
    let Screen::Main(main_state) = app.state().current_screen() else {
        panic!("expected main screen");
    };
    assert_eq!(main_state.active_tab, MainTab::Explore);
}

#[test]
fn test_no_logout_path() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "pw");
    app.send_data_event(DataEvent::LoginSucceeded {
        username: "alice".to_string(),
        full_name: "Alice Anderson".to_string(),
    });

    // Esc and Backspace do not leave Main or clear the session
    app.send_key(Key::Esc);
    app.send_key(Key::Backspace);
    assert!(matches!(app.state().current_screen(), Screen::Main(_)));
    assert!(app.state().session.is_authenticated());
}

#[test]
fn test_help_toggle_on_main() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "pw");
    app.send_data_event(DataEvent::LoginSucceeded {
        username: "alice".to_string(),
        full_name: "Alice A.".to_string(),
    });

    assert!(!app.state().help_visible);
    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // While help is open, tab keys are swallowed
    app.send_key(Key::Tab);
    {
        let Screen::Main(main_state) = app.state().current_screen() else {
            panic!("expected main screen");
        };
        assert_eq!(main_state.active_tab, MainTab::Home);
    }

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_quit_from_main_and_ctrl_c_from_forms() {
    let mut app = TestApp::new();
    app.assert_not_quit();

    // 'q' types into the form instead of quitting
    app.send_key(Key::Char('q'));
    app.assert_not_quit();

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));
    app.assert_should_quit();

    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "pw");
    app.send_data_event(DataEvent::LoginSucceeded {
        username: "alice".to_string(),
        full_name: "Alice A.".to_string(),
    });
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_new_submit_clears_previous_alert() {
    let mut app = TestApp::new();
    go_to_login(&mut app);
    submit_login(&mut app, "alice", "wrong");
    app.send_data_event(DataEvent::LoginFailed {
        error: "invalid credentials".to_string(),
    });

    // Dismiss, fix the password, resubmit
    app.send_key(Key::Esc);
    app.send_key(Key::Backspace);
    app.send_key(Key::Backspace);
    app.send_key(Key::Backspace);
    app.send_key(Key::Backspace);
    app.send_key(Key::Backspace);
    app.type_str("right");
    app.send_key(Key::Enter);

    let Screen::Login(login_state) = app.state().current_screen() else {
        panic!("expected login screen");
    };
    assert!(login_state.alert.is_none());
    assert!(matches!(login_state.submit_loading, LoadingState::Loading(_)));
    assert_eq!(login_state.password, "right");
}
