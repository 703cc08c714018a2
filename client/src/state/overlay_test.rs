use super::*;

const ALL_STATES: [OverlayState; 3] = [OverlayState::Closed, OverlayState::Login, OverlayState::Register];

// =============================================================
// Overlay transitions
// =============================================================

#[test]
fn overlay_default_is_closed() {
    let state = OverlayState::default();
    assert_eq!(state, OverlayState::Closed);
    assert!(!state.is_login_open());
    assert!(!state.is_register_open());
}

#[test]
fn open_login_from_closed() {
    let mut state = OverlayState::Closed;
    state.open_login();
    assert!(state.is_login_open());
    assert!(!state.is_register_open());
}

#[test]
fn switch_to_register_closes_login() {
    let mut state = OverlayState::Login;
    state.switch_to_register();
    assert_eq!(state, OverlayState::Register);
    assert!(!state.is_login_open());
}

#[test]
fn switch_to_login_closes_register() {
    let mut state = OverlayState::Register;
    state.switch_to_login();
    assert_eq!(state, OverlayState::Login);
    assert!(!state.is_register_open());
}

#[test]
fn switching_back_and_forth_never_opens_both() {
    let mut state = OverlayState::Login;
    for _ in 0..3 {
        state.switch_to_register();
        assert!(!(state.is_login_open() && state.is_register_open()));
        state.switch_to_login();
        assert!(!(state.is_login_open() && state.is_register_open()));
    }
    assert_eq!(state, OverlayState::Login);
}

#[test]
fn close_from_any_state_is_closed() {
    for start in ALL_STATES {
        let mut state = start;
        state.close();
        assert_eq!(state, OverlayState::Closed, "close from {start:?}");
    }
}

// =============================================================
// Blog gate
// =============================================================

#[test]
fn blog_action_when_authenticated_navigates_to_posts() {
    assert_eq!(blog_action(true), BlogAction::Navigate("/posts"));
}

#[test]
fn blog_action_when_anonymous_prompts_login() {
    assert_eq!(blog_action(false), BlogAction::PromptLogin);
}

#[test]
fn apply_navigate_leaves_overlay_closed() {
    let mut overlay = OverlayState::Closed;
    let route = apply_blog_action(blog_action(true), &mut overlay);
    assert_eq!(route, Some(POSTS_ROUTE));
    assert_eq!(overlay, OverlayState::Closed);
}

#[test]
fn apply_prompt_opens_login_without_route() {
    let mut overlay = OverlayState::Closed;
    let route = apply_blog_action(blog_action(false), &mut overlay);
    assert_eq!(route, None);
    assert_eq!(overlay, OverlayState::Login);
}
