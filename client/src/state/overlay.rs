//! Login/register overlay state machine and the blog navigation gate.
//!
//! DESIGN
//! ======
//! The two overlays are mutually exclusive, so they are one enum instead of
//! two booleans. Every transition is a single assignment, which means no
//! observer can see both overlays open or a half-finished switch.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// Route of the blog listing.
pub const POSTS_ROUTE: &str = "/posts";

/// Which overlay, if any, is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Login,
    Register,
}

impl OverlayState {
    pub fn is_login_open(self) -> bool {
        self == Self::Login
    }

    pub fn is_register_open(self) -> bool {
        self == Self::Register
    }

    pub fn open_login(&mut self) {
        *self = Self::Login;
    }

    /// Login form's "create an account" link.
    pub fn switch_to_register(&mut self) {
        *self = Self::Register;
    }

    /// Register form's "already have an account" link.
    pub fn switch_to_login(&mut self) {
        *self = Self::Login;
    }

    /// Close handler shared by both overlays.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// What the "go to blog" action should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlogAction {
    /// Navigate to the given route; no overlay changes.
    Navigate(&'static str),
    /// Open the login overlay; no navigation.
    PromptLogin,
}

pub fn blog_action(authenticated: bool) -> BlogAction {
    if authenticated {
        BlogAction::Navigate(POSTS_ROUTE)
    } else {
        BlogAction::PromptLogin
    }
}

/// Apply a blog action to the overlay state, returning the route to
/// navigate to, if any.
pub fn apply_blog_action(action: BlogAction, overlay: &mut OverlayState) -> Option<&'static str> {
    match action {
        BlogAction::Navigate(route) => Some(route),
        BlogAction::PromptLogin => {
            overlay.open_login();
            None
        }
    }
}
