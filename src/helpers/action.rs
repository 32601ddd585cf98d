//! Keyboard Actions and Shortcuts
//!
//! Defines dashboard actions and their key bindings.

use gpui::{KeyBinding, actions};

/// Key context set on the dashboard root element
pub const DASHBOARD_CONTEXT: &str = "Dashboard";

actions!(miso_dash, [Quit, NextPage, PreviousPage]);

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", Quit, None),
        // Pagination
        KeyBinding::new("right", NextPage, Some(DASHBOARD_CONTEXT)),
        KeyBinding::new("left", PreviousPage, Some(DASHBOARD_CONTEXT)),
    ]
}
