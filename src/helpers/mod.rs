//! Helper Utilities
//!
//! Common utilities used across the application.

#[cfg(feature = "gui")]
mod action;
mod format;
mod fs;
mod logging;

#[cfg(feature = "gui")]
pub use action::*;
pub use format::*;
pub use fs::*;
pub use logging::*;
