//! State Management Layer
//!
//! Configuration and the dashboard view-model. Data flows one way:
//!
//! ```text
//! PollHandle tick → FetchEvent → DashboardState::apply → cx.notify → DashboardView render
//! ```

mod config;
mod dashboard;

pub use config::*;
pub use dashboard::*;
