//! Service Layer
//!
//! The service layer talks to the backend and owns the polling timer. It runs on
//! tokio and reports to the view through [`FetchEvent`]s.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 PollHandle                    │
//! │  ┌──────────────┐        ┌────────────────┐  │
//! │  │  tokio timer │ ─────▶ │  MisoClient    │  │
//! │  │  (interval)  │  tick  │  (DataSource)  │  │
//! │  └──────────────┘        └────────────────┘  │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼ FetchEvent
//! ┌──────────────────────────────────────────────┐
//! │           DashboardState (view-model)         │
//! └──────────────────────────────────────────────┘
//! ```

mod client;
mod poller;
mod runtime;

pub use client::*;
pub use poller::*;
pub use runtime::*;
