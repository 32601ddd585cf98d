//! View Components
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Title                          Updated time  │
//! ├──────────────────────────────────────────────┤
//! │  Start Time  │  End Time  │  Node Count       │
//! ├──────────────────────────────────────────────┤
//! │  Node table (current page) + pagination       │
//! ├──────────────────────┬───────────────────────┤
//! │  LMP chart           │  MCC / MLC chart       │
//! └──────────────────────┴───────────────────────┘
//! ```

mod chart;
mod dashboard;

pub use chart::*;
pub use dashboard::*;
