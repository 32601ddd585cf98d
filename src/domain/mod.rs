//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the market data and its
//! paginated projection.

mod chart;
mod dataset;
mod pagination;

pub use chart::*;
pub use dataset::*;
pub use pagination::*;
