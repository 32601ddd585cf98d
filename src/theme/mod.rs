//! Theme

mod colors;

pub use colors::*;
