//! MISO Dash Library
//!
//! A native dashboard for MISO real-time node pricing: polls the backend for
//! the latest interval, pages through the nodes and charts the visible page.
//!
//! Everything except `app`, `assets`, `theme` and `views` builds without GPUI
//! (`--no-default-features`).

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
#[cfg(feature = "gui")]
pub mod theme;
#[cfg(feature = "gui")]
pub mod views;
