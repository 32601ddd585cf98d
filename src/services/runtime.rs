//! Tokio Runtime Bridge
//!
//! GPUI uses its own executor, but reqwest and the poll timer require tokio.
//! This module owns the process-wide tokio runtime those run on.
//!
//! ## Pattern
//!
//! ```text
//! DashboardView (GPUI)
//!       │ runtime_handle()
//!       ▼
//! spawn_poller(...)  ── tokio timer + fetch tasks
//!       │
//!       ▼ FetchEvent (futures channel)
//! GPUI task applies it to DashboardState
//! ```

use std::sync::OnceLock;
use tokio::runtime::{Builder, Handle, Runtime};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("miso-dash-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Get a handle to the tokio runtime
pub fn runtime_handle() -> Handle {
    get_runtime().handle().clone()
}
