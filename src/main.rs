//! MISO Dash - Main Entry Point
//!
//! Desktop dashboard for MISO real-time node pricing

use miso_dash::app::application::run_app;
use miso_dash::helpers::init_logging;
use miso_dash::states::DashConfig;

fn main() {
    let guard = init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting MISO Dash...");

    let config = DashConfig::load_or_default();

    if let Err(e) = run_app(config) {
        tracing::error!(error = %e, "MISO Dash failed to start");
        drop(guard);
        std::process::exit(1);
    }
}
