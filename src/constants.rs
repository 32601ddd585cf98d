//! Dashboard Constants
//!
//! Centralized constants for polling, pagination and layout.

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Realtime data endpoint, relative to the base URL
pub const MISO_RT_DATA_PATH: &str = "api/miso-rt-data/";

/// Environment variable overriding the configured base URL
pub const API_URL_ENV: &str = "MISO_API_URL";

/// Refresh period
pub const POLL_INTERVAL_SECS: u64 = 60;

/// Per-request HTTP timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Allowed rows-per-page options
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 15];

/// Message shown when the first load fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch MISO data. Please try again later.";

/// Placeholder for absent timestamps
pub const MISSING_VALUE: &str = "--";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Chart plot area
pub const CHART_PLOT_HEIGHT: f32 = 260.0;
pub const CHART_LABEL_MAX_CHARS: usize = 14;
