// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for defaults used across the application.

// ==========================================================================
// Portal Defaults
// ==========================================================================

/// Default portal base URL when neither a CLI flag nor the config file
/// provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// How often the quick-stat counters refresh, in seconds.
pub const STATS_REFRESH_SECS: u64 = 120;

// ==========================================================================
// Request Form Defaults
// ==========================================================================

/// Minimum units a blood request may ask for.
pub const MIN_REQUEST_UNITS: u32 = 1;

/// Maximum units a blood request may ask for.
pub const MAX_REQUEST_UNITS: u32 = 99;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_UNITS > 0);
    assert!(MAX_REQUEST_UNITS > MIN_REQUEST_UNITS);

    assert!(STATS_REFRESH_SECS > 0);

    assert!(DEFAULT_WINDOW_WIDTH > 0.0);
    assert!(DEFAULT_WINDOW_HEIGHT > 0.0);

    // The default URL must not end with a slash; request paths supply it.
    let url = DEFAULT_BASE_URL.as_bytes();
    assert!(url[url.len() - 1] != b'/');
};
