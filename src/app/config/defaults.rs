// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Map**: Initial viewport and gesture timing
//! - **Routing**: Routing service endpoint
//! - **Location**: Simulated location sources

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Latitude of the initial map center (Moscow, Red Square).
pub const DEFAULT_CENTER_LATITUDE: f64 = 55.7539;

/// Longitude of the initial map center.
pub const DEFAULT_CENTER_LONGITUDE: f64 = 37.6208;

/// Default visible span around the initial center, in degrees of longitude.
pub const DEFAULT_SPAN_DEGREES: f64 = 0.05;

/// Smallest span the map may zoom in to.
pub const MIN_SPAN_DEGREES: f64 = 0.000_5;

/// Largest span (the whole world).
pub const MAX_SPAN_DEGREES: f64 = 360.0;

/// Hold duration after which a press becomes a long-press.
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;

/// Minimum long-press duration.
pub const MIN_LONG_PRESS_MS: u64 = 100;

/// Maximum long-press duration.
pub const MAX_LONG_PRESS_MS: u64 = 5_000;

/// Pointer travel (in logical pixels) below which a press still counts as a
/// tap or long-press rather than a drag.
pub const PRESS_MOVE_TOLERANCE_PX: f32 = 6.0;

/// Zoom factor applied per wheel line.
pub const WHEEL_ZOOM_FACTOR: f64 = 1.25;

/// Fraction of the route bounds added as padding when fitting the viewport.
pub const ROUTE_FIT_PADDING: f64 = 0.15;

// ==========================================================================
// Routing Defaults
// ==========================================================================

/// Public OSRM demo server.
pub const DEFAULT_ROUTING_ENDPOINT: &str = "https://router.project-osrm.org";

// ==========================================================================
// Location Defaults
// ==========================================================================

/// Default delay between two replayed fixes.
pub const DEFAULT_REPLAY_INTERVAL_MS: u64 = 1_000;

/// Minimum delay between two replayed fixes.
pub const MIN_REPLAY_INTERVAL_MS: u64 = 50;

/// Maximum delay between two replayed fixes.
pub const MAX_REPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Map validation
    assert!(DEFAULT_CENTER_LATITUDE >= -90.0 && DEFAULT_CENTER_LATITUDE <= 90.0);
    assert!(DEFAULT_CENTER_LONGITUDE >= -180.0 && DEFAULT_CENTER_LONGITUDE <= 180.0);
    assert!(MIN_SPAN_DEGREES > 0.0);
    assert!(MAX_SPAN_DEGREES > MIN_SPAN_DEGREES);
    assert!(DEFAULT_SPAN_DEGREES >= MIN_SPAN_DEGREES);
    assert!(DEFAULT_SPAN_DEGREES <= MAX_SPAN_DEGREES);
    assert!(PRESS_MOVE_TOLERANCE_PX > 0.0);
    assert!(WHEEL_ZOOM_FACTOR > 1.0);
    assert!(ROUTE_FIT_PADDING >= 0.0 && ROUTE_FIT_PADDING < 1.0);

    // Long-press validation
    assert!(MIN_LONG_PRESS_MS > 0);
    assert!(MAX_LONG_PRESS_MS >= MIN_LONG_PRESS_MS);
    assert!(DEFAULT_LONG_PRESS_MS >= MIN_LONG_PRESS_MS);
    assert!(DEFAULT_LONG_PRESS_MS <= MAX_LONG_PRESS_MS);

    // Replay validation
    assert!(MIN_REPLAY_INTERVAL_MS > 0);
    assert!(MAX_REPLAY_INTERVAL_MS >= MIN_REPLAY_INTERVAL_MS);
    assert!(DEFAULT_REPLAY_INTERVAL_MS >= MIN_REPLAY_INTERVAL_MS);
    assert!(DEFAULT_REPLAY_INTERVAL_MS <= MAX_REPLAY_INTERVAL_MS);

    assert!(!DEFAULT_ROUTING_ENDPOINT.is_empty());
};
