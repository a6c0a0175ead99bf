// SPDX-License-Identifier: MPL-2.0
//! Map screen domain types: pins, routes, transport modes and map styles.

use super::geo::{Coordinate, MapRect, Polyline};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Pins
// =============================================================================

/// Identifier of a pin inside one map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(u64);

impl PinId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A labeled point marker dropped by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: PinId,
    pub coordinate: Coordinate,
    /// User-entered title, possibly empty.
    pub title: String,
}

// =============================================================================
// Location fixes
// =============================================================================

/// One reading from the location provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub coordinate: Coordinate,
    /// Direction of travel in degrees clockwise from north, when known.
    pub heading: Option<f64>,
}

impl LocationFix {
    #[must_use]
    pub const fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            heading: None,
        }
    }

    #[must_use]
    pub const fn with_heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }
}

// =============================================================================
// Transport mode / map style
// =============================================================================

/// Routing profile used for the next route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    #[default]
    Automobile,
    Walking,
}

impl TransportMode {
    pub const ALL: [TransportMode; 2] = [TransportMode::Automobile, TransportMode::Walking];
}

/// Base map appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapStyle {
    #[default]
    Standard,
    Satellite,
}

impl MapStyle {
    pub const ALL: [MapStyle; 2] = [MapStyle::Standard, MapStyle::Satellite];
}

/// Error returned when parsing a [`TransportMode`] or [`MapStyle`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError(pub String);

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for ParseEnumError {}

impl FromStr for TransportMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "automobile" | "car" | "driving" => Ok(TransportMode::Automobile),
            "walking" | "foot" => Ok(TransportMode::Walking),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Automobile => write!(f, "automobile"),
            TransportMode::Walking => write!(f, "walking"),
        }
    }
}

impl FromStr for MapStyle {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(MapStyle::Standard),
            "satellite" => Ok(MapStyle::Satellite),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapStyle::Standard => write!(f, "standard"),
            MapStyle::Satellite => write!(f, "satellite"),
        }
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Monotonic identifier of a route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Everything the routing service needs to compute one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub id: RequestId,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: TransportMode,
}

/// One candidate route returned by the routing service.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub polyline: Polyline,
    pub bounds: MapRect,
    /// Length in meters.
    pub distance_m: f64,
    /// Expected travel time in seconds.
    pub expected_travel_time_s: f64,
}

impl Route {
    /// Builds a route, deriving its bounds from the polyline.
    ///
    /// Returns `None` for an empty polyline.
    #[must_use]
    pub fn new(polyline: Polyline, distance_m: f64, expected_travel_time_s: f64) -> Option<Self> {
        let bounds = polyline.bounding_map_rect()?;
        Some(Self {
            polyline,
            bounds,
            distance_m,
            expected_travel_time_s,
        })
    }
}
