// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core map types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`geo`]: Coordinates and the Web Mercator projection ([`Coordinate`](geo::Coordinate),
//!   [`MapRect`](geo::MapRect), [`Polyline`](geo::Polyline))
//! - [`map`]: Map screen types ([`Pin`](map::Pin), [`Route`](map::Route),
//!   [`TransportMode`](map::TransportMode), [`MapStyle`](map::MapStyle))

pub mod geo;
pub mod map;

pub use geo::{Coordinate, MapPoint, MapRect, Polyline};
pub use map::{
    LocationFix, MapStyle, Pin, PinId, RequestId, Route, RouteRequest, TransportMode,
};
