// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! OSRM HTTP API and host location sources.
//!
//! # Available Adapters
//!
//! - [`routing`]: Route computation over HTTP (implements [`RoutingService`])
//! - [`location`]: Fixed, replayed and host-fed fixes (implement [`LocationProvider`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - The app root picks one location adapter from the `[location]` settings
//!
//! [`RoutingService`]: crate::application::port::RoutingService
//! [`LocationProvider`]: crate::application::port::LocationProvider

pub mod location;
pub mod routing;

// Re-export main types for convenience
pub use location::{
    ChannelLocationProvider, DisabledLocationProvider, FixedLocationProvider, LocationSender,
    ReplayLocationProvider,
};
pub use routing::{OsrmRoutingService, UnavailableRoutingService};
