// SPDX-License-Identifier: MPL-2.0
//! Routing adapters implementing the [`RoutingService`] port.
//!
//! [`RoutingService`]: crate::application::port::RoutingService

mod osrm;
mod unavailable;

pub use osrm::{parse_response, profile, route_url, OsrmRoutingService};
pub use unavailable::UnavailableRoutingService;
