// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the map screen remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`location`]: Authorization and the stream of location fixes
//! - [`routing`]: Route computation between two coordinates
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Asynchronous results are returned as boxed futures/streams that callers
//!   wrap in Iced's `Task`

pub mod location;
pub mod routing;

pub use location::{AuthorizationStatus, LocationProvider, LocationStream};
pub use routing::{RouteFuture, RoutingService};
