// SPDX-License-Identifier: MPL-2.0
//! Location adapters implementing the [`LocationProvider`] port.
//!
//! - [`FixedLocationProvider`]: a single fix, for desktops without a sensor
//! - [`ReplayLocationProvider`]: loops over a recorded track at a fixed pace
//! - [`ChannelLocationProvider`]: fed by the host through a [`LocationSender`]
//! - [`DisabledLocationProvider`]: always denied, never yields
//!
//! [`LocationProvider`]: crate::application::port::LocationProvider

mod channel;
mod fixed;
mod replay;

pub use channel::{ChannelLocationProvider, LocationSender};
pub use fixed::{DisabledLocationProvider, FixedLocationProvider};
pub use replay::ReplayLocationProvider;

use crate::application::port::AuthorizationStatus;
use std::sync::atomic::{AtomicBool, Ordering};

/// Simulated permission prompt: undetermined until requested, then granted.
#[derive(Debug, Default)]
struct Grant(AtomicBool);

impl Grant {
    fn status(&self) -> AuthorizationStatus {
        if self.0.load(Ordering::Acquire) {
            AuthorizationStatus::AuthorizedWhenInUse
        } else {
            AuthorizationStatus::NotDetermined
        }
    }

    fn request(&self) {
        if !self.0.swap(true, Ordering::AcqRel) {
            log::info!("Location access granted (when in use)");
        }
    }
}
