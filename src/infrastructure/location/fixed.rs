// SPDX-License-Identifier: MPL-2.0
use super::Grant;
use crate::application::port::{AuthorizationStatus, LocationProvider, LocationStream};
use crate::domain::LocationFix;
use futures_util::stream::{self, StreamExt};

/// Reports one fix, then stays silent.
#[derive(Debug)]
pub struct FixedLocationProvider {
    fix: LocationFix,
    grant: Grant,
}

impl FixedLocationProvider {
    #[must_use]
    pub fn new(fix: LocationFix) -> Self {
        Self {
            fix,
            grant: Grant::default(),
        }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.grant.status()
    }

    fn request_authorization(&self) {
        self.grant.request();
    }

    fn updates(&self) -> LocationStream {
        if !self.authorization_status().is_authorized() {
            return stream::pending().boxed();
        }
        stream::once(futures_util::future::ready(vec![self.fix]))
            .chain(stream::pending())
            .boxed()
    }
}

/// Provider used when location is turned off in the settings.
#[derive(Debug, Default)]
pub struct DisabledLocationProvider;

impl LocationProvider for DisabledLocationProvider {
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Denied
    }

    fn request_authorization(&self) {
        log::debug!("Location is disabled; authorization request ignored");
    }

    fn updates(&self) -> LocationStream {
        stream::pending().boxed()
    }
}
