// SPDX-License-Identifier: MPL-2.0
//! Location provider port definition.
//!
//! A [`LocationProvider`] answers three questions for the map screen: may we
//! read the user's position, please ask for permission, and where is the user
//! now (as a stream of batches). Batches mirror platform location APIs, which
//! may deliver several buffered readings at once; the screen keeps the first.

use crate::domain::LocationFix;
use futures_util::stream::BoxStream;

/// Stream of location batches delivered by a provider.
pub type LocationStream = BoxStream<'static, Vec<LocationFix>>;

/// Whether the app may read the user's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    /// Access is blocked by policy (parental controls, MDM, ...).
    Restricted,
    /// The user refused access.
    Denied,
    /// Access granted while the app is in use.
    AuthorizedWhenInUse,
    /// Access granted at all times.
    AuthorizedAlways,
}

impl AuthorizationStatus {
    /// Returns `true` if location updates are expected to arrive.
    #[must_use]
    pub fn is_authorized(self) -> bool {
        matches!(
            self,
            AuthorizationStatus::AuthorizedWhenInUse | AuthorizationStatus::AuthorizedAlways
        )
    }
}

/// Port for the device location service.
///
/// # Contract
///
/// - [`authorization_status`](Self::authorization_status) is read once at startup.
/// - [`request_authorization`](Self::request_authorization) is only called when the
///   status is [`AuthorizationStatus::NotDetermined`].
/// - [`updates`](Self::updates) is called once; a provider without permission
///   returns a stream that never yields.
pub trait LocationProvider: Send + Sync {
    /// Current authorization status.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Asks the user for "when in use" access.
    fn request_authorization(&self);

    /// Starts continuous location updates.
    fn updates(&self) -> LocationStream;
}
