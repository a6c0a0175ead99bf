// SPDX-License-Identifier: MPL-2.0
use crate::application::port::{AuthorizationStatus, LocationProvider, LocationStream};
use crate::domain::LocationFix;
use futures_util::stream::{self, StreamExt};
use std::sync::{Arc, Mutex, RwLock};
use tokio::sync::mpsc;

/// Host-side handle pushing fixes into a [`ChannelLocationProvider`].
#[derive(Debug, Clone)]
pub struct LocationSender {
    tx: mpsc::UnboundedSender<Vec<LocationFix>>,
    status: Arc<RwLock<AuthorizationStatus>>,
}

impl LocationSender {
    /// Delivers one batch. Returns `false` once the map side is gone.
    pub fn send(&self, batch: Vec<LocationFix>) -> bool {
        self.tx.send(batch).is_ok()
    }

    /// Reports the outcome of the host's own permission prompt.
    pub fn set_authorization(&self, status: AuthorizationStatus) {
        if let Ok(mut current) = self.status.write() {
            *current = status;
        }
    }
}

/// Provider fed by a host that owns a real location sensor.
#[derive(Debug)]
pub struct ChannelLocationProvider {
    rx: Mutex<Option<mpsc::UnboundedReceiver<Vec<LocationFix>>>>,
    status: Arc<RwLock<AuthorizationStatus>>,
}

impl ChannelLocationProvider {
    #[must_use]
    pub fn new() -> (Self, LocationSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        let status = Arc::new(RwLock::new(AuthorizationStatus::NotDetermined));
        (
            Self {
                rx: Mutex::new(Some(rx)),
                status: Arc::clone(&status),
            },
            LocationSender { tx, status },
        )
    }
}

impl LocationProvider for ChannelLocationProvider {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.status
            .read()
            .map(|status| *status)
            .unwrap_or(AuthorizationStatus::Denied)
    }

    fn request_authorization(&self) {
        log::info!("Waiting for the host to report location authorization");
    }

    fn updates(&self) -> LocationStream {
        let receiver = self.rx.lock().ok().and_then(|mut rx| rx.take());
        let Some(receiver) = receiver else {
            log::warn!("Location updates already taken; returning an idle stream");
            return stream::pending().boxed();
        };

        stream::unfold(receiver, |mut receiver| async move {
            receiver.recv().await.map(|batch| (batch, receiver))
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    #[tokio::test]
    async fn forwards_batches_until_sender_drops() {
        let (provider, sender) = ChannelLocationProvider::new();
        let fix = LocationFix::at(Coordinate::new(55.75, 37.61));
        let mut updates = provider.updates();

        assert!(sender.send(vec![fix]));
        assert_eq!(updates.next().await, Some(vec![fix]));

        drop(sender);
        assert_eq!(updates.next().await, None);
    }

    #[tokio::test]
    async fn updates_can_only_be_taken_once() {
        let (provider, sender) = ChannelLocationProvider::new();
        let _first = provider.updates();
        let mut second = provider.updates();
        sender.send(Vec::new());
        let next =
            tokio::time::timeout(std::time::Duration::from_millis(20), second.next()).await;
        assert!(next.is_err());
    }

    #[test]
    fn host_reports_authorization() {
        let (provider, sender) = ChannelLocationProvider::new();
        assert_eq!(
            provider.authorization_status(),
            AuthorizationStatus::NotDetermined
        );
        sender.set_authorization(AuthorizationStatus::Denied);
        assert_eq!(provider.authorization_status(), AuthorizationStatus::Denied);
    }
}
