// SPDX-License-Identifier: MPL-2.0
use super::Grant;
use crate::application::port::{AuthorizationStatus, LocationProvider, LocationStream};
use crate::domain::{Coordinate, LocationFix};
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;

/// Replays a recorded track in a loop, one fix per interval.
///
/// Each fix carries the bearing towards the next point as its heading, so the
/// user-location marker points along the track.
#[derive(Debug)]
pub struct ReplayLocationProvider {
    fixes: Arc<[LocationFix]>,
    interval: Duration,
    grant: Grant,
}

impl ReplayLocationProvider {
    #[must_use]
    pub fn new(track: Vec<Coordinate>, interval: Duration) -> Self {
        Self {
            fixes: headed_fixes(&track).into(),
            interval,
            grant: Grant::default(),
        }
    }
}

impl LocationProvider for ReplayLocationProvider {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.grant.status()
    }

    fn request_authorization(&self) {
        self.grant.request();
    }

    fn updates(&self) -> LocationStream {
        if self.fixes.is_empty() || !self.authorization_status().is_authorized() {
            return stream::pending().boxed();
        }

        let fixes = Arc::clone(&self.fixes);
        let interval = self.interval;
        stream::unfold(0usize, move |index| {
            let fixes = Arc::clone(&fixes);
            async move {
                if index > 0 {
                    tokio::time::sleep(interval).await;
                }
                let fix = fixes[index % fixes.len()];
                Some((vec![fix], index + 1))
            }
        })
        .boxed()
    }
}

/// Attaches a heading to every point of `track`.
///
/// The heading is the bearing to the next point; the last point reuses the
/// previous heading. A single-point track has no heading.
fn headed_fixes(track: &[Coordinate]) -> Vec<LocationFix> {
    let mut fixes = Vec::with_capacity(track.len());
    let mut last_heading = None;
    for (index, coordinate) in track.iter().enumerate() {
        let heading = track
            .get(index + 1)
            .map(|next| coordinate.bearing_to(*next))
            .or(last_heading);
        last_heading = heading;
        fixes.push(LocationFix {
            coordinate: *coordinate,
            heading,
        });
    }
    fixes
}
