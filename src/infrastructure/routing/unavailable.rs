// SPDX-License-Identifier: MPL-2.0
//! Stand-in used when the configured routing backend could not be built.

use crate::application::port::{RouteFuture, RoutingService};
use crate::domain::RouteRequest;
use crate::error::RoutingError;

/// Fails every request with the error that prevented the real service from
/// starting, so the map keeps working without routes.
#[derive(Debug, Clone)]
pub struct UnavailableRoutingService {
    reason: RoutingError,
}

impl UnavailableRoutingService {
    pub fn new(reason: RoutingError) -> Self {
        Self { reason }
    }
}

impl RoutingService for UnavailableRoutingService {
    fn calculate(&self, _request: RouteRequest) -> RouteFuture {
        let reason = self.reason.clone();
        Box::pin(async move { Err(reason) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, RequestId, TransportMode};

    #[tokio::test]
    async fn every_request_fails_with_the_stored_reason() {
        let service = UnavailableRoutingService::new(RoutingError::Http("no TLS backend".into()));
        let request = RouteRequest {
            id: RequestId::new(1),
            origin: Coordinate::new(0.0, 0.0),
            destination: Coordinate::new(1.0, 1.0),
            mode: TransportMode::Walking,
        };

        let result = service.calculate(request).await;

        assert_eq!(result, Err(RoutingError::Http("no TLS backend".into())));
    }
}
