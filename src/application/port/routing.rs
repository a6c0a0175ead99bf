// SPDX-License-Identifier: MPL-2.0
//! Routing service port definition.

use crate::domain::{Route, RouteRequest};
use crate::error::RoutingError;
use futures_util::future::BoxFuture;

/// Future resolved by [`RoutingService::calculate`].
pub type RouteFuture = BoxFuture<'static, Result<Vec<Route>, RoutingError>>;

/// Port for route computation.
///
/// Given an origin, a destination and a transport mode, an implementation
/// resolves to one or more candidate routes (best first) or an error. Callers
/// use the first candidate; an empty list is treated like
/// [`RoutingError::NoRoute`].
///
/// Implementations must not rely on the future being polled to completion:
/// the app aborts in-flight calls when a newer request supersedes them.
///
/// # Example
///
/// ```ignore
/// use pinroute::application::port::RoutingService;
///
/// async fn best_route(service: &dyn RoutingService, request: RouteRequest) -> Option<Route> {
///     service.calculate(request).await.ok()?.into_iter().next()
/// }
/// ```
pub trait RoutingService: Send + Sync {
    /// Starts computing routes for `request`.
    fn calculate(&self, request: RouteRequest) -> RouteFuture;
}
