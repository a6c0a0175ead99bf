// SPDX-License-Identifier: MPL-2.0
//! OSRM HTTP routing adapter.
//!
//! Speaks the `route/v1` endpoint of an OSRM-compatible server and asks for
//! full GeoJSON geometries with alternatives, best candidate first.

use crate::application::port::{RouteFuture, RoutingService};
use crate::domain::{Coordinate, Polyline, Route, RouteRequest, TransportMode};
use crate::error::RoutingError;
use serde::Deserialize;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("PinRoute/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    geometry: Geometry,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[longitude, latitude]` pairs.
    coordinates: Vec<[f64; 2]>,
}

/// Routing service backed by an OSRM server.
#[derive(Debug, Clone)]
pub struct OsrmRoutingService {
    client: reqwest::Client,
    endpoint: String,
}

impl OsrmRoutingService {
    /// Creates a service talking to `endpoint` (e.g. `https://router.project-osrm.org`).
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RoutingError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RoutingService for OsrmRoutingService {
    fn calculate(&self, request: RouteRequest) -> RouteFuture {
        let client = self.client.clone();
        let url = route_url(&self.endpoint, &request);

        Box::pin(async move {
            log::debug!("Requesting route {}", url);
            let response = client.get(&url).send().await?;

            // OSRM answers 400 with a JSON body for NoRoute/NoSegment, so only
            // bail out early on statuses that carry no such body.
            let status = response.status();
            if status.is_server_error() {
                return Err(RoutingError::Http(format!("HTTP status: {}", status)));
            }

            let body = response.text().await?;
            parse_response(&body)
        })
    }
}

/// OSRM profile name for a transport mode.
#[must_use]
pub fn profile(mode: TransportMode) -> &'static str {
    match mode {
        TransportMode::Automobile => "driving",
        TransportMode::Walking => "foot",
    }
}

/// Full request URL for `request` against `endpoint`.
#[must_use]
pub fn route_url(endpoint: &str, request: &RouteRequest) -> String {
    format!(
        "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson&alternatives=true",
        endpoint.trim_end_matches('/'),
        profile(request.mode),
        request.origin.longitude,
        request.origin.latitude,
        request.destination.longitude,
        request.destination.latitude,
    )
}

/// Parses an OSRM `route` response body into candidate routes, best first.
pub fn parse_response(body: &str) -> Result<Vec<Route>, RoutingError> {
    let response: RouteResponse = serde_json::from_str(body)?;

    if response.code != "Ok" {
        return Err(RoutingError::from_provider_code(
            &response.code,
            response.message.as_deref(),
        ));
    }

    let routes: Vec<Route> = response
        .routes
        .into_iter()
        .filter_map(|entry| {
            let polyline: Polyline = entry
                .geometry
                .coordinates
                .into_iter()
                .map(|[longitude, latitude]| Coordinate::new(latitude, longitude))
                .collect();
            Route::new(polyline, entry.distance, entry.duration)
        })
        .collect();

    if routes.is_empty() {
        return Err(RoutingError::NoRoute);
    }
    Ok(routes)
}
