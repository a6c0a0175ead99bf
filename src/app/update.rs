// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Screen components report side effects as [`Effect`]s; this module turns
//! them into Iced tasks talking to the injected services.

use super::Message;
use crate::application::port::{AuthorizationStatus, LocationProvider, RoutingService};
use crate::domain::RouteRequest;
use crate::ui::map_screen::{self, Effect};
use iced::task;
use iced::Task;
use futures_util::StreamExt;
use std::sync::Arc;

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub map: &'a mut map_screen::State,
    pub routing: &'a Arc<dyn RoutingService>,
    pub route_task: &'a mut Option<task::Handle>,
}

pub fn handle_map_message(ctx: &mut UpdateContext<'_>, message: map_screen::Message) -> Task<Message> {
    let (effect, task) = ctx.map.handle_message(message);
    let task = task.map(Message::Map);

    let task = match effect {
        Effect::None => task,
        Effect::RequestRoute(request) => Task::batch([task, dispatch_route(ctx, request)]),
    };

    // Nothing left to wait for: the route finished or a newer press was dropped.
    if ctx.map.latest_request().is_none() {
        if let Some(handle) = ctx.route_task.take() {
            handle.abort();
        }
    }
    task
}

/// Starts computing `request`, aborting whatever route was still in flight.
fn dispatch_route(ctx: &mut UpdateContext<'_>, request: RouteRequest) -> Task<Message> {
    log::info!(
        "Requesting {} route {:?} -> {:?}",
        request.mode,
        request.origin,
        request.destination
    );

    let id = request.id;
    let future = ctx.routing.calculate(request);
    let (task, handle) = Task::perform(future, move |result| {
        Message::Map(map_screen::Message::RouteFinished { id, result })
    })
    .abortable();

    if let Some(previous) = ctx.route_task.replace(handle) {
        previous.abort();
    }
    task
}

/// Requests authorization if needed and subscribes to location updates.
///
/// Returns no task when access is denied or restricted.
pub fn start_location_updates(provider: &Arc<dyn LocationProvider>) -> Task<Message> {
    if provider.authorization_status() == AuthorizationStatus::NotDetermined {
        provider.request_authorization();
    }

    match provider.authorization_status() {
        AuthorizationStatus::Denied | AuthorizationStatus::Restricted => {
            log::info!("Location access denied; the map will not track the user");
            Task::none()
        }
        _ => {
            let updates = provider
                .updates()
                .map(|batch| Message::Map(map_screen::Message::LocationUpdated(batch)));
            Task::stream(updates)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::MapConfig;
    use crate::app::i18n::fluent::I18n;
    use crate::application::port::{LocationStream, RouteFuture};
    use crate::domain::{Coordinate, LocationFix};
    use crate::error::RoutingError;
    use crate::ui::map_screen::CanvasMessage;
    use futures_util::stream;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingRouter {
        requests: Mutex<Vec<RouteRequest>>,
    }

    impl RoutingService for CountingRouter {
        fn calculate(&self, request: RouteRequest) -> RouteFuture {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request);
            }
            Box::pin(async { Err(RoutingError::NoRoute) })
        }
    }

    struct StubLocation {
        status: Mutex<AuthorizationStatus>,
        grant_on_request: AuthorizationStatus,
        requests: AtomicUsize,
        subscriptions: AtomicUsize,
    }

    impl StubLocation {
        fn new(status: AuthorizationStatus, grant_on_request: AuthorizationStatus) -> Self {
            Self {
                status: Mutex::new(status),
                grant_on_request,
                requests: AtomicUsize::new(0),
                subscriptions: AtomicUsize::new(0),
            }
        }
    }

    impl LocationProvider for StubLocation {
        fn authorization_status(&self) -> AuthorizationStatus {
            *self.status.lock().expect("status lock")
        }

        fn request_authorization(&self) {
            self.requests.fetch_add(1, Ordering::SeqCst);
            *self.status.lock().expect("status lock") = self.grant_on_request;
        }

        fn updates(&self) -> LocationStream {
            self.subscriptions.fetch_add(1, Ordering::SeqCst);
            stream::pending().boxed()
        }
    }

    fn calls(router: &CountingRouter) -> Vec<RouteRequest> {
        router.requests.lock().expect("requests lock").clone()
    }

    #[test]
    fn track_dispatches_exactly_one_call_to_the_router() {
        let router = Arc::new(CountingRouter::default());
        let routing: Arc<dyn RoutingService> = router.clone();
        let mut map = map_screen::State::new(&MapConfig::default(), &I18n::default());
        let mut route_task = None;
        let mut ctx = UpdateContext {
            map: &mut map,
            routing: &routing,
            route_task: &mut route_task,
        };

        let here = Coordinate::new(55.75, 37.61);
        let there = Coordinate::new(55.76, 37.62);
        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::LocationUpdated(vec![LocationFix::at(here)]),
        );
        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::Canvas(CanvasMessage::LongPress(there)),
        );
        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::Prompt(map_screen::prompt::Message::Confirm),
        );
        let pin = ctx.map.map().annotations()[0].id;
        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::Canvas(CanvasMessage::PinTapped(pin)),
        );
        let _ = handle_map_message(&mut ctx, map_screen::Message::TrackPressed);

        let requests = calls(&router);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].origin, here);
        assert_eq!(requests[0].destination, there);
        assert!(route_task.is_some());
    }

    #[test]
    fn dropped_request_never_reaches_the_router() {
        let router = Arc::new(CountingRouter::default());
        let routing: Arc<dyn RoutingService> = router.clone();
        let mut map = map_screen::State::new(&MapConfig::default(), &I18n::default());
        let mut route_task = None;
        let mut ctx = UpdateContext {
            map: &mut map,
            routing: &routing,
            route_task: &mut route_task,
        };

        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::Canvas(CanvasMessage::LongPress(Coordinate::new(1.0, 1.0))),
        );
        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::Prompt(map_screen::prompt::Message::Confirm),
        );
        let pin = ctx.map.map().annotations()[0].id;
        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::Canvas(CanvasMessage::PinTapped(pin)),
        );
        let _ = handle_map_message(&mut ctx, map_screen::Message::TrackPressed);

        assert!(calls(&router).is_empty());
        assert!(route_task.is_none());
    }

    #[test]
    fn dropped_press_releases_the_route_in_flight() {
        let router = Arc::new(CountingRouter::default());
        let routing: Arc<dyn RoutingService> = router.clone();
        let mut map = map_screen::State::new(&MapConfig::default(), &I18n::default());
        let mut route_task = None;
        let mut ctx = UpdateContext {
            map: &mut map,
            routing: &routing,
            route_task: &mut route_task,
        };

        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::LocationUpdated(vec![LocationFix::at(Coordinate::new(0.0, 0.0))]),
        );
        for at in [Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)] {
            let _ = handle_map_message(
                &mut ctx,
                map_screen::Message::Canvas(CanvasMessage::LongPress(at)),
            );
            let _ = handle_map_message(
                &mut ctx,
                map_screen::Message::Prompt(map_screen::prompt::Message::Confirm),
            );
        }
        let first = ctx.map.map().annotations()[0].id;
        let second = ctx.map.map().annotations()[1].id;

        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::Canvas(CanvasMessage::PinTapped(first)),
        );
        let _ = handle_map_message(&mut ctx, map_screen::Message::TrackPressed);
        assert!(ctx.route_task.is_some());

        let _ = handle_map_message(
            &mut ctx,
            map_screen::Message::Canvas(CanvasMessage::PinTapped(second)),
        );
        let _ = handle_map_message(&mut ctx, map_screen::Message::RemovePinsPressed);
        let _ = handle_map_message(&mut ctx, map_screen::Message::TrackPressed);

        assert!(ctx.route_task.is_none());
        assert!(ctx.map.latest_request().is_none());
        assert_eq!(calls(&router).len(), 1);
    }

    #[test]
    fn undetermined_authorization_is_requested_once() {
        let stub = Arc::new(StubLocation::new(
            AuthorizationStatus::NotDetermined,
            AuthorizationStatus::AuthorizedWhenInUse,
        ));
        let provider: Arc<dyn LocationProvider> = stub.clone();

        let _ = start_location_updates(&provider);

        assert_eq!(stub.requests.load(Ordering::SeqCst), 1);
        assert_eq!(stub.subscriptions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn denied_provider_is_not_subscribed() {
        let stub = Arc::new(StubLocation::new(
            AuthorizationStatus::NotDetermined,
            AuthorizationStatus::Denied,
        ));
        let provider: Arc<dyn LocationProvider> = stub.clone();

        let _ = start_location_updates(&provider);

        assert_eq!(stub.requests.load(Ordering::SeqCst), 1);
        assert_eq!(stub.subscriptions.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn authorized_provider_is_not_asked_again() {
        let stub = Arc::new(StubLocation::new(
            AuthorizationStatus::AuthorizedAlways,
            AuthorizationStatus::AuthorizedAlways,
        ));
        let provider: Arc<dyn LocationProvider> = stub.clone();

        let _ = start_location_updates(&provider);

        assert_eq!(stub.requests.load(Ordering::SeqCst), 0);
        assert_eq!(stub.subscriptions.load(Ordering::SeqCst), 1);
    }
}
