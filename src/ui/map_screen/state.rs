// SPDX-License-Identifier: MPL-2.0
//! Route flow state machine of the map screen.
//!
//! Only route-relevant state lives here: which pin is selected and whether a
//! route is pending or shown. Pins, overlays and toggles live in the map view
//! model and are mutated by the screen directly.

use crate::domain::{PinId, RequestId, RouteRequest};

/// Where the screen is in the select-pin / build-route flow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScreenState {
    /// Nothing selected; the track button is hidden.
    #[default]
    Idle,
    /// A pin is selected; the track button is visible.
    PinSelected { pin: PinId },
    /// A route request is in flight.
    RoutePending { request: RouteRequest },
    /// The last route is drawn; the track button is hidden.
    RouteDisplayed,
}

/// Inputs that may move the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Long-press on the map (prompt opens, state unchanged).
    LongPress,
    /// Short tap on empty map.
    TapEmpty,
    /// A pin was tapped.
    SelectPin(PinId),
    /// A pin was removed individually.
    PinRemoved(PinId),
    /// Remove-pins button.
    PinsCleared,
    /// Track button; `None` when the request had to be dropped.
    Track(Option<RouteRequest>),
    /// The routing service answered with a route.
    RouteSucceeded(RequestId),
    /// The routing service failed or found nothing.
    RouteFailed(RequestId),
    /// Transport or style toggle changed.
    ToggleChanged,
    /// New location fix.
    LocationUpdated,
}

impl ScreenState {
    /// Applies `event` and returns the next state.
    #[must_use]
    pub fn transition(self, event: Transition) -> Self {
        match (self, event) {
            (_, Transition::TapEmpty) => ScreenState::Idle,
            (_, Transition::SelectPin(pin)) => ScreenState::PinSelected { pin },
            (ScreenState::PinSelected { pin }, Transition::PinRemoved(removed)) if pin == removed => {
                ScreenState::Idle
            }
            (ScreenState::PinSelected { .. }, Transition::Track(Some(request))) => {
                ScreenState::RoutePending { request }
            }
            (ScreenState::PinSelected { .. }, Transition::Track(None)) => ScreenState::Idle,
            (ScreenState::RoutePending { request }, Transition::RouteSucceeded(id))
                if request.id == id =>
            {
                ScreenState::RouteDisplayed
            }
            (ScreenState::RoutePending { request }, Transition::RouteFailed(id))
                if request.id == id =>
            {
                ScreenState::Idle
            }
            (
                state,
                Transition::LongPress
                | Transition::PinRemoved(_)
                | Transition::PinsCleared
                | Transition::Track(_)
                | Transition::RouteSucceeded(_)
                | Transition::RouteFailed(_)
                | Transition::ToggleChanged
                | Transition::LocationUpdated,
            ) => state,
        }
    }

    /// Whether the track button should be shown.
    #[must_use]
    pub fn shows_track_button(&self) -> bool {
        matches!(self, ScreenState::PinSelected { .. })
    }

    /// Selected pin, if any.
    #[must_use]
    pub fn selected_pin(&self) -> Option<PinId> {
        match self {
            ScreenState::PinSelected { pin } => Some(*pin),
            _ => None,
        }
    }

    /// Request currently in flight, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<&RouteRequest> {
        match self {
            ScreenState::RoutePending { request } => Some(request),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, TransportMode};

    fn request(id: u64) -> RouteRequest {
        RouteRequest {
            id: RequestId::new(id),
            origin: Coordinate::new(55.75, 37.61),
            destination: Coordinate::new(55.76, 37.62),
            mode: TransportMode::Walking,
        }
    }

    const PIN: PinId = PinId::new(1);

    #[test]
    fn tap_empty_always_goes_idle() {
        for state in [
            ScreenState::Idle,
            ScreenState::PinSelected { pin: PIN },
            ScreenState::RoutePending {
                request: request(1),
            },
            ScreenState::RouteDisplayed,
        ] {
            assert_eq!(state.transition(Transition::TapEmpty), ScreenState::Idle);
        }
    }

    #[test]
    fn selecting_shows_track_button() {
        let state = ScreenState::Idle.transition(Transition::SelectPin(PIN));
        assert_eq!(state, ScreenState::PinSelected { pin: PIN });
        assert!(state.shows_track_button());
        assert_eq!(state.selected_pin(), Some(PIN));
    }

    #[test]
    fn track_with_request_goes_pending() {
        let state = ScreenState::PinSelected { pin: PIN }
            .transition(Transition::Track(Some(request(1))));
        assert_eq!(state.pending_request(), Some(&request(1)));
        assert!(!state.shows_track_button());
    }

    #[test]
    fn dropped_track_goes_idle() {
        let state = ScreenState::PinSelected { pin: PIN }.transition(Transition::Track(None));
        assert_eq!(state, ScreenState::Idle);
    }

    #[test]
    fn track_is_ignored_outside_pin_selected() {
        assert_eq!(
            ScreenState::Idle.transition(Transition::Track(Some(request(1)))),
            ScreenState::Idle
        );
        assert_eq!(
            ScreenState::RouteDisplayed.transition(Transition::Track(None)),
            ScreenState::RouteDisplayed
        );
    }

    #[test]
    fn completion_of_latest_request_is_applied() {
        let pending = ScreenState::RoutePending {
            request: request(2),
        };
        assert_eq!(
            pending.transition(Transition::RouteSucceeded(RequestId::new(2))),
            ScreenState::RouteDisplayed
        );
        assert_eq!(
            pending.transition(Transition::RouteFailed(RequestId::new(2))),
            ScreenState::Idle
        );
    }

    #[test]
    fn stale_completion_is_ignored() {
        let pending = ScreenState::RoutePending {
            request: request(2),
        };
        assert_eq!(
            pending.transition(Transition::RouteSucceeded(RequestId::new(1))),
            pending
        );
        assert_eq!(
            pending.transition(Transition::RouteFailed(RequestId::new(1))),
            pending
        );
    }

    #[test]
    fn removing_selected_pin_goes_idle() {
        let selected = ScreenState::PinSelected { pin: PIN };
        assert_eq!(
            selected.transition(Transition::PinRemoved(PIN)),
            ScreenState::Idle
        );
        assert_eq!(
            selected.transition(Transition::PinRemoved(PinId::new(9))),
            selected
        );
    }

    #[test]
    fn neutral_events_keep_state() {
        let selected = ScreenState::PinSelected { pin: PIN };
        for event in [
            Transition::LongPress,
            Transition::PinsCleared,
            Transition::ToggleChanged,
            Transition::LocationUpdated,
        ] {
            assert_eq!(selected.transition(event), selected);
        }
    }
}
