// SPDX-License-Identifier: MPL-2.0
//! Map screen component encapsulating state and update logic.

use super::canvas::{CanvasMessage, LocationMarker, MapSurface};
use super::map_view::MapView;
use super::prompt::{self, Outcome, PinPrompt};
use super::state::{ScreenState, Transition};
use crate::app::config::{MapConfig, MIN_SPAN_DEGREES, ROUTE_FIT_PADDING};
use crate::app::i18n::fluent::I18n;
use crate::domain::{
    Coordinate, LocationFix, MapRect, MapStyle, RequestId, Route, RouteRequest, TransportMode,
};
use crate::error::RoutingError;
use crate::ui::action_button::ActionButton;
use crate::ui::design_tokens::spacing;
use crate::ui::icons::Glyph;
use crate::ui::segmented::Segmented;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{canvas, operation, Column, Container, Id, Stack};
use iced::{Element, Length, Task};
use std::time::Duration;

/// Narrowest visible region reachable by zooming, in map units.
const MIN_VIEWPORT_WIDTH: f64 = MIN_SPAN_DEGREES / 360.0;

/// Messages handled by the map screen.
#[derive(Debug, Clone)]
pub enum Message {
    Canvas(CanvasMessage),
    Prompt(prompt::Message),
    TrackPressed,
    RemovePinsPressed,
    LocatePressed,
    TransportSelected(TransportMode),
    StyleSelected(MapStyle),
    /// One batch from the location provider; only the first fix is used.
    LocationUpdated(Vec<LocationFix>),
    RouteFinished {
        id: RequestId,
        result: Result<Vec<Route>, RoutingError>,
    },
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Compute this route and report back with [`Message::RouteFinished`].
    RequestRoute(RouteRequest),
}

/// Inputs the view needs from the application.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

/// Map screen state.
#[derive(Debug)]
pub struct State {
    map: MapView,
    screen_state: ScreenState,
    current_location: Option<LocationFix>,
    location_marker: Option<LocationMarker>,
    prompt: Option<PinPrompt>,
    transport: Segmented<TransportMode>,
    style: Segmented<MapStyle>,
    track_button: ActionButton<Message>,
    remove_pins_button: ActionButton<Message>,
    locate_button: ActionButton<Message>,
    latest_request: Option<RequestId>,
    next_request: RequestId,
    long_press: Duration,
}

impl State {
    pub fn new(config: &MapConfig, i18n: &I18n) -> Self {
        let center = Coordinate::from(config.initial_center);
        let map = MapView::new(
            MapRect::around(center, config.span_degrees()),
            config.default_style,
        );

        let transport = Segmented::new(
            [
                (
                    TransportMode::Automobile,
                    Glyph::Car,
                    i18n.tr("transport-automobile-tooltip"),
                ),
                (
                    TransportMode::Walking,
                    Glyph::FigureWalk,
                    i18n.tr("transport-walking-tooltip"),
                ),
            ],
            config.default_transport,
        );
        let style = Segmented::new(
            [
                (
                    MapStyle::Standard,
                    Glyph::Map,
                    i18n.tr("style-standard-tooltip"),
                ),
                (
                    MapStyle::Satellite,
                    Glyph::Binoculars,
                    i18n.tr("style-satellite-tooltip"),
                ),
            ],
            config.default_style,
        );

        let mut track_button =
            ActionButton::label(i18n.tr("track-button-label"), Message::TrackPressed);
        track_button.set_visible(false);

        Self {
            map,
            screen_state: ScreenState::Idle,
            current_location: None,
            location_marker: None,
            prompt: None,
            transport,
            style,
            track_button,
            remove_pins_button: ActionButton::icon(Glyph::MapPinSlash, Message::RemovePinsPressed)
                .with_tooltip(i18n.tr("remove-pins-tooltip")),
            locate_button: ActionButton::icon(Glyph::Location, Message::LocatePressed)
                .with_tooltip(i18n.tr("locate-me-tooltip")),
            latest_request: None,
            next_request: RequestId::new(1),
            long_press: config.long_press(),
        }
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn screen_state(&self) -> ScreenState {
        self.screen_state
    }

    pub fn current_location(&self) -> Option<LocationFix> {
        self.current_location
    }

    pub fn prompt(&self) -> Option<&PinPrompt> {
        self.prompt.as_ref()
    }

    pub fn transport(&self) -> TransportMode {
        self.transport.selected()
    }

    pub fn style(&self) -> MapStyle {
        self.style.selected()
    }

    pub fn track_button(&self) -> &ActionButton<Message> {
        &self.track_button
    }

    /// Id of the last route request issued and not yet answered.
    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let mut effect = Effect::None;
        let mut task = Task::none();

        match message {
            Message::Canvas(canvas_message) => {
                task = self.handle_canvas(canvas_message);
            }
            Message::Prompt(prompt_message) => self.handle_prompt(prompt_message),
            Message::TrackPressed => {
                if let Some(request) = self.handle_track() {
                    effect = Effect::RequestRoute(request);
                }
            }
            Message::RemovePinsPressed => {
                self.map.remove_all_annotations();
                self.apply(Transition::PinsCleared);
            }
            Message::LocatePressed => {
                if let Some(fix) = self.current_location {
                    self.map.center_on(fix.coordinate);
                }
            }
            Message::TransportSelected(mode) => {
                if self.transport.select(mode) {
                    self.apply(Transition::ToggleChanged);
                }
            }
            Message::StyleSelected(style) => {
                if self.style.select(style) {
                    self.map.set_style(style);
                    self.apply(Transition::ToggleChanged);
                }
            }
            Message::LocationUpdated(batch) => self.handle_location(batch),
            Message::RouteFinished { id, result } => self.handle_route_finished(id, result),
        }

        (effect, task)
    }

    fn apply(&mut self, transition: Transition) {
        self.screen_state = self.screen_state.transition(transition);
        self.track_button
            .set_visible(self.screen_state.shows_track_button());
    }

    fn handle_canvas(&mut self, message: CanvasMessage) -> Task<Message> {
        match message {
            CanvasMessage::LongPress(coordinate) => {
                self.prompt = Some(PinPrompt::new(coordinate));
                self.apply(Transition::LongPress);
                return operation::focus(Id::new(prompt::INPUT_ID));
            }
            CanvasMessage::TapEmpty => self.apply(Transition::TapEmpty),
            CanvasMessage::PinTapped(id) => {
                if self.map.annotation(id).is_some() {
                    self.apply(Transition::SelectPin(id));
                }
            }
            CanvasMessage::PinSecondary(id) => {
                if self.map.remove_annotation(id) {
                    self.apply(Transition::PinRemoved(id));
                }
            }
            CanvasMessage::Pan { dx, dy } => self.map.pan_by(dx, dy),
            CanvasMessage::Zoom { anchor, factor } => {
                self.map.zoom_about(anchor, factor, MIN_VIEWPORT_WIDTH);
            }
        }
        Task::none()
    }

    fn handle_prompt(&mut self, message: prompt::Message) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match prompt.update(message) {
            Outcome::Editing => {}
            Outcome::Cancelled => self.prompt = None,
            Outcome::Confirmed { coordinate, title } => {
                let id = self.map.add_annotation(coordinate, title);
                log::debug!("Added pin {} at {:?}", id.value(), coordinate);
                self.prompt = None;
            }
        }
    }

    /// Builds the next route request, or `None` when it has to be dropped.
    fn handle_track(&mut self) -> Option<RouteRequest> {
        let pin = self.screen_state.selected_pin()?;

        let request = match (self.current_location, self.map.annotation(pin)) {
            (Some(fix), Some(destination)) => Some(RouteRequest {
                id: self.next_request,
                origin: fix.coordinate,
                destination: destination.coordinate,
                mode: self.transport.selected(),
            }),
            (None, _) => {
                log::info!("Route request dropped: current location unknown");
                None
            }
            (_, None) => {
                log::info!("Route request dropped: selected pin no longer exists");
                None
            }
        };

        // A dropped press supersedes whatever was still in flight.
        self.latest_request = request.map(|request| request.id);
        if let Some(request) = request {
            self.next_request = request.id.next();
        }
        self.apply(Transition::Track(request));
        request
    }

    fn handle_route_finished(&mut self, id: RequestId, result: Result<Vec<Route>, RoutingError>) {
        if self.latest_request != Some(id) {
            log::debug!("Ignoring stale route completion {:?}", id);
            return;
        }
        self.latest_request = None;

        let route = result.and_then(|routes| routes.into_iter().next().ok_or(RoutingError::NoRoute));
        match route {
            Ok(route) => {
                log::info!(
                    "Route ready: {:.0} m, {:.0} s",
                    route.distance_m,
                    route.expected_travel_time_s
                );
                self.map.show_route(route, ROUTE_FIT_PADDING);
                self.apply(Transition::RouteSucceeded(id));
            }
            Err(err) => {
                log::warn!("Route calculation failed: {}", err);
                self.apply(Transition::RouteFailed(id));
            }
        }
    }

    fn handle_location(&mut self, batch: Vec<LocationFix>) {
        let Some(fix) = batch.into_iter().next() else {
            return;
        };

        let heading_changed =
            self.current_location.and_then(|previous| previous.heading) != fix.heading;
        if heading_changed || self.location_marker.is_none() {
            self.location_marker = fix.heading.and_then(LocationMarker::for_heading);
        }
        if self.current_location.is_none() {
            self.map.center_on(fix.coordinate);
        }

        self.current_location = Some(fix);
        self.apply(Transition::LocationUpdated);
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let tint = env.colors.tint;

        let surface = canvas(MapSurface {
            view: &self.map,
            selected: self.screen_state.selected_pin(),
            location: self.current_location,
            marker: self.location_marker.as_ref(),
            long_press: self.long_press,
            tint,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let rail = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Right)
            .push(self.transport.view(Message::TransportSelected))
            .push(self.style.view(Message::StyleSelected))
            .push(self.remove_pins_button.view(tint))
            .push(self.locate_button.view(tint));

        let controls = Container::new(rail)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top);

        let track = Container::new(self.track_button.view(tint))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(surface)
            .push(controls)
            .push(track);

        if let Some(prompt) = &self.prompt {
            layers = layers.push(prompt.view(env.i18n, *env.colors).map(Message::Prompt));
        }

        layers.into()
    }
}
