// SPDX-License-Identifier: MPL-2.0
//! Interactive map surface.
//!
//! Draws the base style, route overlays, pins and the user-location marker,
//! and turns raw pointer input into [`CanvasMessage`]s:
//!
//! - a left press released after the long-press threshold (without moving
//!   past the tolerance) is a long-press at the press position
//! - a shorter left press is a tap, on a pin or on empty map
//! - moving past the tolerance while pressed pans the map
//! - a right click on a pin removes it
//! - the wheel zooms about the cursor

use super::component::Message;
use super::map_view::{MapView, Projection};
use crate::app::config::{PRESS_MOVE_TOLERANCE_PX, WHEEL_ZOOM_FACTOR};
use crate::domain::{Coordinate, LocationFix, MapPoint, MapStyle, PinId};
use crate::media::icon_transform;
use crate::ui::design_tokens::{border, palette, sizing, typography};
use crate::ui::icons::Glyph;
use iced::widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Path, Stroke, Text};
use iced::widget::image::Handle;
use iced::widget::Action;
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::{Duration, Instant};

/// Pointer gestures recognized on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMessage {
    LongPress(Coordinate),
    TapEmpty,
    PinTapped(PinId),
    PinSecondary(PinId),
    /// Map-space offset to apply to the visible region.
    Pan { dx: f64, dy: f64 },
    /// Scale the visible region about `anchor`; `factor < 1` zooms in.
    Zoom { anchor: MapPoint, factor: f64 },
}

/// Pre-rendered user-location arrow, rotated to the current heading.
#[derive(Debug, Clone)]
pub struct LocationMarker {
    handle: Handle,
    size: Size,
}

impl LocationMarker {
    /// Renders the arrow rotated by `heading` degrees clockwise from north.
    pub fn for_heading(heading: f64) -> Option<Self> {
        let side = sizing::LOCATION_ARROW as u32;
        let arrow = Glyph::LocationArrow.bitmap(side, side, palette::LOCATION)?;
        let rotated = icon_transform::rotate(&arrow, heading.to_radians() as f32)?;
        Some(Self {
            size: Size::new(rotated.width() as f32, rotated.height() as f32),
            handle: rotated.to_handle(),
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// Press in progress, tracked between button down and button up.
#[derive(Debug, Clone, Copy)]
pub struct Press {
    started: Instant,
    origin: Point,
    last: Point,
    dragging: bool,
}

impl Press {
    fn new(position: Point, now: Instant) -> Self {
        Self {
            started: now,
            origin: position,
            last: position,
            dragging: false,
        }
    }
}

/// What a released press turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Drag,
    LongPress,
    Tap,
}

/// Classifies a finished press.
#[must_use]
pub fn classify_release(press: &Press, now: Instant, long_press: Duration) -> Release {
    if press.dragging {
        Release::Drag
    } else if now.saturating_duration_since(press.started) >= long_press {
        Release::LongPress
    } else {
        Release::Tap
    }
}

/// Canvas-local gesture state.
#[derive(Debug, Default)]
pub struct Gesture {
    press: Option<Press>,
}

/// Canvas program borrowing the screen's map model for one frame.
pub struct MapSurface<'a> {
    pub view: &'a MapView,
    pub selected: Option<PinId>,
    pub location: Option<LocationFix>,
    pub marker: Option<&'a LocationMarker>,
    pub long_press: Duration,
    pub tint: Color,
}

impl MapSurface<'_> {
    /// Nearest pin whose head lies within the hit radius of `point`.
    pub fn hit_test(&self, projection: &Projection, point: Point) -> Option<PinId> {
        self.view
            .annotations()
            .iter()
            .map(|pin| {
                let head = pin_head(projection.coordinate_to_screen(pin.coordinate));
                (pin.id, head.distance(point))
            })
            .filter(|(_, distance)| *distance <= sizing::PIN_HIT_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    fn draw_base(&self, frame: &mut Frame, projection: &Projection, size: Size) {
        let (land, grid) = match self.view.style() {
            MapStyle::Standard => {
                (palette::MAP_STANDARD_LAND, palette::MAP_STANDARD_GRID)
            }
            MapStyle::Satellite => {
                (palette::MAP_SATELLITE_LAND, palette::MAP_SATELLITE_GRID)
            }
        };
        frame.fill_rectangle(Point::ORIGIN, size, land);

        // Graticule aligned to map space so it follows panning and zooming.
        let step = grid_step(projection.scale());
        let top_left = projection.to_map(Point::ORIGIN);
        let bottom_right = projection.to_map(Point::new(size.width, size.height));
        let stroke = Stroke::default()
            .with_width(border::WIDTH_SM)
            .with_color(grid);

        let mut x = (top_left.x / step).floor() * step;
        while x <= bottom_right.x {
            let screen_x = projection.to_screen(MapPoint::new(x, top_left.y)).x;
            frame.stroke(
                &Path::line(
                    Point::new(screen_x, 0.0),
                    Point::new(screen_x, size.height),
                ),
                stroke,
            );
            x += step;
        }

        let mut y = (top_left.y / step).floor() * step;
        while y <= bottom_right.y {
            let screen_y = projection.to_screen(MapPoint::new(top_left.x, y)).y;
            frame.stroke(
                &Path::line(Point::new(0.0, screen_y), Point::new(size.width, screen_y)),
                stroke,
            );
            y += step;
        }
    }

    fn draw_overlays(&self, frame: &mut Frame, projection: &Projection) {
        let stroke = Stroke::default()
            .with_width(sizing::ROUTE_LINE_WIDTH)
            .with_color(self.tint)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round);

        for polyline in self.view.overlays() {
            let mut points = polyline
                .points()
                .iter()
                .map(|coordinate| projection.coordinate_to_screen(*coordinate));
            let Some(first) = points.next() else {
                continue;
            };
            let path = Path::new(|builder| {
                builder.move_to(first);
                for point in points {
                    builder.line_to(point);
                }
            });
            frame.stroke(&path, stroke);
        }
    }

    fn draw_pins(&self, frame: &mut Frame, projection: &Projection) {
        for pin in self.view.annotations() {
            let anchor = projection.coordinate_to_screen(pin.coordinate);
            let head = pin_head(anchor);
            let color = if self.selected == Some(pin.id) {
                self.tint
            } else {
                palette::PIN
            };

            frame.stroke(
                &Path::line(anchor, head),
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(color),
            );
            frame.fill(&Path::circle(head, sizing::PIN_RADIUS), color);
            frame.stroke(
                &Path::circle(head, sizing::PIN_RADIUS),
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(palette::WHITE),
            );

            if !pin.title.is_empty() {
                frame.fill_text(Text {
                    content: pin.title.clone(),
                    position: Point::new(
                        anchor.x + sizing::PIN_RADIUS + 2.0,
                        head.y - typography::CAPTION / 2.0,
                    ),
                    color: palette::GRAY_900,
                    size: typography::CAPTION.into(),
                    ..Text::default()
                });
            }
        }
    }

    fn draw_location(&self, frame: &mut Frame, projection: &Projection) {
        let Some(fix) = self.location else {
            return;
        };
        let center = projection.coordinate_to_screen(fix.coordinate);

        if let (Some(_), Some(marker)) = (fix.heading, self.marker) {
            let size = marker.size();
            let bounds = Rectangle::new(
                Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
                size,
            );
            frame.draw_image(bounds, canvas::Image::new(marker.handle.clone()));
            return;
        }

        let dot = Path::circle(center, sizing::LOCATION_DOT_RADIUS);
        frame.fill(&dot, palette::LOCATION);
        frame.stroke(
            &dot,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(palette::WHITE),
        );
    }
}

impl canvas::Program<Message> for MapSurface<'_> {
    type State = Gesture;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let projection = Projection::new(self.view.viewport(), bounds.size());
        let publish = |message: CanvasMessage| {
            Some(Action::publish(Message::Canvas(message)).and_capture())
        };

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.press = Some(Press::new(position, Instant::now()));
                Some(Action::capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let press = state.press.as_mut()?;
                let position = cursor.position_in(bounds)?;
                if !press.dragging && press.origin.distance(position) > PRESS_MOVE_TOLERANCE_PX {
                    press.dragging = true;
                }
                if !press.dragging {
                    return None;
                }
                let delta = Vector::new(position.x - press.last.x, position.y - press.last.y);
                press.last = position;
                let (dx, dy) = projection.drag_offset(delta);
                publish(CanvasMessage::Pan { dx, dy })
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let press = state.press.take()?;
                match classify_release(&press, Instant::now(), self.long_press) {
                    Release::Drag => Some(Action::capture()),
                    Release::LongPress => publish(CanvasMessage::LongPress(
                        projection.to_map(press.origin).to_coordinate(),
                    )),
                    Release::Tap => match self.hit_test(&projection, press.origin) {
                        Some(id) => publish(CanvasMessage::PinTapped(id)),
                        None => publish(CanvasMessage::TapEmpty),
                    },
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
                let position = cursor.position_in(bounds)?;
                let id = self.hit_test(&projection, position)?;
                publish(CanvasMessage::PinSecondary(id))
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_in(bounds)?;
                let steps = scroll_steps(delta);
                if steps.abs() < f32::EPSILON {
                    return None;
                }
                publish(CanvasMessage::Zoom {
                    anchor: projection.to_map(position),
                    factor: WHEEL_ZOOM_FACTOR.powf(-f64::from(steps)),
                })
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.press = None;
                None
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let projection = Projection::new(self.view.viewport(), size);
        let mut frame = Frame::new(renderer, size);

        self.draw_base(&mut frame, &projection, size);
        self.draw_overlays(&mut frame, &projection);
        self.draw_pins(&mut frame, &projection);
        self.draw_location(&mut frame, &projection);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match state.press {
            Some(press) if press.dragging => mouse::Interaction::Grabbing,
            _ if cursor.is_over(bounds) => mouse::Interaction::Crosshair,
            _ => mouse::Interaction::default(),
        }
    }
}

/// Screen position of a pin's head given its anchor (the tip of the stem).
fn pin_head(anchor: Point) -> Point {
    Point::new(anchor.x, anchor.y - sizing::PIN_STEM)
}

/// Map-space spacing of graticule lines: a power of two close to the grid token.
fn grid_step(scale: f64) -> f64 {
    let target = f64::from(sizing::GRID_STEP) / scale.max(f64::MIN_POSITIVE);
    2f64.powf(target.log2().round()).min(1.0)
}

fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}
