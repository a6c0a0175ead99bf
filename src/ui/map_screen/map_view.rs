// SPDX-License-Identifier: MPL-2.0
//! Map view model: annotations, overlays, base style and visible region.
//!
//! The screen mutates these collections directly; the canvas only reads them.
//! Screen-space conversions go through [`Projection`], which fits the
//! requested region inside the canvas bounds (aspect preserved, centered).

use crate::domain::{Coordinate, MapPoint, MapRect, MapStyle, Pin, PinId, Polyline, Route};
use iced::{Point, Size, Vector};

/// Annotation/overlay collections plus the visible region.
#[derive(Debug, Clone)]
pub struct MapView {
    annotations: Vec<Pin>,
    overlays: Vec<Polyline>,
    style: MapStyle,
    viewport: MapRect,
    next_pin_id: u64,
}

impl MapView {
    #[must_use]
    pub fn new(viewport: MapRect, style: MapStyle) -> Self {
        Self {
            annotations: Vec::new(),
            overlays: Vec::new(),
            style,
            viewport,
            next_pin_id: 1,
        }
    }

    // ----- annotations -----------------------------------------------------

    pub fn annotations(&self) -> &[Pin] {
        &self.annotations
    }

    pub fn annotation(&self, id: PinId) -> Option<&Pin> {
        self.annotations.iter().find(|pin| pin.id == id)
    }

    /// Adds a pin and returns its id.
    pub fn add_annotation(&mut self, coordinate: Coordinate, title: String) -> PinId {
        let id = PinId::new(self.next_pin_id);
        self.next_pin_id += 1;
        self.annotations.push(Pin {
            id,
            coordinate,
            title,
        });
        id
    }

    /// Removes one pin. Returns `false` if it was not present.
    pub fn remove_annotation(&mut self, id: PinId) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|pin| pin.id != id);
        self.annotations.len() != before
    }

    pub fn remove_all_annotations(&mut self) {
        self.annotations.clear();
    }

    // ----- overlays --------------------------------------------------------

    pub fn overlays(&self) -> &[Polyline] {
        &self.overlays
    }

    pub fn add_overlay(&mut self, polyline: Polyline) {
        self.overlays.push(polyline);
    }

    pub fn remove_all_overlays(&mut self) {
        self.overlays.clear();
    }

    /// Replaces every overlay with `route` and frames its bounds.
    pub fn show_route(&mut self, route: Route, padding: f64) {
        self.remove_all_overlays();
        self.fit_to(route.bounds.padded(padding));
        self.add_overlay(route.polyline);
    }

    // ----- appearance / region --------------------------------------------

    pub fn style(&self) -> MapStyle {
        self.style
    }

    pub fn set_style(&mut self, style: MapStyle) {
        self.style = style;
    }

    pub fn viewport(&self) -> MapRect {
        self.viewport
    }

    /// Makes `rect` the visible region.
    pub fn fit_to(&mut self, rect: MapRect) {
        self.viewport = rect;
    }

    /// Keeps the region size and moves its center to `coordinate`.
    pub fn center_on(&mut self, coordinate: Coordinate) {
        self.viewport = self.viewport.centered_on(coordinate.to_map_point());
    }

    /// Shifts the region by a map-space offset.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport = self.viewport.translated(dx, dy);
    }

    /// Scales the region about `anchor`; `factor < 1` zooms in.
    ///
    /// The result never grows beyond the world nor shrinks below `min_width`.
    pub fn zoom_about(&mut self, anchor: MapPoint, factor: f64, min_width: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let max_factor = MapRect::WORLD.width / self.viewport.width;
        let min_factor = min_width / self.viewport.width;
        let factor = factor.clamp(min_factor.min(1.0), max_factor.max(1.0));
        self.viewport = self.viewport.scaled_about(anchor, factor);
    }
}

/// Mapping between map space and canvas pixels for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: MapPoint,
    /// Pixels per map unit.
    scale: f64,
    size: Size,
}

impl Projection {
    /// Fits `viewport` into a canvas of `size`.
    #[must_use]
    pub fn new(viewport: MapRect, size: Size) -> Self {
        let width = f64::from(size.width.max(1.0));
        let height = f64::from(size.height.max(1.0));
        let scale = (width / viewport.width).min(height / viewport.height);
        Self {
            center: viewport.center(),
            scale,
            size,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn to_screen(&self, point: MapPoint) -> Point {
        Point::new(
            (f64::from(self.size.width) / 2.0 + (point.x - self.center.x) * self.scale) as f32,
            (f64::from(self.size.height) / 2.0 + (point.y - self.center.y) * self.scale) as f32,
        )
    }

    #[must_use]
    pub fn coordinate_to_screen(&self, coordinate: Coordinate) -> Point {
        self.to_screen(coordinate.to_map_point())
    }

    #[must_use]
    pub fn to_map(&self, point: Point) -> MapPoint {
        MapPoint::new(
            self.center.x + (f64::from(point.x) - f64::from(self.size.width) / 2.0) / self.scale,
            self.center.y + (f64::from(point.y) - f64::from(self.size.height) / 2.0) / self.scale,
        )
    }

    /// Converts a pixel drag into the map-space offset that keeps the content
    /// under the pointer.
    #[must_use]
    pub fn drag_offset(&self, delta: Vector) -> (f64, f64) {
        (
            -f64::from(delta.x) / self.scale,
            -f64::from(delta.y) / self.scale,
        )
    }
}
