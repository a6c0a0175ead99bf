// SPDX-License-Identifier: MPL-2.0
//! Geographic value types and the Web Mercator projection.
//!
//! Map geometry is kept in a normalized Web Mercator square ([`MapPoint`]):
//! `x` grows eastwards from 0.0 (−180°) to 1.0 (+180°) and `y` grows
//! southwards from 0.0 (≈ +85.05°) to 1.0 (≈ −85.05°). Visible regions and
//! route bounds are [`MapRect`]s in that same space, so fitting and panning
//! are plain rectangle arithmetic.

use std::f64::consts::PI;

/// Largest latitude representable in Web Mercator.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

/// Smallest width/height a [`MapRect`] may shrink to (roughly 4 cm at the equator).
pub const MIN_MAP_SPAN: f64 = 1e-9;

// =============================================================================
// Coordinate
// =============================================================================

/// Latitude/longitude pair in degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Projects the coordinate into the normalized Mercator square.
    ///
    /// Latitudes beyond the Mercator limit are clamped.
    #[must_use]
    pub fn to_map_point(self) -> MapPoint {
        let lat = self
            .latitude
            .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
            .to_radians();
        let x = (self.longitude + 180.0) / 360.0;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
        MapPoint { x, y }
    }

    /// Initial great-circle bearing towards `other`, in degrees clockwise from north.
    #[must_use]
    pub fn bearing_to(self, other: Coordinate) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let delta = (other.longitude - self.longitude).to_radians();

        let y = delta.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta.cos();
        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }
}

// =============================================================================
// MapPoint
// =============================================================================

/// Point in the normalized Web Mercator square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Inverse projection back to latitude/longitude.
    ///
    /// `x` outside the unit square wraps around the antimeridian, so a point
    /// reached by panning past the world edge still maps to a valid longitude.
    #[must_use]
    pub fn to_coordinate(self) -> Coordinate {
        let longitude = self.x.rem_euclid(1.0) * 360.0 - 180.0;
        let latitude = (PI * (1.0 - 2.0 * self.y)).sinh().atan().to_degrees();
        Coordinate {
            latitude,
            longitude,
        }
    }
}

// =============================================================================
// MapRect
// =============================================================================

/// Axis-aligned rectangle in the normalized Mercator square.
///
/// Used both for the visible map region and for geometry bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRect {
    pub origin: MapPoint,
    pub width: f64,
    pub height: f64,
}

impl MapRect {
    /// The whole projected world.
    pub const WORLD: MapRect = MapRect {
        origin: MapPoint { x: 0.0, y: 0.0 },
        width: 1.0,
        height: 1.0,
    };

    #[must_use]
    pub fn new(origin: MapPoint, width: f64, height: f64) -> Self {
        Self {
            origin,
            width: width.max(MIN_MAP_SPAN),
            height: height.max(MIN_MAP_SPAN),
        }
    }

    /// Region centered on `center` spanning `span_degrees` of latitude and longitude.
    #[must_use]
    pub fn around(center: Coordinate, span_degrees: f64) -> Self {
        let half = span_degrees.abs() / 2.0;
        let north_west =
            Coordinate::new(center.latitude + half, center.longitude - half).to_map_point();
        let south_east =
            Coordinate::new(center.latitude - half, center.longitude + half).to_map_point();
        Self::new(
            north_west,
            south_east.x - north_west.x,
            south_east.y - north_west.y,
        )
    }

    /// Smallest rectangle containing every point, or `None` for an empty input.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = MapPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for point in iter {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
        Some(Self::new(
            MapPoint::new(min_x, min_y),
            max_x - min_x,
            max_y - min_y,
        ))
    }

    #[must_use]
    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.height
    }

    #[must_use]
    pub fn contains(&self, point: MapPoint) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }

    /// Whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &MapRect) -> bool {
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Grows each side by `fraction` of the rectangle's size.
    #[must_use]
    pub fn padded(&self, fraction: f64) -> Self {
        let dx = self.width * fraction;
        let dy = self.height * fraction;
        Self::new(
            MapPoint::new(self.origin.x - dx, self.origin.y - dy),
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        )
    }

    /// Same size, moved so that its center is `center`.
    #[must_use]
    pub fn centered_on(&self, center: MapPoint) -> Self {
        Self::new(
            MapPoint::new(center.x - self.width / 2.0, center.y - self.height / 2.0),
            self.width,
            self.height,
        )
    }

    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            MapPoint::new(self.origin.x + dx, self.origin.y + dy),
            self.width,
            self.height,
        )
    }

    /// Scales the rectangle by `factor` keeping `anchor` at the same relative position.
    #[must_use]
    pub fn scaled_about(&self, anchor: MapPoint, factor: f64) -> Self {
        let origin = MapPoint::new(
            anchor.x - (anchor.x - self.origin.x) * factor,
            anchor.y - (anchor.y - self.origin.y) * factor,
        );
        Self::new(origin, self.width * factor, self.height * factor)
    }
}

// =============================================================================
// Polyline
// =============================================================================

/// Ordered list of coordinates forming a path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Projected bounding rectangle (the polyline's "bounding map rect").
    #[must_use]
    pub fn bounding_map_rect(&self) -> Option<MapRect> {
        MapRect::bounding(self.points.iter().map(|c| c.to_map_point()))
    }
}

impl FromIterator<Coordinate> for Polyline {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
