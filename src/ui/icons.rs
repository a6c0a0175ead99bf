// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the map screen glyphs.
//!
//! Glyphs are monochrome SVGs embedded at compile time via `include_bytes!`.
//! Each one is rasterized once into a template [`Bitmap`] (cached with
//! `OnceLock`) and then resized, rotated or tinted on demand through
//! [`icon_transform`](crate::media::icon_transform).
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::Glyph;
//!
//! let handle = Glyph::Car.handle(25, 30, palette::GRAY_200);
//! ```
//!
//! # Naming Convention
//!
//! Glyphs use generic visual names describing the icon's appearance,
//! not the action context (e.g., `MapPinSlash` not `RemovePins`).

use crate::media::icon_transform::{self, Bitmap, RenderingMode};
use iced::widget::image::{Handle, Image};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Side of the cached master rasterization.
const MASTER_SIZE: u32 = 96;

/// Monochrome glyphs used by the map screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Car seen from the front.
    Car,
    /// Walking figure.
    FigureWalk,
    /// Folded paper map.
    Map,
    /// Binoculars.
    Binoculars,
    /// Map pin crossed out.
    MapPinSlash,
    /// Tilted navigation arrow.
    Location,
    /// Upright navigation arrow pointing north.
    LocationArrow,
}

impl Glyph {
    pub const ALL: [Glyph; 7] = [
        Glyph::Car,
        Glyph::FigureWalk,
        Glyph::Map,
        Glyph::Binoculars,
        Glyph::MapPinSlash,
        Glyph::Location,
        Glyph::LocationArrow,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn source(self) -> &'static [u8] {
        match self {
            Glyph::Car => include_bytes!("../../assets/icons/car.svg"),
            Glyph::FigureWalk => include_bytes!("../../assets/icons/figure_walk.svg"),
            Glyph::Map => include_bytes!("../../assets/icons/map.svg"),
            Glyph::Binoculars => include_bytes!("../../assets/icons/binoculars.svg"),
            Glyph::MapPinSlash => include_bytes!("../../assets/icons/mappin_slash.svg"),
            Glyph::Location => include_bytes!("../../assets/icons/location.svg"),
            Glyph::LocationArrow => include_bytes!("../../assets/icons/location_arrow.svg"),
        }
    }

    /// Template bitmap rasterized once per glyph.
    ///
    /// Returns `None` (after logging) if the embedded SVG cannot be rendered.
    pub fn master(self) -> Option<&'static Bitmap> {
        static MASTERS: [OnceLock<Option<Bitmap>>; Glyph::ALL.len()] =
            [const { OnceLock::new() }; Glyph::ALL.len()];

        MASTERS[self.index()]
            .get_or_init(|| {
                icon_transform::rasterize_svg(
                    self.source(),
                    MASTER_SIZE,
                    MASTER_SIZE,
                    RenderingMode::Template,
                )
                .map_err(|err| log::warn!("Failed to rasterize {:?}: {}", self, err))
                .ok()
            })
            .as_ref()
    }

    /// The glyph resized to `width` x `height` and tinted with `color`.
    pub fn bitmap(self, width: u32, height: u32, color: Color) -> Option<Bitmap> {
        let master = self.master()?;
        let resized = icon_transform::resize(master, width, height);
        Some(icon_transform::tint(&resized, color))
    }

    /// Same as [`bitmap`](Self::bitmap), converted to an Iced image handle.
    pub fn handle(self, width: u32, height: u32, color: Color) -> Option<Handle> {
        self.bitmap(width, height, color)
            .map(|bitmap| bitmap.to_handle())
    }
}

/// Creates an icon with specified dimensions.
pub fn sized(handle: Handle, width: f32, height: f32) -> Image<Handle> {
    Image::new(handle)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
}
