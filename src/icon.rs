// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded branding SVG at runtime to produce an RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::media::icon_transform::{self, RenderingMode};
use iced::window::{icon, Icon};

/// Side of the rasterized window icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    const SVG_SOURCE: &[u8] = include_bytes!("../assets/branding/pinroute.svg");

    let bitmap =
        icon_transform::rasterize_svg(SVG_SOURCE, ICON_SIZE, ICON_SIZE, RenderingMode::Original)
            .map_err(|err| log::warn!("Window icon unavailable: {}", err))
            .ok()?;

    let rgba = bitmap.to_rgba_image();
    icon::from_rgba(rgba.into_raw(), bitmap.width(), bitmap.height()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branding_svg_rasterizes_to_a_window_icon() {
        assert!(load_window_icon().is_some());
    }
}
