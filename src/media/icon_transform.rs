// SPDX-License-Identifier: MPL-2.0
//! Icon bitmap transformations: rasterize, resize, rotate and tint.
//!
//! Bitmaps are backed by a `tiny_skia::Pixmap` (premultiplied RGBA). A
//! [`RenderingMode::Template`] bitmap is a shape whose colour is meant to be
//! replaced by [`tint`]; an [`RenderingMode::Original`] bitmap keeps its own
//! colours. Both modes survive [`resize`] and [`rotate`].

use crate::error::{Error, Result};
use iced::Color;
use image_rs::{DynamicImage, RgbaImage};
use resvg::usvg;
use tiny_skia::{FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};

/// Largest side a transformed icon may have.
pub const MAX_ICON_SIDE: u32 = 4096;

/// How an icon's colours are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingMode {
    /// Colours are part of the artwork.
    #[default]
    Original,
    /// Only the alpha channel matters; colour comes from [`tint`].
    Template,
}

/// A raster icon together with its rendering mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pixmap: Pixmap,
    mode: RenderingMode,
}

impl Bitmap {
    #[must_use]
    pub fn new(pixmap: Pixmap, mode: RenderingMode) -> Self {
        Self { pixmap, mode }
    }

    /// Builds a bitmap from straight (non-premultiplied) RGBA bytes.
    ///
    /// Returns `None` if the buffer length does not match the dimensions or
    /// either dimension is zero.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, mut data: Vec<u8>, mode: RenderingMode) -> Option<Self> {
        let size = IntSize::from_wh(width, height)?;
        if data.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        for pixel in data.chunks_exact_mut(4) {
            let alpha = u16::from(pixel[3]);
            for channel in &mut pixel[..3] {
                *channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
            }
        }
        Pixmap::from_vec(data, size).map(|pixmap| Self::new(pixmap, mode))
    }

    /// Builds a bitmap from any decoded image.
    #[must_use]
    pub fn from_image(image: &DynamicImage, mode: RenderingMode) -> Option<Self> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_raw(), mode)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[must_use]
    pub fn mode(&self) -> RenderingMode {
        self.mode
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Converts to a straight-alpha RGBA image.
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        let raw: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        // Length always matches width * height * 4.
        RgbaImage::from_raw(self.width(), self.height(), raw)
            .unwrap_or_else(|| RgbaImage::new(self.width(), self.height()))
    }

    /// Converts to an Iced image handle.
    #[must_use]
    pub fn to_handle(&self) -> iced::widget::image::Handle {
        iced::widget::image::Handle::from_rgba(
            self.width(),
            self.height(),
            self.to_rgba_image().into_raw(),
        )
    }
}

/// Rasterizes SVG source data into a bitmap of exactly `width` x `height`.
pub fn rasterize_svg(data: &[u8], width: u32, height: u32, mode: RenderingMode) -> Result<Bitmap> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|err| Error::Svg(err.to_string()))?;

    let width = width.clamp(1, MAX_ICON_SIDE);
    let height = height.clamp(1, MAX_ICON_SIDE);
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg(format!("cannot allocate {}x{} pixmap", width, height)))?;

    let source = tree.size();
    let transform = Transform::from_scale(
        width as f32 / source.width(),
        height as f32 / source.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(Bitmap::new(pixmap, mode))
}

/// Redraws `bitmap` into a canvas of `width` x `height`.
///
/// Degenerate sizes are clamped to at least 1x1 (and at most
/// [`MAX_ICON_SIDE`]). The rendering mode is preserved.
#[must_use]
pub fn resize(bitmap: &Bitmap, width: u32, height: u32) -> Bitmap {
    let width = width.clamp(1, MAX_ICON_SIDE);
    let height = height.clamp(1, MAX_ICON_SIDE);
    if width == bitmap.width() && height == bitmap.height() {
        return bitmap.clone();
    }

    let Some(mut canvas) = Pixmap::new(width, height) else {
        log::warn!("Could not allocate {}x{} icon canvas", width, height);
        return bitmap.clone();
    };

    let transform = Transform::from_scale(
        width as f32 / bitmap.width() as f32,
        height as f32 / bitmap.height() as f32,
    );
    canvas.draw_pixmap(
        0,
        0,
        bitmap.pixmap.as_ref(),
        &paint(),
        transform,
        None,
    );

    Bitmap::new(canvas, bitmap.mode)
}

/// Size of the axis-aligned box enclosing `width` x `height` rotated by
/// `radians`, floored to whole pixels.
#[must_use]
pub fn rotated_size(width: u32, height: u32, radians: f32) -> (u32, u32) {
    let angle = f64::from(radians);
    let (sin, cos) = (angle.sin().abs(), angle.cos().abs());
    let (w, h) = (f64::from(width), f64::from(height));

    // Absorb trigonometric noise so a quarter turn of 25x30 is 30x25, not 29x24.
    let floor = |value: f64| {
        if value.is_finite() {
            (value + 1e-6).floor().max(0.0) as u32
        } else {
            0
        }
    };
    (floor(w * cos + h * sin), floor(w * sin + h * cos))
}

/// Rotates `bitmap` by `radians` (clockwise on screen) about its center.
///
/// The result is sized to the floored bounding box of the rotated source.
/// Returns `None` when no canvas can be allocated for that size, which
/// happens when it collapses to zero or exceeds [`MAX_ICON_SIDE`].
#[must_use]
pub fn rotate(bitmap: &Bitmap, radians: f32) -> Option<Bitmap> {
    let (width, height) = rotated_size(bitmap.width(), bitmap.height(), radians);
    if width > MAX_ICON_SIDE || height > MAX_ICON_SIDE {
        return None;
    }
    let mut canvas = Pixmap::new(width, height)?;

    let transform = Transform::from_translate(
        -(bitmap.width() as f32) / 2.0,
        -(bitmap.height() as f32) / 2.0,
    )
    .post_rotate(radians.to_degrees())
    .post_translate(width as f32 / 2.0, height as f32 / 2.0);

    canvas.draw_pixmap(
        0,
        0,
        bitmap.pixmap.as_ref(),
        &paint(),
        transform,
        None,
    );

    Some(Bitmap::new(canvas, bitmap.mode))
}

/// Recolours a template bitmap, keeping its alpha.
///
/// Original bitmaps are returned unchanged.
#[must_use]
pub fn tint(bitmap: &Bitmap, color: Color) -> Bitmap {
    if bitmap.mode == RenderingMode::Original {
        return bitmap.clone();
    }

    let [r, g, b, a] = color.into_rgba8();
    let mut pixmap = bitmap.pixmap.clone();
    for pixel in pixmap.data_mut().chunks_exact_mut(4) {
        let alpha = (u16::from(pixel[3]) * u16::from(a) + 127) / 255;
        pixel[0] = ((u16::from(r) * alpha + 127) / 255) as u8;
        pixel[1] = ((u16::from(g) * alpha + 127) / 255) as u8;
        pixel[2] = ((u16::from(b) * alpha + 127) / 255) as u8;
        pixel[3] = alpha as u8;
    }

    Bitmap::new(pixmap, bitmap.mode)
}

fn paint() -> PixmapPaint {
    PixmapPaint {
        quality: FilterQuality::Bicubic,
        ..PixmapPaint::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="black"/></svg>"#;

    fn solid(width: u32, height: u32, rgba: [u8; 4], mode: RenderingMode) -> Bitmap {
        let data = rgba.repeat((width * height) as usize);
        Bitmap::from_rgba(width, height, data, mode).expect("valid bitmap")
    }

    #[test]
    fn from_rgba_rejects_mismatched_buffer() {
        assert!(Bitmap::from_rgba(2, 2, vec![0; 3], RenderingMode::Original).is_none());
        assert!(Bitmap::from_rgba(0, 2, Vec::new(), RenderingMode::Original).is_none());
    }

    #[test]
    fn rgba_image_round_trip_restores_straight_alpha() {
        let bitmap = solid(2, 1, [200, 100, 50, 128], RenderingMode::Original);
        let image = bitmap.to_rgba_image();
        let pixel = image.get_pixel(0, 0).0;
        assert_eq!(pixel[3], 128);
        assert!((i16::from(pixel[0]) - 200).abs() <= 2);
        assert!((i16::from(pixel[1]) - 100).abs() <= 2);
    }

    #[test]
    fn from_image_keeps_size_and_pixels() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            3,
            2,
            image_rs::Rgba([10, 20, 30, 255]),
        ));
        let bitmap = Bitmap::from_image(&image, RenderingMode::Template).expect("bitmap");

        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        assert_eq!(bitmap.mode(), RenderingMode::Template);
        assert_eq!(bitmap.to_rgba_image().get_pixel(2, 1).0, [10, 20, 30, 255]);
    }

    #[test]
    fn resize_produces_requested_size_and_keeps_mode() {
        let bitmap = solid(10, 10, [0, 0, 0, 255], RenderingMode::Template);
        let resized = resize(&bitmap, 25, 30);
        assert_eq!((resized.width(), resized.height()), (25, 30));
        assert_eq!(resized.mode(), RenderingMode::Template);
    }

    #[test]
    fn resize_clamps_degenerate_target() {
        let bitmap = solid(4, 4, [0, 0, 0, 255], RenderingMode::Original);
        let resized = resize(&bitmap, 0, 0);
        assert_eq!((resized.width(), resized.height()), (1, 1));
    }

    #[test]
    fn quarter_turn_swaps_dimensions() {
        let bitmap = solid(25, 30, [0, 0, 0, 255], RenderingMode::Template);
        for angle in [FRAC_PI_2, -FRAC_PI_2] {
            let rotated = rotate(&bitmap, angle).expect("rotation");
            assert_eq!((rotated.width(), rotated.height()), (30, 25));
            assert_eq!(rotated.mode(), RenderingMode::Template);
        }
    }

    #[test]
    fn half_turn_keeps_dimensions() {
        let bitmap = solid(25, 30, [0, 0, 0, 255], RenderingMode::Original);
        let rotated = rotate(&bitmap, PI).expect("rotation");
        assert_eq!((rotated.width(), rotated.height()), (25, 30));
    }

    #[test]
    fn diagonal_rotation_floors_bounding_box() {
        // 10 * (cos 45 + sin 45) = 14.142...
        assert_eq!(rotated_size(10, 10, FRAC_PI_4), (14, 14));
    }

    #[test]
    fn rotation_into_zero_sized_surface_is_none() {
        let bitmap = solid(4, 4, [0, 0, 0, 255], RenderingMode::Original);
        assert_eq!(rotated_size(4, 4, f32::NAN), (0, 0));
        assert!(rotate(&bitmap, f32::NAN).is_none());
        assert!(rotate(&bitmap, f32::INFINITY).is_none());
    }

    #[test]
    fn rotation_keeps_center_pixel_opaque() {
        let bitmap = solid(9, 9, [0, 0, 0, 255], RenderingMode::Original);
        let rotated = rotate(&bitmap, FRAC_PI_4).expect("rotation");
        let center = rotated
            .pixmap()
            .pixel(rotated.width() / 2, rotated.height() / 2)
            .expect("center pixel");
        assert!(center.alpha() >= 250);
    }

    #[test]
    fn tint_recolours_template_and_keeps_alpha() {
        let bitmap = solid(2, 2, [0, 0, 0, 255], RenderingMode::Template);
        let tinted = tint(&bitmap, Color::from_rgb8(255, 0, 0));
        let pixel = tinted.to_rgba_image().get_pixel(1, 1).0;
        assert_eq!(pixel, [255, 0, 0, 255]);

        let transparent = solid(1, 1, [0, 0, 0, 0], RenderingMode::Template);
        let tinted = tint(&transparent, Color::from_rgb8(255, 0, 0));
        assert_eq!(tinted.to_rgba_image().get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn tint_leaves_original_untouched() {
        let bitmap = solid(2, 2, [10, 20, 30, 255], RenderingMode::Original);
        assert_eq!(tint(&bitmap, Color::WHITE), bitmap);
    }

    #[test]
    fn rasterize_svg_renders_requested_size() {
        let bitmap = rasterize_svg(SQUARE_SVG.as_bytes(), 25, 30, RenderingMode::Template)
            .expect("svg renders");
        assert_eq!((bitmap.width(), bitmap.height()), (25, 30));
        let pixel = bitmap.pixmap().pixel(12, 15).expect("pixel");
        assert_eq!(pixel.alpha(), 255);
    }

    #[test]
    fn rasterize_svg_reports_invalid_source() {
        let result = rasterize_svg(b"not svg", 10, 10, RenderingMode::Original);
        assert!(matches!(result, Err(Error::Svg(_))));
    }
}
