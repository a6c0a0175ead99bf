// SPDX-License-Identifier: MPL-2.0
//! Raster helpers for the map screen's icons.

pub mod icon_transform;

pub use icon_transform::{Bitmap, RenderingMode};
