// SPDX-License-Identifier: MPL-2.0
//! `pinroute` is a lightweight location map built with the Iced GUI framework.
//!
//! Long-press the map to drop a labeled pin, select it, and draw a driving or
//! walking route from the current location to it. Settings live in a
//! `settings.toml` file and the interface is translated with Fluent.
//!
//! # Layers
//!
//! - [`domain`] - Coordinates, pins, polylines and routes
//! - [`application`] - Ports for the location and routing services
//! - [`infrastructure`] - OSRM client and location sources
//! - [`ui`] - The map screen and its widgets
//! - [`app`] - Application root, configuration and localization

#![doc(html_root_url = "https://docs.rs/pinroute/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod icon;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
