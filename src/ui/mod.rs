// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`map_screen`] - The map with pins, routes and the control rail
//!
//! # Shared Infrastructure
//!
//! - [`action_button`] - Buttons with a hidden/visible state and optional tooltip
//! - [`segmented`] - Two-or-more choice toggles (transport mode, map style)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod action_button;
pub mod design_tokens;
pub mod icons;
pub mod map_screen;
pub mod segmented;
pub mod styles;
pub mod theming;
