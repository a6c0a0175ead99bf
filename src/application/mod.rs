// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports the map screen depends on.
//!
//! The screen never talks to a concrete location sensor or routing backend.
//! It depends on the traits in [`port`], and the app root injects adapters
//! from [`crate::infrastructure`] at startup.

pub mod port;
