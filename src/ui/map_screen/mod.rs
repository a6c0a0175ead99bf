// SPDX-License-Identifier: MPL-2.0
//! Map screen: pins, route to the selected pin, transport and style toggles.
//!
//! The screen follows the "state down, messages up" pattern: the canvas and
//! the floating controls emit [`Message`]s, [`State::handle_message`] mutates
//! the map model and returns an [`Effect`] when the application has to talk
//! to the routing service.

pub mod canvas;
pub mod component;
pub mod map_view;
pub mod prompt;
pub mod state;

pub use canvas::CanvasMessage;
pub use component::{Effect, Message, State, ViewEnv};
pub use map_view::{MapView, Projection};
pub use state::{ScreenState, Transition};
