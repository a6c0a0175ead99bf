// SPDX-License-Identifier: MPL-2.0
//! Floating action button bound to a single message.
//!
//! An [`ActionButton`] is either a text label or an icon glyph. It emits the
//! same message on every press (no debouncing, no disabled state) and carries
//! a visibility flag that the owning screen flips directly; a hidden button
//! renders as empty space and cannot be pressed.
//!
//! Both variants share one look: opaque white background, tint-colored
//! foreground, rounded corners (10 for labels, 5 for icons). Icon glyphs are
//! resized to 25x30 and tinted light gray once, at construction.

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, tooltip, Container, Space, Text};
use iced::{Color, Element, Length};

/// What the button shows.
#[derive(Debug, Clone)]
pub enum Content {
    Label(String),
    /// `None` when the glyph could not be rasterized; the button stays usable.
    Icon(Option<Handle>),
}

#[derive(Debug, Clone)]
pub struct ActionButton<Message> {
    content: Content,
    on_press: Message,
    visible: bool,
    tooltip: Option<String>,
}

impl<Message: Clone> ActionButton<Message> {
    /// Text button emitting `on_press` on every tap.
    pub fn label(text: impl Into<String>, on_press: Message) -> Self {
        Self {
            content: Content::Label(text.into()),
            on_press,
            visible: true,
            tooltip: None,
        }
    }

    /// Icon-only button emitting `on_press` on every tap.
    pub fn icon(glyph: Glyph, on_press: Message) -> Self {
        let handle = glyph.handle(
            sizing::ACTION_ICON_WIDTH as u32,
            sizing::ACTION_ICON_HEIGHT as u32,
            palette::GRAY_200,
        );
        Self {
            content: Content::Icon(handle),
            on_press,
            visible: true,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tip: impl Into<String>) -> Self {
        self.tooltip = Some(tip.into());
        self
    }

    /// Message emitted by one tap.
    pub fn press(&self) -> Message {
        self.on_press.clone()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn corner_radius(&self) -> f32 {
        match self.content {
            Content::Label(_) => radius::LABEL_BUTTON,
            Content::Icon(_) => radius::ICON_BUTTON,
        }
    }

    pub fn view<'a>(&'a self, tint: Color) -> Element<'a, Message>
    where
        Message: 'a,
    {
        if !self.visible {
            return Space::new().into();
        }

        let inner: Element<'a, Message> = match &self.content {
            Content::Label(text) => Text::new(text.as_str())
                .size(typography::BODY_LG)
                .into(),
            Content::Icon(Some(handle)) => icons::sized(
                handle.clone(),
                sizing::ACTION_ICON_WIDTH,
                sizing::ACTION_ICON_HEIGHT,
            )
            .into(),
            Content::Icon(None) => Space::new()
                .width(Length::Fixed(sizing::ACTION_ICON_WIDTH))
                .height(Length::Fixed(sizing::ACTION_ICON_HEIGHT))
                .into(),
        };

        let (width, padding) = match self.content {
            Content::Label(_) => (Length::Shrink, [0.0, spacing::LG]),
            Content::Icon(_) => (Length::Fixed(sizing::ICON_BUTTON), [0.0, 0.0]),
        };

        let body = Container::new(inner)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .height(Length::Fill)
            .padding(padding);

        let pressable = button(body)
            .on_press(self.press())
            .width(width)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding(0)
            .style(styles::button::action(tint, self.corner_radius()));

        match &self.tooltip {
            Some(tip) => {
                styles::tooltip::styled(pressable, tip.as_str(), tooltip::Position::Left).into()
            }
            None => pressable.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Track,
        Clear,
    }

    #[test]
    fn press_emits_bound_message_every_time() {
        let button = ActionButton::label("Build route", Msg::Track);
        assert_eq!(button.press(), Msg::Track);
        assert_eq!(button.press(), Msg::Track);
    }

    #[test]
    fn label_and_icon_use_distinct_radii() {
        let label = ActionButton::label("Build route", Msg::Track);
        let icon = ActionButton::icon(Glyph::MapPinSlash, Msg::Clear);
        assert_eq!(label.corner_radius(), 10.0);
        assert_eq!(icon.corner_radius(), 5.0);
    }

    #[test]
    fn icon_is_prepared_at_construction() {
        let icon = ActionButton::icon(Glyph::MapPinSlash, Msg::Clear);
        assert!(matches!(icon.content(), Content::Icon(Some(_))));
    }

    #[test]
    fn visibility_flag_is_toggled_directly() {
        let mut button = ActionButton::label("Build route", Msg::Track);
        assert!(button.is_visible());
        button.set_visible(false);
        assert!(!button.is_visible());
        button.set_visible(true);
        assert!(button.is_visible());
    }

    #[test]
    fn view_renders_in_both_states() {
        let mut button = ActionButton::label("Build route", Msg::Track).with_tooltip("Route");
        let _ = button.view(palette::TINT);
        button.set_visible(false);
        let _ = button.view(palette::TINT);
    }
}
