// SPDX-License-Identifier: MPL-2.0
//! Modal prompt asking for the title of a new pin.
//!
//! Opened by a long-press; confirming adds a pin at the pressed coordinate
//! with whatever text was entered (empty titles are allowed), cancelling
//! discards it.

use crate::app::i18n::fluent::I18n;
use crate::domain::Coordinate;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text_input, Column, Container, Id, Row, Space, Text};
use iced::{Element, Length};

/// Widget id of the title input, focused when the prompt opens.
pub const INPUT_ID: &str = "pin-title-input";

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TitleChanged(String),
    Cancel,
    Confirm,
}

/// Outcome of a prompt interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Still open.
    Editing,
    Cancelled,
    /// Create a pin with this coordinate and title.
    Confirmed { coordinate: Coordinate, title: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PinPrompt {
    coordinate: Coordinate,
    title: String,
}

impl PinPrompt {
    #[must_use]
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            title: String::new(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn update(&mut self, message: Message) -> Outcome {
        match message {
            Message::TitleChanged(title) => {
                self.title = title;
                Outcome::Editing
            }
            Message::Cancel => Outcome::Cancelled,
            Message::Confirm => Outcome::Confirmed {
                coordinate: self.coordinate,
                title: self.title.clone(),
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n, colors: ColorScheme) -> Element<'a, Message> {
        let input = text_input(&i18n.tr("pin-prompt-placeholder"), &self.title)
            .id(Id::new(INPUT_ID))
            .on_input(Message::TitleChanged)
            .on_submit(Message::Confirm)
            .padding(spacing::XS)
            .size(typography::BODY);

        let cancel = button(Text::new(i18n.tr("pin-prompt-cancel")).size(typography::BODY))
            .on_press(Message::Cancel)
            .padding([spacing::XXS, spacing::SM])
            .style(button::secondary);
        let confirm = button(Text::new(i18n.tr("pin-prompt-confirm")).size(typography::BODY))
            .on_press(Message::Confirm)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::primary);

        let actions = Row::new()
            .spacing(spacing::XS)
            .push(Space::new().width(Length::Fill))
            .push(cancel)
            .push(confirm);

        let card = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(i18n.tr("pin-prompt-title")).size(typography::TITLE_MD))
                .push(input)
                .push(actions),
        )
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::PROMPT_WIDTH))
        .style(styles::container::panel(colors));

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::scrim(colors))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: Coordinate = Coordinate::new(55.76, 37.62);

    #[test]
    fn confirm_returns_entered_title() {
        let mut prompt = PinPrompt::new(AT);
        assert_eq!(
            prompt.update(Message::TitleChanged("Home".into())),
            Outcome::Editing
        );
        assert_eq!(
            prompt.update(Message::Confirm),
            Outcome::Confirmed {
                coordinate: AT,
                title: "Home".into()
            }
        );
    }

    #[test]
    fn empty_title_is_accepted() {
        let mut prompt = PinPrompt::new(AT);
        assert_eq!(
            prompt.update(Message::Confirm),
            Outcome::Confirmed {
                coordinate: AT,
                title: String::new()
            }
        );
    }

    #[test]
    fn cancel_discards() {
        let mut prompt = PinPrompt::new(AT);
        prompt.update(Message::TitleChanged("Work".into()));
        assert_eq!(prompt.update(Message::Cancel), Outcome::Cancelled);
    }
}
