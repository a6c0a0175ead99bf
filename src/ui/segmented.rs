// SPDX-License-Identifier: MPL-2.0
//! Vertical two-state (or more) segmented control with glyph cells.
//!
//! Used for the transport-mode and map-style rails on the map screen. The
//! control owns its current value; the screen reads it back with
//! [`Segmented::selected`].

use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, tooltip, Column, Container, Space};
use iced::{Element, Length};

#[derive(Debug, Clone)]
struct Cell<T> {
    value: T,
    tooltip: String,
    /// Glyph drawn on the selected (brand-colored) background.
    on_selected: Option<Handle>,
    /// Glyph drawn on the neutral background.
    on_neutral: Option<Handle>,
}

#[derive(Debug, Clone)]
pub struct Segmented<T> {
    cells: Vec<Cell<T>>,
    selected: T,
}

impl<T: Copy + PartialEq> Segmented<T> {
    /// Builds a control from `(value, glyph, tooltip)` triples.
    pub fn new(segments: impl IntoIterator<Item = (T, Glyph, String)>, selected: T) -> Self {
        let side = sizing::SEGMENT_ICON as u32;
        let cells = segments
            .into_iter()
            .map(|(value, glyph, tooltip)| Cell {
                value,
                tooltip,
                on_selected: glyph.handle(side, side, palette::WHITE),
                on_neutral: glyph.handle(side, side, palette::GRAY_700),
            })
            .collect();
        Self { cells, selected }
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    /// Selects `value`. Returns `true` if the selection changed.
    pub fn select(&mut self, value: T) -> bool {
        let known = self.cells.iter().any(|cell| cell.value == value);
        if !known || self.selected == value {
            return false;
        }
        self.selected = value;
        true
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn view<'a, Message>(&'a self, on_select: impl Fn(T) -> Message) -> Element<'a, Message>
    where
        Message: Clone + 'a,
        T: 'a,
    {
        let column = self.cells.iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, cell| {
                let is_selected = cell.value == self.selected;
                let handle = if is_selected {
                    &cell.on_selected
                } else {
                    &cell.on_neutral
                };
                let glyph: Element<'a, Message> = match handle {
                    Some(handle) => {
                        icons::sized(handle.clone(), sizing::SEGMENT_ICON, sizing::SEGMENT_ICON)
                            .into()
                    }
                    None => Space::new()
                        .width(Length::Fixed(sizing::SEGMENT_ICON))
                        .height(Length::Fixed(sizing::SEGMENT_ICON))
                        .into(),
                };

                let cell_button = button(
                    Container::new(glyph)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(Horizontal::Center)
                        .align_y(Vertical::Center),
                )
                .width(Length::Fixed(sizing::ICON_BUTTON))
                .height(Length::Fixed(sizing::ICON_BUTTON))
                .padding(0)
                .on_press(on_select(cell.value))
                .style(if is_selected {
                    styles::button::selected
                } else {
                    styles::button::unselected
                });

                column.push(styles::tooltip::styled(
                    cell_button,
                    cell.tooltip.as_str(),
                    tooltip::Position::Left,
                ))
            },
        );

        Container::new(column)
            .padding(spacing::XXS)
            .style(styles::container::rail)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    fn transport() -> Segmented<TransportMode> {
        Segmented::new(
            [
                (TransportMode::Automobile, Glyph::Car, "Car".to_string()),
                (TransportMode::Walking, Glyph::FigureWalk, "Walk".to_string()),
            ],
            TransportMode::Automobile,
        )
    }

    #[test]
    fn select_reports_changes_only() {
        let mut control = transport();
        assert_eq!(control.len(), 2);
        assert!(!control.select(TransportMode::Automobile));
        assert!(control.select(TransportMode::Walking));
        assert_eq!(control.selected(), TransportMode::Walking);
        assert!(!control.select(TransportMode::Walking));
    }

    #[test]
    fn unknown_value_is_ignored() {
        let mut control = Segmented::new(
            [(TransportMode::Automobile, Glyph::Car, String::new())],
            TransportMode::Automobile,
        );
        assert!(!control.select(TransportMode::Walking));
        assert_eq!(control.selected(), TransportMode::Automobile);
    }

    #[test]
    fn view_builds() {
        let control = transport();
        let _: Element<'_, TransportMode> = control.view(|mode| mode);
    }
}
