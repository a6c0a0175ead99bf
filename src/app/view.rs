// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::ui::map_screen;
use crate::ui::theming::ColorScheme;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub map: &'a map_screen::State,
}

/// Renders the map screen filling the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let map = ctx
        .map
        .view(map_screen::ViewEnv {
            i18n: ctx.i18n,
            colors: ctx.colors,
        })
        .map(Message::Map);

    Container::new(map)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
