// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar: previous control, counter, next control.

use crate::deck::input::Command;
use crate::deck::Controls;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Localized control labels.
#[derive(Debug, Clone)]
pub struct Labels {
    pub previous: String,
    pub next: String,
}

/// Renders the bar. A disabled control emits nothing.
pub fn view(counter: &str, controls: Controls, labels: Labels) -> Element<'_, Command> {
    let previous = button(Text::new(labels.previous).size(typography::BODY))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::navigation)
        .on_press_maybe(controls.retreat_enabled.then_some(Command::Retreat));

    let next = button(Text::new(labels.next).size(typography::BODY))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::navigation)
        .on_press_maybe(controls.advance_enabled.then_some(Command::Advance));

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(counter).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(next);

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::CONTROL_BAR_HEIGHT)
        .padding([spacing::SM, spacing::LG])
        .align_y(alignment::Vertical::Center)
        .style(container_styles::control_bar)
        .into()
}
