// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the previous/next controls and the call-to-action.
///
/// Uses the brand colors in both themes and greys out when the control is
/// disabled at a deck boundary.
pub fn navigation(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Link-like style for the inline note and detail panel toggles.
pub fn toggle(theme: &Theme, status: button::Status) -> button::Style {
    let accent = if matches!(theme, Theme::Light) {
        palette::PRIMARY_600
    } else {
        palette::PRIMARY_400
    };
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_800,
        _ => accent,
    };

    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color,
        border: Border {
            color: accent,
            width: if matches!(status, button::Status::Hovered) {
                1.0
            } else {
                0.0
            },
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
