// SPDX-License-Identifier: MPL-2.0
//! Rendering of a single slide fragment.
//!
//! Toggle labels are derived from [`PanelState`] on every render, so a
//! collapse always brings back the `↓` label without extra bookkeeping.

use crate::deck::fragment::{DetailPanel, InlineNote, SourceLink};
use crate::deck::panels::{toggle_label, NoteId, PanelId, PanelState};
use crate::deck::Fragment;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleNote(NoteId),
    TogglePanel(PanelId),
    /// The title slide's call-to-action button was pressed.
    CallToAction,
}

/// Localized strings used by the slide view.
#[derive(Debug, Clone)]
pub struct Labels {
    pub sources: String,
}

pub fn view<'a>(
    fragment: &'a Fragment,
    panels: &PanelState,
    labels: Labels,
) -> Element<'a, Message> {
    let is_title_slide = fragment.call_to_action.is_some();
    let title_size = if is_title_slide {
        typography::DISPLAY
    } else {
        typography::TITLE_LG
    };

    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .max_width(sizing::SLIDE_MAX_WIDTH)
        .push(Text::new(fragment.title.as_str()).size(title_size));

    if let Some(subtitle) = &fragment.subtitle {
        column = column.push(Text::new(subtitle.as_str()).size(typography::TITLE_MD));
    }
    if let Some(tagline) = &fragment.tagline {
        column = column.push(secondary_text(tagline.as_str(), typography::BODY));
    }

    for paragraph in &fragment.body {
        column = column.push(Text::new(paragraph.as_str()).size(typography::BODY_LG));
    }

    for note in &fragment.notes {
        column = column.push(note_view(note, panels.is_note_expanded(&note.id)));
    }

    for panel in &fragment.panels {
        column = column.push(panel_view(panel, panels.is_panel_expanded(&panel.id)));
    }

    if !fragment.sources.is_empty() {
        column = column.push(sources_view(&fragment.sources, labels.sources));
    }

    if let Some(label) = &fragment.call_to_action {
        column = column.push(
            button(Text::new(label.as_str()).size(typography::BODY_LG))
                .padding([spacing::XS, spacing::LG])
                .style(button_styles::navigation)
                .on_press(Message::CallToAction),
        );
    }

    let align = if is_title_slide {
        alignment::Horizontal::Center
    } else {
        alignment::Horizontal::Left
    };

    Container::new(column.align_x(align))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

fn note_view(note: &InlineNote, expanded: bool) -> Element<'_, Message> {
    let toggle = button(Text::new(toggle_label(&note.label, expanded)).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(button_styles::toggle)
        .on_press(Message::ToggleNote(note.id.clone()));

    let mut column = Column::new().spacing(spacing::XXS).push(toggle);
    if expanded {
        column = column.push(
            Container::new(Text::new(note.text.as_str()).size(typography::BODY))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(container_styles::inline_note),
        );
    }
    column.into()
}

fn panel_view(panel: &DetailPanel, expanded: bool) -> Element<'_, Message> {
    let toggle = button(Text::new(toggle_label(&panel.label, expanded)).size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::XS])
        .style(button_styles::toggle)
        .on_press(Message::TogglePanel(panel.id.clone()));

    let mut column = Column::new().spacing(spacing::XS).push(toggle);
    if expanded {
        let mut body = Column::new().spacing(spacing::XS);
        if let Some(heading) = &panel.heading {
            body = body.push(Text::new(heading.as_str()).size(typography::TITLE_MD));
        }
        for item in &panel.items {
            body = body.push(Text::new(format!("• {item}")).size(typography::BODY));
        }
        column = column.push(
            Container::new(body)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(container_styles::detail_panel),
        );
    }
    column.into()
}

fn sources_view(sources: &[SourceLink], heading: String) -> Element<'_, Message> {
    sources
        .iter()
        .fold(
            Column::new()
                .spacing(spacing::XXS)
                .push(secondary_text(heading, typography::CAPTION)),
            |column, source| {
                column.push(secondary_text(
                    format!("{}: {}", source.label, source.url),
                    typography::CAPTION,
                ))
            },
        )
        .into()
}

fn secondary_text<'a>(content: impl Into<String>, size: f32) -> Text<'a> {
    Text::new(content.into())
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        })
}
