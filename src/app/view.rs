// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The view reads the deck container and the display state written by the
//! navigator; it never decides what is visible on its own.

use super::update::SLIDE_SCROLLABLE_ID;
use super::Message;
use crate::deck::panels::PanelState;
use crate::deck::{Container as DeckContainer, DeckSource, LoadError, LoadFailure, ManifestError};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::surface::DisplayState;
use crate::ui::{controls, slide};
use iced::widget::{scrollable, text, Column, Container, Id, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub deck: &'a DeckContainer,
    pub display: &'a DisplayState,
    pub panels: &'a PanelState,
    pub source: Option<&'a DeckSource>,
    pub manifest_error: Option<&'a ManifestError>,
    pub config_warning: Option<&'a str>,
    pub failure_details_visible: bool,
}

/// Renders the deck, the loading placeholder, or the single diagnostic.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let main: Element<'_, Message> = if let Some(error) = ctx.manifest_error {
        view_manifest_error(ctx.i18n, error, ctx.failure_details_visible)
    } else {
        match ctx.deck {
            DeckContainer::Failed(failure) => {
                view_load_failure(ctx.i18n, failure, ctx.source, ctx.failure_details_visible)
            }
            DeckContainer::Loading => with_controls(view_loading(ctx.i18n), &ctx),
            DeckContainer::Ready(_) => with_controls(view_slide(&ctx), &ctx),
        }
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.config_warning {
        column = column.push(view_warning_banner(&ctx.i18n.tr(key)));
    }
    column = column.push(main);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Stacks `content` above the control bar.
fn with_controls<'a>(content: Element<'a, Message>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let bar = controls::view(
        ctx.display.counter(),
        ctx.display.controls(),
        controls::Labels {
            previous: ctx.i18n.tr("nav-previous"),
            next: ctx.i18n.tr("nav-next"),
        },
    )
    .map(Message::Command);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(bar)
        .into()
}

fn view_loading<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("loading-deck")).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_slide<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let fragment = ctx
        .display
        .visible_slide()
        .and_then(|handle| ctx.deck.deck().and_then(|deck| deck.slide(handle)));

    let Some(fragment) = fragment else {
        return Space::new().into();
    };

    let labels = slide::Labels {
        sources: ctx.i18n.tr("slide-sources"),
    };
    let content = slide::view(fragment, ctx.panels, labels).map(Message::Slide);

    scrollable(content)
        .id(Id::new(SLIDE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_load_failure<'a>(
    i18n: &I18n,
    failure: &LoadFailure,
    source: Option<&DeckSource>,
    details_visible: bool,
) -> Element<'a, Message> {
    let mut display = ErrorDisplay::new(ErrorSeverity::Error)
        .title(i18n.tr("load-failure-title"))
        .message(i18n.tr("load-failure-message"));

    match source {
        Some(DeckSource::Server(url)) => {
            display = display.hint(
                i18n.tr_with_args("load-failure-server-hint", &[("url", url.as_str())]),
            );
        }
        Some(DeckSource::Directory(path)) => {
            let path = path.display().to_string();
            display = display
                .hint(i18n.tr_with_args("load-failure-directory-hint", &[("path", path.as_str())]));
        }
        Some(DeckSource::Sample) | None => {}
    }
    if !matches!(source, Some(DeckSource::Sample)) {
        display = display.hint(i18n.tr("load-failure-fallback-hint"));
    }

    let position = failure.position.to_string();
    let location = failure.location.to_string();
    let cause = localized_cause(i18n, &failure.cause);
    let details = format!(
        "{}\n{}",
        i18n.tr_with_args(
            "load-failure-details",
            &[
                ("position", position.as_str()),
                ("location", location.as_str()),
                ("cause", cause.as_str()),
            ],
        ),
        failure.cause
    );

    centered_error_view(
        display
            .details(details)
            .details_visible(details_visible)
            .on_toggle_details(Message::ToggleFailureDetails)
            .details_labels(
                i18n.tr("error-details-show"),
                i18n.tr("error-details-hide"),
                i18n.tr("error-details-technical-heading"),
            ),
    )
}

fn view_manifest_error<'a>(
    i18n: &I18n,
    error: &ManifestError,
    details_visible: bool,
) -> Element<'a, Message> {
    centered_error_view(
        ErrorDisplay::new(ErrorSeverity::Error)
            .title(i18n.tr("manifest-error-title"))
            .message(i18n.tr("manifest-error-message"))
            .hint(i18n.tr("load-failure-fallback-hint"))
            .details(error.to_string())
            .details_visible(details_visible)
            .on_toggle_details(Message::ToggleFailureDetails)
            .details_labels(
                i18n.tr("error-details-show"),
                i18n.tr("error-details-hide"),
                i18n.tr("error-details-technical-heading"),
            ),
    )
}

/// Localized one-line description of a load error.
pub fn localized_cause(i18n: &I18n, cause: &LoadError) -> String {
    match cause {
        LoadError::Status(status) => {
            let status = status.to_string();
            i18n.tr_with_args(cause.i18n_key(), &[("status", status.as_str())])
        }
        _ => i18n.tr(cause.i18n_key()),
    }
}

fn view_warning_banner<'a>(message: &str) -> Element<'a, Message> {
    Container::new(
        Text::new(format!("{} {message}", ErrorSeverity::Warning.glyph()))
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WARNING_500),
            }),
    )
    .width(Length::Fill)
    .padding([spacing::XXS, spacing::MD])
    .into()
}
