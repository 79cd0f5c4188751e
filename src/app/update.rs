// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every input source (control bar, keyboard, swipe, call-to-action) ends up
//! in [`handle_command`], so readiness gating and boundary checks live in
//! one place: the [`SlideNavigator`].

use super::message::Pointer;
use crate::deck::gesture::SwipeTracker;
use crate::deck::input::Command;
use crate::deck::panels::PanelState;
use crate::deck::{Container, Deck, LoadFailure, SlideNavigator, Transition};
use crate::ui::slide;
use crate::ui::surface::DisplayState;
use iced::touch::Finger;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

use super::Message;

/// Identifier of the scrollable slide viewport.
pub const SLIDE_SCROLLABLE_ID: &str = "deck-slide-viewport";

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    pub deck: &'a mut Container,
    pub navigator: &'a mut SlideNavigator,
    pub display: &'a mut DisplayState,
    pub panels: &'a mut PanelState,
    pub swipe: &'a mut SwipeTracker,
    pub active_finger: &'a mut Option<Finger>,
    pub cursor_x: &'a mut Option<f32>,
    pub failure_details_visible: &'a mut bool,
}

/// Moves the container out of `Loading` and opens the navigator gate.
///
/// Only the first completion is honored; the container never changes once
/// it holds a deck or a failure.
pub fn handle_deck_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Deck, LoadFailure>,
) -> Task<Message> {
    if !ctx.deck.is_loading() {
        tracing::warn!("ignoring repeated deck load completion");
        return Task::none();
    }

    match result {
        Ok(deck) => {
            let total = deck.len();
            *ctx.display = DisplayState::new(total);
            if ctx.navigator.activate(total, ctx.display) {
                tracing::info!(slides = total, "deck ready");
            }
            *ctx.deck = Container::Ready(deck);
        }
        Err(failure) => {
            tracing::error!(
                position = failure.position,
                location = %failure.location,
                cause = %failure.cause,
                "deck failed to load"
            );
            *ctx.deck = Container::Failed(failure);
        }
    }
    Task::none()
}

/// Applies a navigation or collapse command.
pub fn handle_command(ctx: &mut UpdateContext<'_>, command: Command) -> Task<Message> {
    let transition = match command {
        Command::Advance => ctx.navigator.advance(ctx.display),
        Command::Retreat => ctx.navigator.retreat(ctx.display),
        Command::CollapseAll => {
            let collapsed = ctx.panels.collapse_all();
            if collapsed > 0 {
                tracing::debug!(collapsed, "collapsed expanded panels");
            }
            return Task::none();
        }
    };

    if let Transition::Moved { from, to } = transition {
        tracing::debug!(%from, %to, "slide changed");
    }

    if ctx.display.take_scroll_reset() {
        operation::snap_to(
            Id::new(SLIDE_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        )
    } else {
        Task::none()
    }
}

/// Handles interaction inside the visible slide.
pub fn handle_slide_message(ctx: &mut UpdateContext<'_>, message: slide::Message) -> Task<Message> {
    match message {
        slide::Message::ToggleNote(id) => {
            ctx.panels.toggle_note(&id);
            Task::none()
        }
        slide::Message::TogglePanel(id) => {
            ctx.panels.toggle_panel(&id);
            Task::none()
        }
        slide::Message::CallToAction => handle_command(ctx, Command::Advance),
    }
}

/// Feeds pointer input to the swipe tracker.
///
/// Only the first finger down is tracked; other contacts are ignored until
/// it is lifted or lost. A recognized swipe goes through [`handle_command`]
/// like any other input.
pub fn handle_pointer(ctx: &mut UpdateContext<'_>, pointer: Pointer) -> Task<Message> {
    let swipe = match pointer {
        Pointer::FingerPressed { finger, x } => {
            if ctx.active_finger.is_none() {
                *ctx.active_finger = Some(finger);
                ctx.swipe.begin(x);
            }
            None
        }
        Pointer::FingerLifted { finger, x } => {
            if *ctx.active_finger == Some(finger) {
                *ctx.active_finger = None;
                ctx.swipe.finish(x)
            } else {
                None
            }
        }
        Pointer::FingerLost { finger } => {
            if *ctx.active_finger == Some(finger) {
                *ctx.active_finger = None;
                ctx.swipe.cancel();
            }
            None
        }
        Pointer::CursorMoved { x } => {
            *ctx.cursor_x = Some(x);
            None
        }
        Pointer::ButtonPressed => {
            if ctx.active_finger.is_none() {
                if let Some(x) = *ctx.cursor_x {
                    ctx.swipe.begin(x);
                }
            }
            None
        }
        Pointer::ButtonReleased => match (*ctx.active_finger, *ctx.cursor_x) {
            (None, Some(x)) => ctx.swipe.finish(x),
            _ => None,
        },
    };

    match swipe {
        Some(swipe) => {
            tracing::debug!(?swipe, "swipe recognized");
            handle_command(ctx, swipe.command())
        }
        None => Task::none(),
    }
}

pub fn handle_toggle_failure_details(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.failure_details_visible = !*ctx.failure_details_visible;
    Task::none()
}
