// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::deck::input::Command;
use crate::deck::{Deck, LoadFailure};
use crate::ui::slide;
use iced::touch::Finger;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The ordered load sequence finished.
    DeckLoaded(Result<Deck, LoadFailure>),
    /// A navigation or collapse command from controls or keyboard.
    Command(Command),
    /// Interaction inside the visible slide.
    Slide(slide::Message),
    /// Raw pointer input feeding swipe detection.
    Pointer(Pointer),
    /// Show or hide the technical details of a load failure.
    ToggleFailureDetails,
}

/// Pointer events relevant to swipe detection, reduced to horizontal
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    FingerPressed { finger: Finger, x: f32 },
    FingerLifted { finger: Finger, x: f32 },
    FingerLost { finger: Finger },
    CursorMoved { x: f32 },
    ButtonPressed,
    ButtonReleased,
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DECKVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Content server base URL, overriding the configured one.
    pub base_url: Option<String>,
    /// Local deck directory, overriding the configured source.
    pub deck_dir: Option<String>,
    /// Open the embedded sample deck instead of the configured source.
    pub sample: bool,
}
