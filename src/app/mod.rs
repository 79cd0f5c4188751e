// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the deck and the view.
//!
//! The `App` struct wires together the deck domain (loader, navigator,
//! panels, swipe detection), localization and settings, and translates
//! messages into state changes and scroll operations.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Pointer};
pub use update::SLIDE_SCROLLABLE_ID;

use crate::deck::gesture::SwipeTracker;
use crate::deck::panels::PanelState;
use crate::deck::{
    load_deck, sample, Container, DeckSource, DefaultFetcher, Manifest, ManifestError,
    SlideNavigator,
};
use crate::i18n::fluent::I18n;
use crate::ui::surface::DisplayState;
use crate::ui::theming::ThemeMode;
use iced::touch::Finger;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// i18n key of a warning raised while reading settings.
    config_warning: Option<String>,
    /// Where the fragments come from, once a manifest was built.
    source: Option<DeckSource>,
    /// The configured deck could not be turned into a manifest.
    manifest_error: Option<ManifestError>,
    deck: Container,
    navigator: SlideNavigator,
    display: DisplayState,
    panels: PanelState,
    swipe: SwipeTracker,
    /// Finger whose contact started the current swipe.
    active_finger: Option<Finger>,
    /// Last known horizontal cursor position.
    cursor_x: Option<f32>,
    failure_details_visible: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source)
            .field("ready", &self.navigator.is_ready())
            .field("position", &self.navigator.position())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the deck source and manifest from the command line and settings.
///
/// `--sample` wins over everything, then `--deck-dir`, then `--base-url`,
/// then the `[deck]` section of the settings file.
///
/// # Errors
///
/// Returns the [`ManifestError`] of an unusable base URL, pattern or
/// fragment list.
pub fn resolve_manifest(
    flags: &Flags,
    deck: &config::DeckConfig,
) -> Result<(DeckSource, Manifest), ManifestError> {
    if flags.sample {
        return Ok((DeckSource::Sample, sample::manifest()?));
    }

    let mut deck = deck.clone();
    if let Some(dir) = &flags.deck_dir {
        deck.deck_dir = Some(PathBuf::from(dir));
    } else if let Some(url) = &flags.base_url {
        deck.base_url = Some(url.clone());
        deck.deck_dir = None;
    }

    Ok((deck.source()?, deck.manifest()?))
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            config_warning: None,
            source: None,
            manifest_error: None,
            deck: Container::Loading,
            navigator: SlideNavigator::new(),
            display: DisplayState::default(),
            panels: PanelState::new(),
            swipe: SwipeTracker::default(),
            active_finger: None,
            cursor_x: None,
            failure_details_visible: false,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the ordered deck load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config_warning,
            swipe: SwipeTracker::new(config.navigation.threshold()),
            ..Self::default()
        };

        let task = match resolve_manifest(&flags, &config.deck) {
            Ok((source, manifest)) => {
                tracing::info!(?source, slides = manifest.len(), "deck source resolved");
                app.source = Some(source);
                Task::perform(
                    async move { load_deck(&DefaultFetcher::new(), &manifest).await },
                    Message::DeckLoaded,
                )
            }
            Err(err) => {
                tracing::error!(%err, "cannot build the slide manifest");
                app.manifest_error = Some(err);
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.deck.deck().and_then(|deck| deck.title()) {
            Some(deck_title) => format!("{deck_title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            deck: &mut self.deck,
            navigator: &mut self.navigator,
            display: &mut self.display,
            panels: &mut self.panels,
            swipe: &mut self.swipe,
            active_finger: &mut self.active_finger,
            cursor_x: &mut self.cursor_x,
            failure_details_visible: &mut self.failure_details_visible,
        };

        match message {
            Message::DeckLoaded(result) => update::handle_deck_loaded(&mut ctx, result),
            Message::Command(command) => update::handle_command(&mut ctx, command),
            Message::Slide(slide_message) => update::handle_slide_message(&mut ctx, slide_message),
            Message::Pointer(pointer) => update::handle_pointer(&mut ctx, pointer),
            Message::ToggleFailureDetails => update::handle_toggle_failure_details(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            deck: &self.deck,
            display: &self.display,
            panels: &self.panels,
            source: self.source.as_ref(),
            manifest_error: self.manifest_error.as_ref(),
            config_warning: self.config_warning.as_deref(),
            failure_details_visible: self.failure_details_visible,
        })
    }
}
