// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[deck]` - Where slide fragments come from
//! - `[navigation]` - Swipe detection
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `DECKVIEW_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use deckview::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Ordered fragment locations for the configured deck
//! let manifest = config.deck.manifest().expect("usable deck settings");
//! println!("{} slides", manifest.len());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::deck::gesture::SwipeThreshold;
use crate::deck::{DeckSource, Manifest, ManifestError};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Deck location settings.
///
/// `deck_dir` wins over `base_url` when both are set. An explicit
/// `fragments` list wins over `slide_count` + `fragment_pattern`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeckConfig {
    /// Content server the fragments are fetched from.
    #[serde(default = "default_base_url")]
    pub base_url: Option<String>,

    /// Local directory holding the fragments.
    #[serde(default)]
    pub deck_dir: Option<PathBuf>,

    /// Number of slides generated from `fragment_pattern`.
    #[serde(default = "default_slide_count")]
    pub slide_count: Option<usize>,

    /// Fragment name pattern, `{n}` being the slide position.
    #[serde(default = "default_fragment_pattern")]
    pub fragment_pattern: Option<String>,

    /// Explicit fragment names, in presentation order.
    #[serde(default)]
    pub fragments: Vec<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            deck_dir: None,
            slide_count: default_slide_count(),
            fragment_pattern: default_fragment_pattern(),
            fragments: Vec::new(),
        }
    }
}

impl DeckConfig {
    /// Slide count clamped to the supported range.
    #[must_use]
    pub fn effective_slide_count(&self) -> usize {
        self.slide_count
            .unwrap_or(DEFAULT_SLIDE_COUNT)
            .clamp(MIN_SLIDE_COUNT, MAX_SLIDE_COUNT)
    }

    /// Base the fragment names are resolved against.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidBaseUrl`] when no directory is set
    /// and the base URL cannot be used.
    pub fn source(&self) -> std::result::Result<DeckSource, ManifestError> {
        if let Some(dir) = &self.deck_dir {
            return Ok(DeckSource::Directory(dir.clone()));
        }
        DeckSource::server(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
    }

    /// Builds the ordered manifest described by this section.
    ///
    /// # Errors
    ///
    /// Propagates source and pattern errors from the manifest builders.
    pub fn manifest(&self) -> std::result::Result<Manifest, ManifestError> {
        let source = self.source()?;
        if !self.fragments.is_empty() {
            return Manifest::from_names(&source, &self.fragments);
        }
        let pattern = self
            .fragment_pattern
            .as_deref()
            .unwrap_or(DEFAULT_FRAGMENT_PATTERN);
        Manifest::from_pattern(&source, pattern, self.effective_slide_count())
    }
}

/// Navigation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Minimum horizontal swipe distance (logical pixels).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: Option<f32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl NavigationConfig {
    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.swipe_threshold
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Deck location settings.
    #[serde(default)]
    pub deck: DeckConfig,

    /// Navigation settings.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_slide_count() -> Option<usize> {
    Some(DEFAULT_SLIDE_COUNT)
}

fn default_fragment_pattern() -> Option<String> {
    Some(DEFAULT_FRAGMENT_PATTERN.to_string())
}

fn default_swipe_threshold() -> Option<f32> {
    Some(SwipeThreshold::default().value())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
