// SPDX-License-Identifier: MPL-2.0
//! Slide fragment format.
//!
//! A fragment is one slide, authored as a small TOML document:
//!
//! ```toml
//! title = "Claude 4"
//! subtitle = "Seven hours of autonomous coding"
//! body = ["First paragraph.", "Second paragraph."]
//!
//! [[notes]]
//! id = "marathon-detail"
//! label = "See details"
//! text = "Inline explanation shown under the paragraph."
//!
//! [[panels]]
//! id = "claude4-deep-dive"
//! label = "Deep Dive"
//! heading = "Technical Analysis"
//! items = ["Point one", "Point two"]
//!
//! [[sources]]
//! label = "Anthropic announcement"
//! url = "https://www.anthropic.com/news/claude-4"
//! ```

use super::panels::{NoteId, PanelId};
use serde::Deserialize;

/// Content of a single slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fragment {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Small print under the title (a date, a byline).
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub notes: Vec<InlineNote>,
    #[serde(default)]
    pub panels: Vec<DetailPanel>,
    #[serde(default)]
    pub sources: Vec<SourceLink>,
    /// Label of a button that advances the deck (title slides).
    #[serde(default)]
    pub call_to_action: Option<String>,
}

/// Short explanation revealed inline by its toggle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InlineNote {
    pub id: NoteId,
    pub label: String,
    pub text: String,
}

/// Deep-dive panel revealed below the slide body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailPanel {
    pub id: PanelId,
    pub label: String,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Citation shown at the bottom of a slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceLink {
    pub label: String,
    pub url: String,
}

impl Fragment {
    /// Parses a fragment document.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the document is malformed or lacks a title.
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}
