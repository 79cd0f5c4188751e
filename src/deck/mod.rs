// SPDX-License-Identifier: MPL-2.0
//! Slide deck domain: loading, navigation, and input mapping.
//!
//! # Architecture
//!
//! - [`manifest`]: ordered fragment locations built from configuration
//! - [`loader`]: ordered asynchronous fetch pipeline with a single failure path
//! - [`navigator`]: bounded position state machine gated by readiness
//! - [`panels`]: expand/collapse flags for detail panels and inline notes
//! - [`gesture`] and [`input`]: swipe and keyboard mapping to [`input::Command`]
//! - [`sample`]: the deck embedded in the binary
//!
//! Nothing in this module renders anything. The navigator talks to a
//! [`navigator::SlideSurface`] implemented by the UI layer.

pub mod fragment;
pub mod gesture;
pub mod input;
pub mod loader;
pub mod manifest;
pub mod navigator;
pub mod panels;
pub mod sample;

pub use fragment::Fragment;
pub use loader::{load_deck, DefaultFetcher, FragmentFetcher, LoadError, LoadFailure};
pub use manifest::{DeckSource, FragmentLocation, Manifest, ManifestError};
pub use navigator::{Controls, Position, SlideNavigator, SlideSurface, Transition};

use panels::{NoteId, PanelId};
use std::collections::HashSet;

/// Opaque reference to one slide, resolved when the deck is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideHandle(usize);

impl SlideHandle {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based index into the deck.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fully loaded slides, in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Fragment>,
}

impl Deck {
    #[must_use]
    pub fn new(slides: Vec<Fragment>) -> Self {
        Self { slides }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slides(&self) -> &[Fragment] {
        &self.slides
    }

    #[must_use]
    pub fn slide(&self, handle: SlideHandle) -> Option<&Fragment> {
        self.slides.get(handle.index())
    }

    /// Title of the first slide, used as the deck title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.slides.first().map(|slide| slide.title.as_str())
    }

    /// Panel identifiers that appear on more than one panel.
    #[must_use]
    pub fn duplicate_panel_ids(&self) -> Vec<&PanelId> {
        duplicates(
            self.slides
                .iter()
                .flat_map(|slide| slide.panels.iter().map(|panel| &panel.id)),
        )
    }

    /// Note identifiers that appear on more than one note.
    #[must_use]
    pub fn duplicate_note_ids(&self) -> Vec<&NoteId> {
        duplicates(
            self.slides
                .iter()
                .flat_map(|slide| slide.notes.iter().map(|note| &note.id)),
        )
    }
}

fn duplicates<'a, T: Eq + std::hash::Hash + Ord + 'a>(
    ids: impl Iterator<Item = &'a T>,
) -> Vec<&'a T> {
    let mut seen = HashSet::new();
    let mut repeated: Vec<&T> = ids.filter(|id| !seen.insert(*id)).collect();
    repeated.sort();
    repeated.dedup();
    repeated
}

/// Content of the slide container.
///
/// Only the completion of the load sequence moves it out of `Loading`, and
/// it never leaves `Ready` or `Failed` afterwards.
#[derive(Debug, Clone, Default)]
pub enum Container {
    #[default]
    Loading,
    Ready(Deck),
    Failed(LoadFailure),
}

impl Container {
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        match self {
            Container::Ready(deck) => Some(deck),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            Container::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Container::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(source: &str) -> Fragment {
        Fragment::parse(source).expect("valid fragment")
    }

    #[test]
    fn deck_title_comes_from_first_slide() {
        let deck = Deck::new(vec![
            fragment("title = \"AI Intelligence Briefing\""),
            fragment("title = \"Overview\""),
        ]);

        assert_eq!(deck.title(), Some("AI Intelligence Briefing"));
        assert_eq!(deck.len(), 2);
        assert_eq!(
            deck.slide(SlideHandle::new(1)).map(|s| s.title.as_str()),
            Some("Overview")
        );
        assert!(deck.slide(SlideHandle::new(2)).is_none());
    }

    #[test]
    fn duplicate_panel_ids_are_reported_once() {
        let panel = "[[panels]]\nid = \"dive\"\nlabel = \"Deep Dive\"\n";
        let deck = Deck::new(vec![
            fragment(&format!("title = \"a\"\n{panel}")),
            fragment(&format!("title = \"b\"\n{panel}")),
            fragment(&format!("title = \"c\"\n{panel}")),
        ]);

        assert_eq!(deck.duplicate_panel_ids(), vec![&PanelId::new("dive")]);
        assert!(deck.duplicate_note_ids().is_empty());
    }

    #[test]
    fn container_starts_loading() {
        let container = Container::default();
        assert!(container.is_loading());
        assert!(container.deck().is_none());
        assert!(container.failure().is_none());
    }
}
