// SPDX-License-Identifier: MPL-2.0
//! Expand/collapse state for detail panels and inline notes.
//!
//! Both kinds are plain per-identifier flags: the last toggle wins and
//! [`PanelState::collapse_all`] clears everything at once.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Marker appended to a collapsed toggle label.
pub const COLLAPSED_MARKER: char = '↓';
/// Marker appended to an expanded toggle label.
pub const EXPANDED_MARKER: char = '↑';

/// Identifier of a deep-dive detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

/// Identifier of an inline note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tracks which panels and notes are expanded.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    panels: HashSet<PanelId>,
    notes: HashSet<NoteId>,
}

impl PanelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a detail panel and returns its new expanded state.
    pub fn toggle_panel(&mut self, id: &PanelId) -> bool {
        toggle(&mut self.panels, id)
    }

    /// Toggles an inline note and returns its new expanded state.
    pub fn toggle_note(&mut self, id: &NoteId) -> bool {
        toggle(&mut self.notes, id)
    }

    #[must_use]
    pub fn is_panel_expanded(&self, id: &PanelId) -> bool {
        self.panels.contains(id)
    }

    #[must_use]
    pub fn is_note_expanded(&self, id: &NoteId) -> bool {
        self.notes.contains(id)
    }

    /// Number of expanded panels and notes combined.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.panels.len() + self.notes.len()
    }

    /// Collapses every panel and note, returning how many were expanded.
    pub fn collapse_all(&mut self) -> usize {
        let collapsed = self.expanded_count();
        self.panels.clear();
        self.notes.clear();
        collapsed
    }
}

fn toggle<T: Clone + Eq + std::hash::Hash>(set: &mut HashSet<T>, id: &T) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.clone());
        true
    }
}

/// Label of a toggle control for its current state.
#[must_use]
pub fn toggle_label(label: &str, expanded: bool) -> String {
    let marker = if expanded {
        EXPANDED_MARKER
    } else {
        COLLAPSED_MARKER
    };
    format!("{} {marker}", label.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_panel_flips_state() {
        let mut state = PanelState::new();
        let id = PanelId::new("claude4-deep-dive");

        assert!(state.toggle_panel(&id));
        assert!(state.is_panel_expanded(&id));
        assert!(!state.toggle_panel(&id));
        assert!(!state.is_panel_expanded(&id));
    }

    #[test]
    fn panels_and_notes_are_independent() {
        let mut state = PanelState::new();
        state.toggle_panel(&PanelId::new("shared"));

        assert!(!state.is_note_expanded(&NoteId::new("shared")));
        assert_eq!(state.expanded_count(), 1);
    }

    #[test]
    fn collapse_all_clears_both_kinds() {
        let mut state = PanelState::new();
        state.toggle_panel(&PanelId::new("a"));
        state.toggle_panel(&PanelId::new("b"));
        state.toggle_note(&NoteId::new("n"));

        assert_eq!(state.collapse_all(), 3);
        assert_eq!(state.expanded_count(), 0);
        assert_eq!(state.collapse_all(), 0);
    }

    #[test]
    fn toggle_label_tracks_state() {
        assert_eq!(toggle_label("Deep Dive", false), "Deep Dive ↓");
        assert_eq!(toggle_label("Deep Dive ", true), "Deep Dive ↑");
    }
}
