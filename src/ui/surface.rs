// SPDX-License-Identifier: MPL-2.0
//! Display state written by the slide navigator and read by the view.
//!
//! The navigator never touches widgets directly. It records visibility,
//! counter text and control states here, and the view renders whatever this
//! state says. A requested scroll reset is picked up once by the update loop
//! and turned into a scroll operation on the slide viewport.

use crate::deck::navigator::counter_text;
use crate::deck::{Controls, Position, SlideHandle, SlideSurface};

#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    visible: Vec<bool>,
    counter: Option<String>,
    controls: Controls,
    scroll_reset_pending: bool,
}

impl DisplayState {
    /// Creates a state for `slides` slides, none of them visible.
    #[must_use]
    pub fn new(slides: usize) -> Self {
        Self {
            visible: vec![false; slides],
            ..Self::default()
        }
    }

    /// Handle of the single visible slide, if any.
    #[must_use]
    pub fn visible_slide(&self) -> Option<SlideHandle> {
        let mut marked = self
            .visible
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(|(index, _)| SlideHandle::new(index));
        let first = marked.next();
        debug_assert!(marked.next().is_none(), "more than one visible slide");
        first
    }

    /// Number of slides currently marked visible.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|visible| **visible).count()
    }

    /// Counter text, empty until the deck is ready.
    #[must_use]
    pub fn counter(&self) -> &str {
        self.counter.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Returns and clears a pending scroll reset.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset_pending)
    }
}

impl SlideSurface for DisplayState {
    fn set_visible(&mut self, slide: SlideHandle, visible: bool) {
        if let Some(flag) = self.visible.get_mut(slide.index()) {
            *flag = visible;
        } else {
            tracing::warn!(index = slide.index(), "slide handle outside the deck");
        }
    }

    fn set_counter(&mut self, position: Position, total: usize) {
        self.counter = Some(counter_text(position, total));
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_reset_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideNavigator;

    #[test]
    fn fresh_state_shows_nothing() {
        let state = DisplayState::new(3);
        assert_eq!(state.visible_count(), 0);
        assert!(state.visible_slide().is_none());
        assert_eq!(state.counter(), "");
        assert_eq!(state.controls(), Controls::default());
    }

    #[test]
    fn navigator_drives_display_state() {
        let mut state = DisplayState::new(3);
        let mut navigator = SlideNavigator::new();

        navigator.activate(3, &mut state);
        assert_eq!(state.visible_slide(), Some(SlideHandle::new(0)));
        assert_eq!(state.counter(), "1 / 3");
        assert!(!state.take_scroll_reset());

        navigator.advance(&mut state);
        assert_eq!(state.visible_slide(), Some(SlideHandle::new(1)));
        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.counter(), "2 / 3");
        assert!(state.take_scroll_reset());
        assert!(!state.take_scroll_reset());
    }

    #[test]
    fn out_of_range_handle_is_ignored() {
        let mut state = DisplayState::new(1);
        state.set_visible(SlideHandle::new(5), true);
        assert_eq!(state.visible_count(), 0);
    }
}
