// SPDX-License-Identifier: MPL-2.0
//! Slide navigation state machine.
//!
//! [`SlideNavigator`] owns the current [`Position`] and the readiness gate.
//! It never looks at slide content: transitions are expressed against a
//! [`SlideSurface`], the rendering adapter that maps [`SlideHandle`]s to
//! concrete widgets, so the same state machine drives the Iced view and the
//! recording surfaces used in tests.

use super::SlideHandle;
use std::fmt;

/// 1-based index of the displayed slide, always within `[1, total]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The first slide.
    pub const FIRST: Position = Position(1);

    /// Creates a position, returning `None` when `value` is outside `[1, total]`.
    #[must_use]
    pub fn new(value: usize, total: usize) -> Option<Self> {
        (1..=total).contains(&value).then_some(Self(value))
    }

    /// Returns the 1-based value.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Handle of the slide displayed at this position.
    #[must_use]
    pub fn handle(self) -> SlideHandle {
        SlideHandle::new(self.0 - 1)
    }

    fn next(self, total: usize) -> Option<Self> {
        Self::new(self.0 + 1, total)
    }

    fn previous(self) -> Option<Self> {
        self.0.checked_sub(1).and_then(|value| (value >= 1).then_some(Self(value)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Enabled state of the two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub retreat_enabled: bool,
    pub advance_enabled: bool,
}

/// Outcome of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The command was accepted and the visible slide changed.
    Moved { from: Position, to: Position },
    /// Not ready yet, or already at the boundary.
    Ignored,
}

impl Transition {
    #[must_use]
    pub fn is_moved(self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

/// Rendering adapter driven by the navigator.
pub trait SlideSurface {
    /// Sets or clears the visible marker of one slide.
    fn set_visible(&mut self, slide: SlideHandle, visible: bool);

    /// Updates the `"{position} / {total}"` counter.
    fn set_counter(&mut self, position: Position, total: usize);

    /// Updates the enabled state of the previous/next controls.
    fn set_controls(&mut self, controls: Controls);

    /// Resets the slide viewport to its top.
    fn scroll_to_top(&mut self);
}

/// Formats the counter text shown next to the navigation controls.
#[must_use]
pub fn counter_text(position: Position, total: usize) -> String {
    format!("{position} / {total}")
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

/// Bounded navigation over `total` slides, gated by readiness.
#[derive(Debug, Clone, Default)]
pub struct SlideNavigator {
    total: usize,
    position: Option<Position>,
    ready: bool,
}

impl SlideNavigator {
    /// Creates a navigator that ignores every command until [`activate`](Self::activate).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the readiness gate once all `total` slides are in place.
    ///
    /// Marks the first slide visible and synchronizes counter and controls.
    /// Returns `false` (and changes nothing) if the navigator is already
    /// ready or `total` is zero.
    pub fn activate<S: SlideSurface>(&mut self, total: usize, surface: &mut S) -> bool {
        if self.ready || total == 0 {
            return false;
        }

        self.total = total;
        self.position = Some(Position::FIRST);
        self.ready = true;

        surface.set_visible(Position::FIRST.handle(), true);
        self.sync(surface);
        tracing::debug!(total, "slide navigator ready");
        true
    }

    /// Moves to the next slide when ready and not on the last one.
    pub fn advance<S: SlideSurface>(&mut self, surface: &mut S) -> Transition {
        self.step(Step::Forward, surface)
    }

    /// Moves to the previous slide when ready and not on the first one.
    pub fn retreat<S: SlideSurface>(&mut self, surface: &mut S) -> Transition {
        self.step(Step::Backward, surface)
    }

    /// Current position, `None` before readiness.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Total slide count, zero before readiness.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Control state for the current position; both disabled before readiness.
    #[must_use]
    pub fn controls(&self) -> Controls {
        match self.position {
            Some(position) if self.ready => Controls {
                retreat_enabled: position.get() > 1,
                advance_enabled: position.get() < self.total,
            },
            _ => Controls::default(),
        }
    }

    fn step<S: SlideSurface>(&mut self, step: Step, surface: &mut S) -> Transition {
        if !self.ready {
            return Transition::Ignored;
        }
        let Some(current) = self.position else {
            return Transition::Ignored;
        };

        let target = match step {
            Step::Forward => current.next(self.total),
            Step::Backward => current.previous(),
        };
        let Some(target) = target else {
            return Transition::Ignored;
        };

        surface.set_visible(current.handle(), false);
        surface.set_visible(target.handle(), true);
        self.position = Some(target);
        self.sync(surface);
        surface.scroll_to_top();

        tracing::trace!(from = %current, to = %target, "slide transition");
        Transition::Moved {
            from: current,
            to: target,
        }
    }

    fn sync<S: SlideSurface>(&self, surface: &mut S) {
        if let Some(position) = self.position {
            surface.set_counter(position, self.total);
        }
        surface.set_controls(self.controls());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Surface that records every adapter call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub visible: Vec<bool>,
        pub counter: Option<String>,
        pub controls: Controls,
        pub scroll_resets: usize,
        pub calls: usize,
    }

    impl RecordingSurface {
        pub(crate) fn visible_slides(&self) -> Vec<usize> {
            self.visible
                .iter()
                .enumerate()
                .filter_map(|(index, visible)| visible.then_some(index))
                .collect()
        }
    }

    impl SlideSurface for RecordingSurface {
        fn set_visible(&mut self, slide: SlideHandle, visible: bool) {
            let index = slide.index();
            if index >= self.visible.len() {
                self.visible.resize(index + 1, false);
            }
            self.visible[index] = visible;
            self.calls += 1;
        }

        fn set_counter(&mut self, position: Position, total: usize) {
            self.counter = Some(counter_text(position, total));
            self.calls += 1;
        }

        fn set_controls(&mut self, controls: Controls) {
            self.controls = controls;
            self.calls += 1;
        }

        fn scroll_to_top(&mut self) {
            self.scroll_resets += 1;
            self.calls += 1;
        }
    }

    fn ready_navigator(total: usize) -> (SlideNavigator, RecordingSurface) {
        let mut navigator = SlideNavigator::new();
        let mut surface = RecordingSurface::default();
        assert!(navigator.activate(total, &mut surface));
        (navigator, surface)
    }

    #[test]
    fn position_rejects_out_of_range_values() {
        assert!(Position::new(0, 8).is_none());
        assert!(Position::new(9, 8).is_none());
        assert_eq!(Position::new(8, 8).map(Position::get), Some(8));
    }

    #[test]
    fn commands_before_activation_are_ignored() {
        let mut navigator = SlideNavigator::new();
        let mut surface = RecordingSurface::default();

        assert_eq!(navigator.advance(&mut surface), Transition::Ignored);
        assert_eq!(navigator.retreat(&mut surface), Transition::Ignored);
        assert!(navigator.position().is_none());
        assert_eq!(surface.calls, 0);
        assert_eq!(navigator.controls(), Controls::default());
    }

    #[test]
    fn fresh_activation_shows_first_slide() {
        let (navigator, surface) = ready_navigator(8);

        assert_eq!(navigator.position(), Some(Position::FIRST));
        assert_eq!(surface.visible_slides(), vec![0]);
        assert_eq!(surface.counter.as_deref(), Some("1 / 8"));
        assert!(!surface.controls.retreat_enabled);
        assert!(surface.controls.advance_enabled);
        assert_eq!(surface.scroll_resets, 0);
    }

    #[test]
    fn activation_happens_once() {
        let (mut navigator, mut surface) = ready_navigator(8);
        navigator.advance(&mut surface);

        assert!(!navigator.activate(3, &mut surface));
        assert_eq!(navigator.total(), 8);
        assert_eq!(navigator.position().map(Position::get), Some(2));
    }

    #[test]
    fn activation_with_no_slides_stays_not_ready() {
        let mut navigator = SlideNavigator::new();
        let mut surface = RecordingSurface::default();

        assert!(!navigator.activate(0, &mut surface));
        assert!(!navigator.is_ready());
    }

    #[test]
    fn advancing_to_the_end_disables_next() {
        let (mut navigator, mut surface) = ready_navigator(8);

        for _ in 0..7 {
            assert!(navigator.advance(&mut surface).is_moved());
        }

        assert_eq!(navigator.position().map(Position::get), Some(8));
        assert_eq!(surface.counter.as_deref(), Some("8 / 8"));
        assert!(!surface.controls.advance_enabled);
        assert!(surface.controls.retreat_enabled);
        assert_eq!(surface.scroll_resets, 7);
    }

    #[test]
    fn advance_at_last_slide_is_a_no_op() {
        let (mut navigator, mut surface) = ready_navigator(3);
        navigator.advance(&mut surface);
        navigator.advance(&mut surface);
        let calls = surface.calls;

        assert_eq!(navigator.advance(&mut surface), Transition::Ignored);
        assert_eq!(navigator.position().map(Position::get), Some(3));
        assert_eq!(surface.calls, calls);
        assert_eq!(surface.visible_slides(), vec![2]);
    }

    #[test]
    fn retreat_at_first_slide_is_a_no_op() {
        let (mut navigator, mut surface) = ready_navigator(3);
        let calls = surface.calls;

        assert_eq!(navigator.retreat(&mut surface), Transition::Ignored);
        assert_eq!(navigator.position(), Some(Position::FIRST));
        assert_eq!(surface.calls, calls);
    }

    #[test]
    fn exactly_one_slide_is_visible_at_every_position() {
        let (mut navigator, mut surface) = ready_navigator(5);

        for expected in 2..=5 {
            navigator.advance(&mut surface);
            assert_eq!(surface.visible_slides(), vec![expected - 1]);
            assert_eq!(surface.counter, Some(format!("{expected} / 5")));
        }
        for expected in (1..=4).rev() {
            navigator.retreat(&mut surface);
            assert_eq!(surface.visible_slides(), vec![expected - 1]);
            assert_eq!(surface.counter, Some(format!("{expected} / 5")));
        }
    }

    #[test]
    fn transition_reports_both_positions() {
        let (mut navigator, mut surface) = ready_navigator(4);

        let transition = navigator.advance(&mut surface);

        assert_eq!(
            transition,
            Transition::Moved {
                from: Position::FIRST,
                to: Position::new(2, 4).unwrap(),
            }
        );
    }

    #[test]
    fn single_slide_deck_disables_both_controls() {
        let (navigator, surface) = ready_navigator(1);

        assert_eq!(navigator.controls(), Controls::default());
        assert_eq!(surface.controls, Controls::default());
        assert_eq!(surface.counter.as_deref(), Some("1 / 1"));
    }
}
