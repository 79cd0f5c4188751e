// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for touch and pointer drags.

use super::input::Command;

/// Swipe threshold bounds, in logical pixels.
pub mod swipe_threshold_bounds {
    /// Smallest accepted threshold.
    pub const MIN: f32 = 10.0;
    /// Largest accepted threshold.
    pub const MAX: f32 = 400.0;
    /// Default minimum swipe distance.
    pub const DEFAULT: f32 = 50.0;
}

/// Minimum horizontal distance a gesture must exceed to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the valid range.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        if distance.is_nan() {
            return Self::default();
        }
        Self(distance.clamp(swipe_threshold_bounds::MIN, swipe_threshold_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_threshold_bounds::DEFAULT)
    }
}

/// Direction of a recognized swipe (the way the finger travelled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

impl Swipe {
    /// Swiping left reveals the next slide, swiping right the previous one.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Swipe::Left => Command::Advance,
            Swipe::Right => Command::Retreat,
        }
    }
}

/// Remembers where a gesture started and classifies it on release.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    threshold: SwipeThreshold,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    /// Records the horizontal start of a gesture.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Forgets a gesture that will never complete (finger lost).
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Ends the gesture at `x` and classifies it.
    ///
    /// Returns `None` when no gesture was started or the horizontal distance
    /// does not strictly exceed the threshold.
    pub fn finish(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let delta = start - x;

        if delta.abs() <= self.threshold.value() {
            return None;
        }
        Some(if delta > 0.0 { Swipe::Left } else { Swipe::Right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_clamps_to_bounds() {
        assert_eq!(SwipeThreshold::new(0.0).value(), swipe_threshold_bounds::MIN);
        assert_eq!(
            SwipeThreshold::new(10_000.0).value(),
            swipe_threshold_bounds::MAX
        );
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);

        assert_eq!(tracker.finish(160.0), None);
        // The start is consumed even when the gesture is too short
        assert_eq!(tracker.finish(0.0), None);
    }

    #[test]
    fn swipe_exactly_at_threshold_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);

        assert_eq!(tracker.finish(150.0), None);
    }

    #[test]
    fn leftward_swipe_advances() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);

        let swipe = tracker.finish(120.0);

        assert_eq!(swipe, Some(Swipe::Left));
        assert_eq!(swipe.map(Swipe::command), Some(Command::Advance));
    }

    #[test]
    fn rightward_swipe_retreats() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(10.0);

        let swipe = tracker.finish(90.0);

        assert_eq!(swipe, Some(Swipe::Right));
        assert_eq!(swipe.map(Swipe::command), Some(Command::Retreat));
    }

    #[test]
    fn release_without_start_does_nothing() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.finish(500.0), None);
    }

    #[test]
    fn gesture_starting_at_origin_still_counts() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(0.0);

        assert_eq!(tracker.finish(80.0), Some(Swipe::Right));
    }

    #[test]
    fn cancel_discards_the_start() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        tracker.cancel();

        assert_eq!(tracker.finish(0.0), None);
    }

    #[test]
    fn custom_threshold_applies() {
        let mut tracker = SwipeTracker::new(SwipeThreshold::new(30.0));
        tracker.begin(100.0);

        assert_eq!(tracker.finish(60.0), Some(Swipe::Left));
    }
}
