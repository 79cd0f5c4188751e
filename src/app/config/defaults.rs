// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Deck**: where fragments are fetched from and how many there are
//!
//! Swipe bounds live with the gesture tracker in
//! [`crate::deck::gesture::swipe_threshold_bounds`].

// ==========================================================================
// Deck Defaults
// ==========================================================================

/// Content server expected when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/slides/";

/// Fragment file name pattern; `{n}` is replaced by the slide position.
pub const DEFAULT_FRAGMENT_PATTERN: &str = "slide-{n}.toml";

/// Number of slides fetched with the pattern.
pub const DEFAULT_SLIDE_COUNT: usize = 8;

/// Minimum slide count.
pub const MIN_SLIDE_COUNT: usize = 1;

/// Maximum slide count.
pub const MAX_SLIDE_COUNT: usize = 500;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SLIDE_COUNT > 0);
    assert!(MAX_SLIDE_COUNT >= MIN_SLIDE_COUNT);
    assert!(DEFAULT_SLIDE_COUNT >= MIN_SLIDE_COUNT);
    assert!(DEFAULT_SLIDE_COUNT <= MAX_SLIDE_COUNT);
};
