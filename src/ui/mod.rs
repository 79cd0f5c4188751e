// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": views render from borrowed state
//! and return messages; nothing here mutates deck state directly.
//!
//! - [`slide`] - One slide fragment with its notes, panels and sources
//! - [`controls`] - Previous/next controls and the position counter
//! - [`surface`] - Display state the navigator writes and the view reads
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod controls;
pub mod design_tokens;
pub mod slide;
pub mod styles;
pub mod surface;
pub mod theming;
