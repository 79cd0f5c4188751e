// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Error presentation with severity, hints and
//!   expandable technical details

pub mod error_display;
