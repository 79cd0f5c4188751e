// SPDX-License-Identifier: MPL-2.0
//! `deckview` is a slide-deck viewer built with the Iced GUI framework.
//!
//! Slides are fetched in order as TOML fragments from a content server, a
//! local directory, or the sample deck embedded in the binary. Navigation
//! (buttons, keyboard, swipes) unlocks only once every fragment is loaded.

#![doc(html_root_url = "https://docs.rs/deckview/0.1.0")]

pub mod app;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod ui;
