// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent (`.ftl`) files embedded from `assets/i18n/`.
//! The active locale is resolved from the CLI, then the config file, then
//! the OS locale, falling back to `en-US`.

pub mod fluent;
