// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support using Fluent.
//!
//! Translations are embedded from `assets/i18n/*.ftl`. The active locale is
//! taken from the `--lang` flag, then the config file, then the OS, and
//! falls back to `en-US`.

pub mod fluent;
