// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a responsive, auto-playing slide carousel built with the
//! Iced GUI framework.
//!
//! It shows testimonials or images in a horizontally sliding track, adapts the
//! number of visible slides to the window width, advances on a timer that
//! pauses while the carousel is hovered or focused, and supports mouse and
//! touch dragging, keyboard navigation and page indicators.
//!
//! # Modules
//!
//! - [`carousel`]: The carousel state machines, messages and view
//! - [`domain`]: Bounded policy values shared by the carousel and the config
//! - [`slides`]: Slide decks and their async loading
//! - [`app`]: The Iced application hosting the carousel
//! - [`ui`]: Styles, design tokens, slide cards and notifications
//! - [`i18n`]: Fluent-based localization

pub mod app;
pub mod carousel;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod slides;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
