// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel;
use crate::error::Error;
use crate::slides::SlideDeck;
use crate::ui::notifications;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    Notification(notifications::Message),
    /// Result of the async slide source load started at boot.
    SlidesLoaded(Result<SlideDeck, Error>),
    WindowResized(Size),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Slide deck file or image directory. `None` shows the demo deck.
    pub source: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CAROUSEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Overrides `[carousel] autoplay_interval_ms`.
    pub autoplay_ms: Option<u32>,
    /// Disables autoplay regardless of the config file.
    pub no_autoplay: bool,
    /// Hides the previous/next controls.
    pub no_controls: bool,
}
