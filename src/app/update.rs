// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! `App::update` builds an [`UpdateContext`] over its fields and dispatches to
//! the handlers below, which keeps each handler testable on its own.

use super::{Message, SlideState};
use crate::carousel::{self, Carousel, CarouselConfig, Controls, Host};
use crate::error::{DeckError, Error};
use crate::slides::SlideDeck;
use crate::ui::notifications::{self, Notification};
use iced::{window, Size, Task};

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub carousel: &'a mut Option<Carousel>,
    pub carousel_config: CarouselConfig,
    pub controls: Controls,
    pub slides: &'a mut SlideState,
    pub window_width: &'a mut f32,
    pub notifications: &'a mut notifications::Manager,
}

/// Mounts the carousel on a freshly loaded deck, or reports why there is none.
pub fn handle_slides_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<SlideDeck, Error>,
) -> Task<Message> {
    if let Some(previous) = ctx.carousel.as_mut() {
        previous.destroy();
    }

    let host = match result {
        Ok(deck) => {
            if deck.is_empty() {
                ctx.notifications
                    .push(Notification::info("notification-no-slides"));
            }
            let host = Host {
                slide_count: deck.len(),
                controls: ctx.controls,
                window_width: *ctx.window_width,
            };
            *ctx.slides = SlideState::Ready(deck);
            Some(host)
        }
        Err(err) => {
            tracing::warn!(error = %err, "slide source failed to load");
            ctx.notifications.push(notification_for(&err));
            *ctx.slides = SlideState::Failed;
            None
        }
    };

    *ctx.carousel = carousel::mount(host, ctx.carousel_config);
    Task::none()
}

/// Maps a load error to the toast shown to the user.
///
/// A malformed deck is something the user must fix, so it stays until
/// dismissed; everything else fades like a warning.
pub fn notification_for(err: &Error) -> Notification {
    match err {
        Error::Deck(DeckError::Malformed(detail)) => {
            Notification::error(err.i18n_key()).with_arg("detail", detail.as_str())
        }
        Error::Io(detail) => Notification::warning(err.i18n_key()).with_arg("detail", detail.as_str()),
        Error::Deck(DeckError::UnsupportedSource) | Error::Config(_) => {
            Notification::warning(err.i18n_key())
        }
    }
}

pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    message: carousel::Message,
) -> Task<Message> {
    if let Some(carousel) = ctx.carousel.as_mut() {
        carousel.update(message);
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_width = size.width;
    handle_carousel_message(ctx, carousel::Message::Resized(size.width))
}

/// Tears the carousel down before the window goes away.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    if let Some(carousel) = ctx.carousel.as_mut() {
        carousel.destroy();
    }
    window::close(id)
}
