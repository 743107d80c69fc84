// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::NOTIFICATION_TICK_MS;
use super::Message;
use crate::carousel::Carousel;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Window opening, close requests and resizes.
pub fn create_window_subscription() -> Subscription<Message> {
    let lifecycle = event::listen_with(route_window_event);
    let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

    Subscription::batch([lifecycle, resize])
}

/// The opened window's size seeds the layout width.
pub(super) fn route_window_event(
    event: event::Event,
    _status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    }
}

/// Periodic tick for notification auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// The mounted carousel's timer, frame and input subscriptions.
pub fn create_carousel_subscription(carousel: Option<&Carousel>) -> Subscription<Message> {
    carousel.map_or_else(Subscription::none, |carousel| {
        carousel.subscription().map(Message::Carousel)
    })
}
