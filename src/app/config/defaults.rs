// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Carousel ranges live next to their newtypes in
//! [`crate::domain::carousel::newtypes`]; they are re-exported here so the
//! configuration layer has a single place to look.
//!
//! # Categories
//!
//! - **Carousel**: Autoplay interval, drag threshold and transition length
//! - **Window**: Initial and minimum window size
//! - **Notifications**: Auto-dismiss polling

use crate::domain::carousel::newtypes::{autoplay_bounds, drag_bounds, transition_bounds};

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Whether pages advance on their own when the app starts.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default delay between automatic advances (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = autoplay_bounds::DEFAULT_MS;

/// Minimum delay between automatic advances (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u32 = autoplay_bounds::MIN_MS;

/// Maximum delay between automatic advances (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u32 = autoplay_bounds::MAX_MS;

/// Default drag commit threshold, in percent of the viewport width.
pub const DEFAULT_DRAG_THRESHOLD_PERCENT: f32 = drag_bounds::DEFAULT_PERCENT;

/// Default page transition length (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u32 = transition_bounds::DEFAULT_MS;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 560.0;

/// Smallest window width the layout is designed for.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Smallest window height the layout is designed for.
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Polling period for toast auto-dismiss (in milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    assert!(DEFAULT_DRAG_THRESHOLD_PERCENT >= drag_bounds::MIN_PERCENT);
    assert!(DEFAULT_DRAG_THRESHOLD_PERCENT <= drag_bounds::MAX_PERCENT);

    assert!(DEFAULT_TRANSITION_MS <= transition_bounds::MAX_MS);

    // The narrowest window still fits the single-card layout.
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);

    // Toasts must disappear faster than the shortest auto-dismiss delay.
    assert!(NOTIFICATION_TICK_MS > 0);
    assert!(NOTIFICATION_TICK_MS < 3_000);
};
