// SPDX-License-Identifier: MPL-2.0
//! Carousel newtypes.
//!
//! This module provides type-safe wrappers for carousel policy values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Autoplay Interval Bounds
// =============================================================================

/// Autoplay interval bounds (0.5 to 60 seconds).
pub mod autoplay_bounds {
    /// Minimum interval between automatic advances, in milliseconds.
    pub const MIN_MS: u32 = 500;
    /// Maximum interval between automatic advances, in milliseconds.
    pub const MAX_MS: u32 = 60_000;
    /// Default interval between automatic advances, in milliseconds.
    pub const DEFAULT_MS: u32 = 4_000;
}

// =============================================================================
// AutoplayInterval
// =============================================================================

/// Delay between two automatic page advances.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500 ms – 60 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayInterval(u32);

impl AutoplayInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(autoplay_bounds::MIN_MS, autoplay_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(autoplay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Drag Threshold Bounds
// =============================================================================

/// Drag commit threshold bounds, in percentage points of the viewport width.
pub mod drag_bounds {
    /// Minimum threshold.
    pub const MIN_PERCENT: f32 = 1.0;
    /// Maximum threshold.
    pub const MAX_PERCENT: f32 = 50.0;
    /// Default threshold.
    pub const DEFAULT_PERCENT: f32 = 12.0;
}

// =============================================================================
// DragThreshold
// =============================================================================

/// Distance a drag must cover, in percentage points of the viewport width,
/// before releasing it commits to a neighboring page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold(f32);

impl DragThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if !percent.is_finite() {
            return Self::default();
        }
        Self(percent.clamp(drag_bounds::MIN_PERCENT, drag_bounds::MAX_PERCENT))
    }

    /// Returns the threshold in percentage points.
    #[must_use]
    pub fn percent(self) -> f32 {
        self.0
    }
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self(drag_bounds::DEFAULT_PERCENT)
    }
}

// =============================================================================
// Transition Duration Bounds
// =============================================================================

/// Track transition duration bounds (0 disables easing entirely).
pub mod transition_bounds {
    /// Minimum duration in milliseconds.
    pub const MIN_MS: u32 = 0;
    /// Maximum duration in milliseconds.
    pub const MAX_MS: u32 = 2_000;
    /// Default duration in milliseconds.
    pub const DEFAULT_MS: u32 = 400;
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Length of an animated page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u32);

impl TransitionDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the duration as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Returns true when transitions should jump without easing.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_interval_clamps_to_range() {
        assert_eq!(AutoplayInterval::new(10).millis(), autoplay_bounds::MIN_MS);
        assert_eq!(
            AutoplayInterval::new(1_000_000).millis(),
            autoplay_bounds::MAX_MS
        );
        assert_eq!(AutoplayInterval::new(2_500).millis(), 2_500);
    }

    #[test]
    fn autoplay_interval_default_is_four_seconds() {
        assert_eq!(
            AutoplayInterval::default().as_duration(),
            Duration::from_secs(4)
        );
    }

    #[test]
    fn drag_threshold_clamps_and_rejects_nan() {
        assert_eq!(DragThreshold::new(0.0).percent(), drag_bounds::MIN_PERCENT);
        assert_eq!(DragThreshold::new(90.0).percent(), drag_bounds::MAX_PERCENT);
        assert_eq!(DragThreshold::new(f32::NAN), DragThreshold::default());
        assert_eq!(DragThreshold::default().percent(), 12.0);
    }

    #[test]
    fn transition_duration_zero_is_instant() {
        assert!(TransitionDuration::new(0).is_instant());
        assert!(!TransitionDuration::default().is_instant());
        assert_eq!(
            TransitionDuration::new(9_999).millis(),
            transition_bounds::MAX_MS
        );
    }
}
