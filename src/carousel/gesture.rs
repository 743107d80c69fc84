// SPDX-License-Identifier: MPL-2.0
//! Unified pointer and touch dragging: `Idle → Dragging → Idle`.

use crate::domain::carousel::DragThreshold;

/// Input device driving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Cursor-driven input, including touches reported by the viewport.
    Mouse,
    /// Touch input fed directly through [`crate::carousel::Carousel::drag_start`].
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Horizontal input coordinate at drag start.
        start_x: f32,
        /// Track translation captured at drag start, in percent.
        base_translate_percent: f32,
        /// Latest previewed translation, in percent.
        current_percent: f32,
        kind: PointerKind,
    },
}

/// What a finished drag commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Next,
    Previous,
    SnapBack,
}

/// A drag that has just ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub moved_percent: f32,
    pub kind: PointerKind,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Starts a drag. Ignored while another drag is already in progress.
    pub fn begin(&mut self, x: f32, base_translate_percent: f32, kind: PointerKind) -> bool {
        if self.is_dragging() {
            return false;
        }
        let base = if base_translate_percent.is_finite() {
            base_translate_percent
        } else {
            0.0
        };
        *self = Self::Dragging {
            start_x: x,
            base_translate_percent: base,
            current_percent: base,
            kind,
        };
        true
    }

    /// Follows the input to `x` and returns the unclamped preview translation.
    ///
    /// Returns `None` when idle, when `kind` does not own the drag, or when the
    /// viewport has no width to measure against.
    pub fn update(&mut self, x: f32, viewport_width: f32, kind: PointerKind) -> Option<f32> {
        let Self::Dragging {
            start_x,
            base_translate_percent,
            current_percent,
            kind: owner,
        } = self
        else {
            return None;
        };
        if *owner != kind || viewport_width <= 0.0 || !x.is_finite() {
            return None;
        }

        let delta_percent = (x - *start_x) / viewport_width * 100.0;
        *current_percent = *base_translate_percent + delta_percent;
        Some(*current_percent)
    }

    /// Ends the drag owned by `kind`. A stray end is a no-op returning `None`.
    pub fn end(&mut self, kind: PointerKind) -> Option<DragRelease> {
        let Self::Dragging {
            base_translate_percent,
            current_percent,
            kind: owner,
            ..
        } = *self
        else {
            return None;
        };
        if owner != kind {
            return None;
        }

        *self = Self::Idle;
        Some(DragRelease {
            moved_percent: current_percent - base_translate_percent,
            kind,
        })
    }
}

/// Maps the net movement of a drag onto a page transition.
///
/// Moving left past the threshold reveals the next page, moving right past it
/// the previous one; anything within it, zero included, snaps back.
#[must_use]
pub fn classify(moved_percent: f32, threshold: DragThreshold) -> DragOutcome {
    let threshold = threshold.percent();
    if moved_percent < -threshold {
        DragOutcome::Next
    } else if moved_percent > threshold {
        DragOutcome::Previous
    } else {
        DragOutcome::SnapBack
    }
}
