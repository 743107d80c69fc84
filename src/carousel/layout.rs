// SPDX-License-Identifier: MPL-2.0
//! Responsive layout policy.
//!
//! The number of slides shown side by side is a fixed, table-driven policy
//! keyed on the window width. Breakpoints are not configurable: every call
//! site goes through [`compute_visible_count`] so the table stays the single
//! source of truth.
//!
//! | Window width  | Visible slides |
//! |---------------|----------------|
//! | `>= 1100 px`  | 3              |
//! | `>= 700 px`   | 2              |
//! | otherwise     | 1              |

use super::Controls;

/// One row of the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Inclusive lower bound on the window width, in logical pixels.
    pub min_width: f32,
    /// Slides visible at once from this width upward.
    pub visible_count: usize,
}

/// Breakpoints ordered from widest to narrowest.
pub const BREAKPOINTS: [Breakpoint; 2] = [
    Breakpoint {
        min_width: 1100.0,
        visible_count: 3,
    },
    Breakpoint {
        min_width: 700.0,
        visible_count: 2,
    },
];

/// Visible count below the narrowest breakpoint.
pub const FALLBACK_VISIBLE_COUNT: usize = 1;

/// Horizontal padding around the whole carousel frame, on each side.
pub const FRAME_PADDING: f32 = 24.0;

/// Width reserved for one previous/next control.
pub const CONTROL_GUTTER: f32 = 56.0;

/// Returns how many slides fit side by side at the given window width.
///
/// Pure function of its input; non-finite widths fall through to
/// [`FALLBACK_VISIBLE_COUNT`].
#[must_use]
pub fn compute_visible_count(window_width: f32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|bp| window_width >= bp.min_width)
        .map_or(FALLBACK_VISIBLE_COUNT, |bp| bp.visible_count)
}

/// Width of the clipping viewport once the frame padding and any rendered
/// controls are subtracted from the window width.
#[must_use]
pub fn viewport_width(window_width: f32, controls: Controls) -> f32 {
    let gutters = [controls.previous, controls.next]
        .into_iter()
        .filter(|present| *present)
        .count() as f32
        * CONTROL_GUTTER;

    let width = window_width - 2.0 * FRAME_PADDING - gutters;
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}

/// Slide count and visible count, plus everything derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    slide_count: usize,
    visible_count: usize,
}

impl Layout {
    /// Creates a layout; a visible count of zero is raised to one.
    #[must_use]
    pub fn new(slide_count: usize, visible_count: usize) -> Self {
        Self {
            slide_count,
            visible_count: visible_count.max(1),
        }
    }

    /// Creates the layout the breakpoint table prescribes for a window width.
    #[must_use]
    pub fn for_window_width(slide_count: usize, window_width: f32) -> Self {
        Self::new(slide_count, compute_visible_count(window_width))
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Last valid window start: `max(0, slide_count - visible_count)`.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.slide_count.saturating_sub(self.visible_count)
    }

    /// Number of distinct pages, never less than one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Width of each slide as a percentage of the viewport.
    #[must_use]
    pub fn slide_width_percent(&self) -> f32 {
        100.0 / self.visible_count as f32
    }

    /// Track translation that reveals the page starting at `index`.
    #[must_use]
    pub fn translate_percent_for(&self, index: usize) -> f32 {
        -(index as f32 * self.slide_width_percent())
    }

    /// Clamps an index into `0..=max_index`.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.max_index())
    }
}
