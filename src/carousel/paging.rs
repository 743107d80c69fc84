// SPDX-License-Identifier: MPL-2.0
//! Paging state machine and the track it positions.
//!
//! [`Pager`] owns the current page index and keeps it inside
//! `0..=max_index` while the layout changes underneath it. [`Track`] holds
//! the explicit translation of the slide strip; the rendered offset is only
//! ever a projection of that number, never parsed back from the view.

use super::layout::Layout;
use crate::domain::carousel::TransitionDuration;
use std::time::Instant;

/// Translations closer than this are treated as already reached.
const SETTLE_EPSILON: f32 = 0.01;

/// How a page change is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Ease from the displayed position to the target.
    Animated,
    /// Jump straight to the target, used for layout corrections.
    Instant,
}

/// Current page plus the layout it is clamped against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    layout: Layout,
    current_index: usize,
}

impl Pager {
    /// Creates a pager positioned on the first page.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            current_index: 0,
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.layout.max_index()
    }

    /// Replaces the layout and clamps the current index down to the new
    /// maximum. Returns true when the visible count changed.
    pub fn set_layout(&mut self, layout: Layout) -> bool {
        let changed = layout.visible_count() != self.layout.visible_count();
        self.layout = layout;
        self.current_index = self.layout.clamp_index(self.current_index);
        changed
    }

    /// Moves to `target`, clamped into `0..=max_index`, and returns the
    /// resulting index.
    pub fn go_to(&mut self, target: usize) -> usize {
        self.current_index = self.layout.clamp_index(target);
        self.current_index
    }

    /// Index one page back, saturating at the first page.
    #[must_use]
    pub fn previous_target(&self) -> usize {
        self.current_index.saturating_sub(1)
    }

    /// Index one page forward, before clamping.
    #[must_use]
    pub fn next_target(&self) -> usize {
        self.current_index.saturating_add(1)
    }

    /// Track translation for the current page.
    #[must_use]
    pub fn translate_percent(&self) -> f32 {
        self.layout.translate_percent_for(self.current_index)
    }
}

/// An in-flight eased transition.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    from: f32,
    to: f32,
    /// Set on the first frame so the easing starts when rendering does.
    started_at: Option<Instant>,
}

/// Horizontal position of the slide strip, in percent of the viewport width.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    translate_percent: f32,
    motion: Option<Motion>,
    duration: TransitionDuration,
}

impl Track {
    #[must_use]
    pub fn new(duration: TransitionDuration) -> Self {
        Self {
            translate_percent: 0.0,
            motion: None,
            duration,
        }
    }

    /// Currently displayed translation.
    #[must_use]
    pub fn translate_percent(&self) -> f32 {
        self.translate_percent
    }

    /// Translation the track is heading to (the displayed one when idle).
    #[must_use]
    pub fn target_percent(&self) -> f32 {
        self.motion.map_or(self.translate_percent, |m| m.to)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Displayed translation converted to logical pixels.
    #[must_use]
    pub fn offset_px(&self, viewport_width: f32) -> f32 {
        self.translate_percent / 100.0 * viewport_width
    }

    /// Heads to `percent`, easing or jumping depending on `transition`.
    pub fn move_to(&mut self, percent: f32, transition: Transition) {
        let settled = (percent - self.translate_percent).abs() < SETTLE_EPSILON;
        if transition == Transition::Instant || self.duration.is_instant() || settled {
            self.translate_percent = percent;
            self.motion = None;
            return;
        }

        self.motion = Some(Motion {
            from: self.translate_percent,
            to: percent,
            started_at: None,
        });
    }

    /// Sets the translation directly, cancelling any easing.
    pub fn preview(&mut self, percent: f32) {
        self.motion = None;
        self.translate_percent = percent;
    }

    /// Stops easing where the track is currently displayed.
    pub fn freeze(&mut self) {
        self.motion = None;
    }

    /// Advances the easing to `now`. Returns true while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };

        let started_at = *motion.started_at.get_or_insert(now);
        let total = self.duration.as_duration().as_secs_f32();
        let progress = if total > 0.0 {
            (now.saturating_duration_since(started_at).as_secs_f32() / total).min(1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.translate_percent = motion.to;
            self.motion = None;
            return false;
        }

        self.translate_percent = motion.from + (motion.to - motion.from) * ease_out_cubic(progress);
        true
    }
}

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
