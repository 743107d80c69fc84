// SPDX-License-Identifier: MPL-2.0
//! Responsive, auto-playing slide carousel.
//!
//! A [`Carousel`] is created from a [`Host`] description and a
//! [`CarouselConfig`], and wires four small state machines together:
//!
//! - [`layout`]: how many slides fit side by side at the current width
//! - [`paging`]: the clamped current page and the track translation
//! - [`autoplay`]: the single repeating advance timer (`Running ↔ Suspended`)
//! - [`gesture`]: pointer and touch dragging (`Idle → Dragging → Idle`)
//!
//! Every public operation is also reachable through [`Message`], which is the
//! thin adapter the Iced runtime talks to. After [`Carousel::destroy`] the
//! instance releases its timer and input listeners and ignores all input.

pub mod autoplay;
pub mod gesture;
pub mod indicators;
pub mod layout;
pub mod paging;
pub mod view;

pub use autoplay::TimerId;
pub use gesture::{DragOutcome, PointerKind};
pub use indicators::{Indicator, Indicators};
pub use layout::{compute_visible_count, Layout};
pub use paging::Transition;
pub use view::{view, ViewContext};

use crate::domain::carousel::{AutoplayInterval, DragThreshold, TransitionDuration};
use autoplay::Scheduler;
use gesture::DragState;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, touch, window, Event, Subscription};
use paging::{Pager, Track};
use std::time::Instant;

/// Optional navigation controls the host provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub previous: bool,
    pub next: bool,
}

impl Controls {
    pub const BOTH: Self = Self {
        previous: true,
        next: true,
    };
    pub const NONE: Self = Self {
        previous: false,
        next: false,
    };
}

impl Default for Controls {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Everything the carousel needs to know about the surface it is mounted on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Host {
    pub slide_count: usize,
    pub controls: Controls,
    pub window_width: f32,
}

/// Tunable carousel policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub autoplay_interval: AutoplayInterval,
    pub drag_threshold: DragThreshold,
    pub transition: TransitionDuration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval: AutoplayInterval::default(),
            drag_threshold: DragThreshold::default(),
            transition: TransitionDuration::default(),
        }
    }
}

/// Keyboard commands understood by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// `Tab`: take or release keyboard focus.
    ToggleFocus,
    /// `Escape`: release keyboard focus.
    Blur,
    Previous,
    Next,
    First,
    Last,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The window width changed.
    Resized(f32),
    Previous,
    Next,
    /// An indicator dot was pressed.
    GoToPage(usize),
    AutoplayTick(TimerId),
    /// The pointer entered the carousel frame.
    PointerEntered,
    /// The pointer left the carousel frame.
    PointerLeft,
    FocusGained,
    FocusLost,
    /// Cursor position inside the viewport, relative to its left edge.
    ViewportMoved(f32),
    /// Press inside the viewport. Finger presses arrive here as well, with
    /// the cursor already moved to the touch point.
    ViewportPressed,
    ViewportReleased,
    /// The cursor left the viewport; ends a drag like a release.
    ViewportExited,
    /// The platform cancelled a touch; ends a drag like a release.
    TouchLost,
    Key(KeyCommand),
    Frame(Instant),
}

#[derive(Debug, Clone)]
pub struct Carousel {
    host: Host,
    config: CarouselConfig,
    pager: Pager,
    track: Track,
    indicators: Indicators,
    autoplay: Scheduler,
    drag: DragState,
    hovered: bool,
    focused: bool,
    /// Last cursor x reported inside the viewport.
    cursor_x: Option<f32>,
    destroyed: bool,
}

/// Mounts a carousel on `host`. A missing host is a silent no-op.
#[must_use]
pub fn mount(host: Option<Host>, config: CarouselConfig) -> Option<Carousel> {
    let Some(host) = host else {
        tracing::debug!("no carousel host, nothing to mount");
        return None;
    };
    Some(Carousel::new(host, config))
}

impl Carousel {
    /// Creates the carousel, performs the first layout and starts autoplay.
    #[must_use]
    pub fn new(host: Host, config: CarouselConfig) -> Self {
        let layout = Layout::for_window_width(host.slide_count, host.window_width);
        let mut carousel = Self {
            host,
            config,
            pager: Pager::new(layout),
            track: Track::new(config.transition),
            indicators: Indicators::new(layout.page_count()),
            autoplay: Scheduler::new(config.autoplay_interval, config.autoplay),
            drag: DragState::default(),
            hovered: false,
            focused: false,
            cursor_x: None,
            destroyed: false,
        };

        carousel.apply_layout();
        carousel.autoplay.start();

        tracing::info!(
            slides = host.slide_count,
            visible = layout.visible_count(),
            autoplay = config.autoplay,
            "carousel mounted"
        );
        carousel
    }

    // =========================================================================
    // Public operations
    // =========================================================================

    /// Moves to `target` (clamped) and refreshes the indicators.
    pub fn go_to(&mut self, target: usize, transition: Transition) {
        if self.destroyed {
            return;
        }
        let index = self.pager.go_to(target);
        self.track.move_to(self.pager.translate_percent(), transition);
        self.indicators.sync(index);
    }

    /// Jumps to `page` and resets the autoplay clock.
    pub fn go_to_page(&mut self, page: usize) {
        self.step(page);
    }

    pub fn next(&mut self) {
        self.step(self.pager.next_target());
    }

    pub fn previous(&mut self) {
        self.step(self.pager.previous_target());
    }

    /// Recomputes the visible count for the host width, clamps the current
    /// page and repositions the track without animation.
    ///
    /// Returns true when the visible count changed.
    pub fn apply_layout(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        let layout = Layout::for_window_width(self.host.slide_count, self.host.window_width);
        let changed = self.pager.set_layout(layout);
        self.go_to(self.pager.current_index(), Transition::Instant);
        changed
    }

    /// Reacts to a new window width. Indicators are rebuilt only when the
    /// visible count actually changed.
    pub fn resize(&mut self, window_width: f32) {
        if self.destroyed {
            return;
        }
        self.host.window_width = window_width;
        if self.apply_layout() {
            let layout = self.pager.layout();
            self.indicators.rebuild(layout.page_count());
            self.indicators.sync(self.pager.current_index());
            tracing::debug!(
                window_width,
                visible = layout.visible_count(),
                pages = layout.page_count(),
                "carousel layout changed, indicators rebuilt"
            );
        }
    }

    /// Advances one page as the autoplay timer would.
    pub fn advance(&mut self) {
        if self.destroyed {
            return;
        }
        let target = autoplay::advance_target(self.pager.current_index(), self.pager.max_index());
        self.go_to(target, Transition::Animated);
    }

    /// Stops autoplay and cancels any drag; every later call is ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.autoplay.stop();
        self.drag = DragState::Idle;
        self.track.freeze();
        self.destroyed = true;
        tracing::info!("carousel destroyed");
    }

    // =========================================================================
    // Drag protocol
    // =========================================================================

    /// Starts a drag at horizontal coordinate `x`.
    pub fn drag_start(&mut self, x: f32, kind: PointerKind) {
        if self.destroyed {
            return;
        }
        self.track.freeze();
        if self.drag.begin(x, self.track.translate_percent(), kind) {
            self.autoplay.stop();
        }
    }

    /// Follows a drag to `x`, previewing the track without clamping.
    pub fn drag_move(&mut self, x: f32, kind: PointerKind) {
        if self.destroyed {
            return;
        }
        if let Some(percent) = self.drag.update(x, self.viewport_width(), kind) {
            self.track.preview(percent);
        }
    }

    /// Ends a drag and commits it to a page. Stray ends are ignored.
    pub fn drag_end(&mut self, kind: PointerKind) {
        if self.destroyed {
            return;
        }
        let Some(release) = self.drag.end(kind) else {
            return;
        };

        let outcome = gesture::classify(release.moved_percent, self.config.drag_threshold);
        tracing::debug!(
            moved_percent = release.moved_percent,
            ?outcome,
            kind = ?release.kind,
            "drag released"
        );

        match outcome {
            DragOutcome::Next => self.next(),
            DragOutcome::Previous => self.previous(),
            DragOutcome::SnapBack => {
                self.go_to(self.pager.current_index(), Transition::Animated);
                if !self.hovered && !self.focused {
                    self.autoplay.start();
                }
            }
        }
    }

    // =========================================================================
    // Suspension
    // =========================================================================

    pub fn pointer_entered(&mut self) {
        if self.destroyed {
            return;
        }
        self.hovered = true;
        self.autoplay.stop();
    }

    pub fn pointer_left(&mut self) {
        if self.destroyed {
            return;
        }
        self.hovered = false;
        if !self.focused {
            self.autoplay.start();
        }
    }

    pub fn focus_gained(&mut self) {
        if self.destroyed {
            return;
        }
        self.focused = true;
        self.autoplay.stop();
    }

    pub fn focus_lost(&mut self) {
        if self.destroyed {
            return;
        }
        self.focused = false;
        if !self.hovered {
            self.autoplay.start();
        }
    }

    // =========================================================================
    // Message adapter
    // =========================================================================

    pub fn update(&mut self, message: Message) {
        if self.destroyed {
            return;
        }

        match message {
            Message::Resized(width) => self.resize(width),
            Message::Previous => self.previous(),
            Message::Next => self.next(),
            Message::GoToPage(page) => self.go_to_page(page),
            Message::AutoplayTick(id) => {
                if self.autoplay.fire(id) {
                    self.advance();
                }
            }
            Message::PointerEntered => self.pointer_entered(),
            Message::PointerLeft => self.pointer_left(),
            Message::FocusGained => self.focus_gained(),
            Message::FocusLost => self.focus_lost(),
            Message::ViewportMoved(x) => {
                self.cursor_x = Some(x);
                self.drag_move(x, PointerKind::Mouse);
            }
            Message::ViewportPressed => {
                if let Some(x) = self.cursor_x {
                    self.drag_start(x, PointerKind::Mouse);
                }
            }
            Message::ViewportReleased => self.drag_end(PointerKind::Mouse),
            Message::ViewportExited => {
                self.cursor_x = None;
                self.drag_end(PointerKind::Mouse);
            }
            Message::TouchLost => self.drag_end(PointerKind::Mouse),
            Message::Key(command) => self.handle_key(command),
            Message::Frame(now) => {
                self.track.tick(now);
            }
        }
    }

    fn handle_key(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::ToggleFocus if self.focused => self.focus_lost(),
            KeyCommand::ToggleFocus => self.focus_gained(),
            KeyCommand::Blur if self.focused => self.focus_lost(),
            _ if !self.focused => {}
            KeyCommand::Previous => self.previous(),
            KeyCommand::Next => self.next(),
            KeyCommand::First => self.go_to_page(0),
            KeyCommand::Last => self.go_to_page(self.pager.max_index()),
            KeyCommand::Blur => {}
        }
    }

    /// User-initiated navigation: animated move plus an autoplay restart.
    fn step(&mut self, target: usize) {
        if self.destroyed {
            return;
        }
        self.go_to(target, Transition::Animated);
        self.autoplay.restart();
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Live timer, animation frames, touch cancellation and keyboard input.
    ///
    /// Empty once destroyed, which releases every listener.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.destroyed {
            return Subscription::none();
        }

        let mut subscriptions = vec![event::listen_with(route_input)];

        if let Some(id) = self.autoplay.active_timer() {
            subscriptions.push(
                time::every(self.autoplay.interval().as_duration())
                    .with(id)
                    .map(|(id, _)| Message::AutoplayTick(id)),
            );
        }

        if self.track.is_animating() {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.pager.current_index()
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.pager.max_index()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pager.layout().page_count()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.pager.layout().visible_count()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.host.slide_count
    }

    #[must_use]
    pub fn slide_width_percent(&self) -> f32 {
        self.pager.layout().slide_width_percent()
    }

    /// Displayed track translation, in percent of the viewport width.
    #[must_use]
    pub fn current_translate_percent(&self) -> f32 {
        self.track.translate_percent()
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        self.host.controls
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        layout::viewport_width(self.host.window_width, self.host.controls)
    }

    #[must_use]
    pub fn autoplay_status(&self) -> autoplay::Status {
        self.autoplay.status()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.autoplay.pending_timers()
    }

    #[must_use]
    pub fn active_timer(&self) -> Option<TimerId> {
        self.autoplay.active_timer()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        self.config
    }
}

/// Window-level input the viewport widget cannot observe.
///
/// Finger presses, moves and lifts reach the carousel only through the
/// viewport's `mouse_area`, so a drag always starts inside the viewport.
fn route_input(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::TouchLost),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            key_command(&key).map(Message::Key)
        }
        _ => None,
    }
}

fn key_command(key: &Key) -> Option<KeyCommand> {
    match key {
        Key::Named(Named::Tab) => Some(KeyCommand::ToggleFocus),
        Key::Named(Named::Escape) => Some(KeyCommand::Blur),
        Key::Named(Named::ArrowLeft) => Some(KeyCommand::Previous),
        Key::Named(Named::ArrowRight) => Some(KeyCommand::Next),
        Key::Named(Named::Home) => Some(KeyCommand::First),
        Key::Named(Named::End) => Some(KeyCommand::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, PERCENT_EPSILON};

    const NARROW: f32 = 500.0;
    const MEDIUM: f32 = 900.0;
    const WIDE: f32 = 1200.0;

    fn carousel(slide_count: usize, window_width: f32) -> Carousel {
        Carousel::new(
            Host {
                slide_count,
                controls: Controls::BOTH,
                window_width,
            },
            CarouselConfig::default(),
        )
    }

    fn fire_autoplay(c: &mut Carousel) {
        let id = c.active_timer().expect("autoplay should be running");
        c.update(Message::AutoplayTick(id));
    }

    /// Drags the mouse across the viewport by `moved_percent` of its width.
    fn mouse_drag(c: &mut Carousel, moved_percent: f32) {
        let start = c.viewport_width() / 2.0;
        let end = start + moved_percent / 100.0 * c.viewport_width();
        c.update(Message::ViewportMoved(start));
        c.update(Message::ViewportPressed);
        c.update(Message::ViewportMoved(end));
        c.update(Message::ViewportReleased);
    }

    #[test]
    fn mount_without_host_is_silent_no_op() {
        assert!(mount(None, CarouselConfig::default()).is_none());
    }

    #[test]
    fn mount_starts_on_first_page_with_autoplay_running() {
        let c = mount(
            Some(Host {
                slide_count: 5,
                controls: Controls::BOTH,
                window_width: MEDIUM,
            }),
            CarouselConfig::default(),
        )
        .unwrap();

        assert_eq!(c.current_index(), 0);
        assert_eq!(c.visible_count(), 2);
        assert_eq!(c.max_index(), 3);
        assert_eq!(c.indicators().len(), 4);
        assert_eq!(c.pending_timers(), 1);
        assert_abs_diff_eq!(c.current_translate_percent(), 0.0);
    }

    #[test]
    fn navigation_stays_clamped() {
        let mut c = carousel(4, MEDIUM);
        let ops: [fn(&mut Carousel); 3] = [Carousel::next, Carousel::previous, Carousel::advance];
        for round in 0..40 {
            ops[(round * 5 + 2) % 3](&mut c);
            c.go_to_page(round * 3 % 7);
            assert!(c.current_index() <= c.max_index());
        }
    }

    #[test]
    fn go_to_page_out_of_range_clamps_to_last_page() {
        let mut c = carousel(6, WIDE);
        c.go_to_page(99);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.indicators().active_page(), 3);
    }

    #[test]
    fn previous_at_first_page_stays_put() {
        let mut c = carousel(3, NARROW);
        c.previous();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn next_at_last_page_does_not_wrap() {
        let mut c = carousel(3, NARROW);
        c.go_to_page(2);
        c.next();
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn zero_slides_keep_one_indicator_and_index_zero() {
        let mut c = carousel(0, WIDE);
        assert_eq!(c.max_index(), 0);
        assert_eq!(c.indicators().len(), 1);
        c.next();
        c.advance();
        c.go_to_page(3);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn autoplay_wraps_after_last_page() {
        let mut c = carousel(5, MEDIUM);
        let mut visited = vec![c.current_index()];
        for _ in 0..5 {
            fire_autoplay(&mut c);
            visited.push(c.current_index());
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn stale_autoplay_tick_is_ignored() {
        let mut c = carousel(5, NARROW);
        let stale = c.active_timer().unwrap();
        c.next();
        let index = c.current_index();

        c.update(Message::AutoplayTick(stale));
        assert_eq!(c.current_index(), index);
    }

    #[test]
    fn user_navigation_restarts_autoplay() {
        let mut c = carousel(5, NARROW);
        let before = c.active_timer().unwrap();
        c.next();
        let after = c.active_timer().unwrap();
        assert_ne!(before, after);
        assert_eq!(c.pending_timers(), 1);
    }

    #[test]
    fn repeated_enter_keeps_autoplay_suspended() {
        let mut c = carousel(5, NARROW);
        for _ in 0..4 {
            c.update(Message::PointerEntered);
            assert_eq!(c.pending_timers(), 0);
        }
        c.update(Message::PointerLeft);
        assert_eq!(c.pending_timers(), 1);
    }

    #[test]
    fn focus_suspends_until_lost() {
        let mut c = carousel(5, NARROW);
        c.update(Message::FocusGained);
        c.update(Message::FocusGained);
        assert_eq!(c.pending_timers(), 0);

        c.update(Message::FocusLost);
        assert_eq!(c.pending_timers(), 1);
    }

    #[test]
    fn leaving_while_focused_stays_suspended() {
        let mut c = carousel(5, NARROW);
        c.update(Message::PointerEntered);
        c.update(Message::FocusGained);
        c.update(Message::PointerLeft);
        assert_eq!(c.pending_timers(), 0);
    }

    #[test]
    fn resize_rebuilds_indicators_only_when_visible_count_changes() {
        let mut c = carousel(6, WIDE);
        let generation = c.indicators().generation();

        c.update(Message::Resized(1300.0));
        assert_eq!(c.indicators().generation(), generation);

        c.update(Message::Resized(MEDIUM));
        assert_eq!(c.indicators().generation(), generation + 1);
        assert_eq!(c.indicators().len(), c.max_index() + 1);

        c.update(Message::Resized(800.0));
        assert_eq!(c.indicators().generation(), generation + 1);

        c.update(Message::Resized(NARROW));
        assert_eq!(c.indicators().generation(), generation + 2);
        assert_eq!(c.indicators().len(), 6);
    }

    #[test]
    fn growing_visible_count_clamps_index_instantly() {
        let mut c = carousel(5, NARROW);
        c.go_to_page(4);

        c.update(Message::Resized(WIDE));
        assert_eq!(c.current_index(), 2);
        assert!(!c.track().is_animating());
        assert_abs_diff_eq!(
            c.current_translate_percent(),
            -200.0 / 3.0,
            epsilon = PERCENT_EPSILON
        );
        assert_eq!(c.indicators().active_page(), 2);
    }

    #[test]
    fn drag_past_threshold_commits_next() {
        let mut c = carousel(4, NARROW);
        c.go_to(1, Transition::Instant);

        mouse_drag(&mut c, -20.0);
        assert_eq!(c.current_index(), 2);
        assert!(!c.is_dragging());
    }

    #[test]
    fn drag_within_threshold_snaps_back() {
        let mut c = carousel(4, NARROW);
        c.go_to(1, Transition::Instant);

        mouse_drag(&mut c, -5.0);
        assert_eq!(c.current_index(), 1);
        assert_abs_diff_eq!(c.track().target_percent(), -100.0);
    }

    #[test]
    fn drag_right_past_threshold_commits_previous() {
        let mut c = carousel(4, NARROW);
        c.go_to(1, Transition::Instant);

        mouse_drag(&mut c, 20.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn zero_movement_drag_snaps_back() {
        let mut c = carousel(4, NARROW);
        c.go_to(2, Transition::Instant);
        mouse_drag(&mut c, 0.0);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn drag_preview_tracks_cursor_unclamped() {
        let mut c = carousel(4, NARROW);
        let width = c.viewport_width();
        c.update(Message::ViewportMoved(10.0));
        c.update(Message::ViewportPressed);
        c.update(Message::ViewportMoved(10.0 + width * 0.3));

        assert!(c.is_dragging());
        assert_abs_diff_eq!(c.current_translate_percent(), 30.0, epsilon = 1e-3);
        assert_eq!(c.pending_timers(), 0);
    }

    #[test]
    fn leaving_viewport_mid_drag_ends_it() {
        let mut c = carousel(4, NARROW);
        let width = c.viewport_width();
        c.update(Message::ViewportMoved(width * 0.8));
        c.update(Message::ViewportPressed);
        c.update(Message::ViewportMoved(width * 0.5));
        c.update(Message::ViewportExited);

        assert!(!c.is_dragging());
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn stray_release_is_a_no_op() {
        let mut c = carousel(4, NARROW);
        let before = c.clone();
        c.update(Message::ViewportExited);
        c.update(Message::ViewportReleased);
        c.update(Message::TouchLost);
        assert_eq!(c.current_index(), before.current_index());
        assert_eq!(c.active_timer(), before.active_timer());
    }

    fn finger(event: touch::Event, status: event::Status) -> Option<Message> {
        route_input(Event::Touch(event), status, window::Id::unique())
    }

    #[test]
    fn window_touches_never_start_a_drag() {
        let mut c = carousel(4, NARROW);
        c.go_to(1, Transition::Instant);
        let id = touch::Finger(0);

        // Above the track, on an indicator or a toast: captured or not.
        for status in [event::Status::Ignored, event::Status::Captured] {
            let pressed = finger(
                touch::Event::FingerPressed {
                    id,
                    position: iced::Point::new(200.0, 2.0),
                },
                status,
            );
            let moved = finger(
                touch::Event::FingerMoved {
                    id,
                    position: iced::Point::new(20.0, 2.0),
                },
                status,
            );
            let lifted = finger(
                touch::Event::FingerLifted {
                    id,
                    position: iced::Point::new(20.0, 2.0),
                },
                status,
            );
            for message in [pressed, moved, lifted].into_iter().flatten() {
                c.update(message);
            }
        }

        assert!(!c.is_dragging());
        assert_eq!(c.pending_timers(), 1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn lost_touch_ends_a_viewport_drag() {
        let mut c = carousel(4, NARROW);
        let width = c.viewport_width();
        c.update(Message::ViewportMoved(width * 0.9));
        c.update(Message::ViewportPressed);
        c.update(Message::ViewportMoved(width * 0.5));

        let lost = finger(
            touch::Event::FingerLost {
                id: touch::Finger(0),
                position: iced::Point::new(width * 0.5, 100.0),
            },
            event::Status::Ignored,
        );
        assert!(matches!(lost, Some(Message::TouchLost)));
        if let Some(message) = lost {
            c.update(message);
        }

        assert!(!c.is_dragging());
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn viewport_drag_has_a_single_owner() {
        let mut c = carousel(4, NARROW);
        let width = c.viewport_width();
        c.update(Message::ViewportMoved(width * 0.9));
        c.update(Message::ViewportPressed);
        // A second press on the same gesture does not rebase the drag.
        c.update(Message::ViewportPressed);
        c.update(Message::ViewportMoved(width * 0.5));

        assert_abs_diff_eq!(c.current_translate_percent(), -40.0, epsilon = 1e-3);
        c.update(Message::ViewportReleased);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn drag_start_freezes_running_animation() {
        let mut c = carousel(4, NARROW);
        c.next();
        assert!(c.track().is_animating());

        c.update(Message::ViewportMoved(100.0));
        c.update(Message::ViewportPressed);
        assert!(!c.track().is_animating());
        assert_abs_diff_eq!(c.current_translate_percent(), 0.0);
    }

    #[test]
    fn keyboard_navigation_requires_focus() {
        let mut c = carousel(5, NARROW);
        c.update(Message::Key(KeyCommand::Next));
        assert_eq!(c.current_index(), 0);

        c.update(Message::Key(KeyCommand::ToggleFocus));
        assert!(c.is_focused());
        c.update(Message::Key(KeyCommand::Next));
        assert_eq!(c.current_index(), 1);
        c.update(Message::Key(KeyCommand::Last));
        assert_eq!(c.current_index(), 4);
        c.update(Message::Key(KeyCommand::First));
        assert_eq!(c.current_index(), 0);

        c.update(Message::Key(KeyCommand::Blur));
        assert!(!c.is_focused());
        assert_eq!(c.pending_timers(), 1);
    }

    #[test]
    fn frames_advance_animation_to_target() {
        let mut c = carousel(4, NARROW);
        c.next();
        let start = Instant::now();
        c.update(Message::Frame(start));
        c.update(Message::Frame(start + std::time::Duration::from_secs(1)));
        assert!(!c.track().is_animating());
        assert_abs_diff_eq!(c.current_translate_percent(), -100.0);
    }

    #[test]
    fn destroy_releases_timer_and_ignores_input() {
        let mut c = carousel(5, NARROW);
        let timer = c.active_timer().unwrap();
        c.destroy();
        c.destroy();

        assert!(c.is_destroyed());
        assert_eq!(c.pending_timers(), 0);

        c.update(Message::AutoplayTick(timer));
        c.next();
        c.update(Message::PointerLeft);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.pending_timers(), 0);
    }

    #[test]
    fn disabled_autoplay_never_schedules() {
        let mut c = Carousel::new(
            Host {
                slide_count: 5,
                controls: Controls::NONE,
                window_width: NARROW,
            },
            CarouselConfig {
                autoplay: false,
                ..CarouselConfig::default()
            },
        );
        assert_eq!(c.pending_timers(), 0);
        c.next();
        c.update(Message::PointerLeft);
        assert_eq!(c.pending_timers(), 0);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = carousel(5, NARROW);
        let b = carousel(5, NARROW);
        a.next();
        a.destroy();
        assert_eq!(b.current_index(), 0);
        assert_eq!(b.pending_timers(), 1);
    }

    #[test]
    fn key_mapping_covers_navigation_keys() {
        assert_eq!(key_command(&Key::Named(Named::Tab)), Some(KeyCommand::ToggleFocus));
        assert_eq!(key_command(&Key::Named(Named::End)), Some(KeyCommand::Last));
        assert_eq!(key_command(&Key::Character("a".into())), None);
    }
}
