// SPDX-License-Identifier: MPL-2.0
//! Autoplay scheduler: `Running ↔ Suspended`.
//!
//! The scheduler never owns a real timer. While running it exposes the id of
//! the one live timer, and the carousel subscription turns that id into a
//! repeating `iced::time::every` stream keyed on it. Every `start` mints a
//! fresh id, so the runtime drops the previous stream and the interval
//! restarts from zero. Ticks carrying any other id are discarded, which makes
//! `stop` immediate: nothing scheduled before it can still advance a page.

use crate::domain::carousel::AutoplayInterval;

/// Identity of one scheduled repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running(TimerId),
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    status: Status,
    interval: AutoplayInterval,
    /// When false, `start` is a no-op and the carousel never auto-advances.
    enabled: bool,
    next_id: u64,
}

impl Scheduler {
    /// Creates a suspended scheduler.
    #[must_use]
    pub fn new(interval: AutoplayInterval, enabled: bool) -> Self {
        Self {
            status: Status::Suspended,
            interval,
            enabled,
            next_id: 0,
        }
    }

    /// Schedules a fresh timer, replacing any running one.
    pub fn start(&mut self) {
        if !self.enabled {
            return;
        }
        self.stop();

        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.status = Status::Running(id);
        tracing::debug!(timer = id.0, interval_ms = self.interval.millis(), "autoplay started");
    }

    /// Cancels the running timer. Safe to call when already suspended.
    pub fn stop(&mut self) {
        if let Status::Running(id) = self.status {
            self.status = Status::Suspended;
            tracing::debug!(timer = id.0, "autoplay stopped");
        }
    }

    /// Pushes the next automatic advance a full interval away.
    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// Accepts a tick. Returns true only when it belongs to the live timer.
    #[must_use]
    pub fn fire(&self, id: TimerId) -> bool {
        self.status == Status::Running(id)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.status, Status::Running(_))
    }

    #[must_use]
    pub fn active_timer(&self) -> Option<TimerId> {
        match self.status {
            Status::Running(id) => Some(id),
            Status::Suspended => None,
        }
    }

    /// Number of timers that could still fire: zero or one.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        usize::from(self.is_running())
    }

    #[must_use]
    pub fn interval(&self) -> AutoplayInterval {
        self.interval
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Page an automatic advance lands on: wraps to the first page once the last
/// one is reached, otherwise steps forward.
#[must_use]
pub fn advance_target(current: usize, max_index: usize) -> usize {
    if current >= max_index {
        0
    } else {
        current + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> Scheduler {
        Scheduler::new(AutoplayInterval::default(), true)
    }

    #[test]
    fn starts_suspended() {
        let s = scheduler();
        assert_eq!(s.status(), Status::Suspended);
        assert_eq!(s.pending_timers(), 0);
    }

    #[test]
    fn repeated_start_keeps_a_single_timer() {
        let mut s = scheduler();
        s.start();
        s.start();
        s.start();
        assert_eq!(s.pending_timers(), 1);
    }

    #[test]
    fn second_stop_is_a_no_op() {
        let mut s = scheduler();
        s.start();
        s.stop();
        let after_first = s.clone();
        s.stop();
        assert_eq!(s, after_first);
        assert_eq!(s.pending_timers(), 0);
    }

    #[test]
    fn mixed_sequences_never_exceed_one_timer() {
        let mut s = scheduler();
        let ops: [fn(&mut Scheduler); 3] = [Scheduler::start, Scheduler::stop, Scheduler::restart];
        for round in 0..30 {
            ops[round % 3](&mut s);
            ops[(round * 7 + 1) % 3](&mut s);
            assert!(s.pending_timers() <= 1);
        }
    }

    #[test]
    fn stale_ticks_are_rejected() {
        let mut s = scheduler();
        s.start();
        let first = s.active_timer().unwrap();
        assert!(s.fire(first));

        s.restart();
        assert!(!s.fire(first));
        assert!(s.fire(s.active_timer().unwrap()));

        s.stop();
        assert!(!s.fire(first));
    }

    #[test]
    fn disabled_scheduler_never_runs() {
        let mut s = Scheduler::new(AutoplayInterval::default(), false);
        s.start();
        s.restart();
        assert_eq!(s.pending_timers(), 0);
        assert!(!s.is_enabled());
    }

    #[test]
    fn advance_wraps_only_at_the_end() {
        let visited: Vec<_> = std::iter::successors(Some(0), |&i| Some(advance_target(i, 3)))
            .take(6)
            .collect();
        assert_eq!(visited, vec![0, 1, 2, 3, 0, 1]);
        assert_eq!(advance_target(0, 0), 0);
    }
}
