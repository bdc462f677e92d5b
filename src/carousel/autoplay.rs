//! Auto-advance timer.
//!
//! A deadline state machine driven by the caller's clock: the host loop
//! passes `now` into every transition and into [`AutoAdvance::poll`], which
//! reports whether a forward move is due. Two deadlines exist at most:
//! the repeating advance and a one-shot restart after manual interaction.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    restart_delay: Duration,
    /// Next repeating fire; `Some` iff running
    next_advance: Option<Instant>,
    /// Pending one-shot restart
    restart_at: Option<Instant>,
}

impl AutoAdvance {
    /// Create a stopped timer.
    pub fn new(interval: Duration, restart_delay: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            restart_delay,
            next_advance: None,
            restart_at: None,
        }
    }

    pub fn state(&self) -> TimerState {
        if self.next_advance.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == TimerState::Running
    }

    pub fn restart_pending(&self) -> bool {
        self.restart_at.is_some()
    }

    /// Replace any repeating schedule with a fresh one firing every interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_advance = Some(now + self.interval);
        log::debug!("auto-advance started ({} ms)", self.interval.as_millis());
    }

    /// Cancel the repeating schedule. A pending restart is left alone.
    pub fn stop(&mut self) {
        if self.next_advance.take().is_some() {
            log::debug!("auto-advance stopped");
        }
    }

    /// Stop and arm a one-shot restart `restart_delay` from `now`, replacing
    /// any restart already pending.
    pub fn pause_for_manual(&mut self, now: Instant) {
        self.stop();
        if self.restart_at.replace(now + self.restart_delay).is_some() {
            log::debug!("pending restart superseded");
        }
    }

    /// Stop and drop any pending restart, unlike [`stop`](Self::stop).
    /// Used while the pointer is over the carousel so nothing resumes under it.
    pub fn hold(&mut self) {
        self.stop();
        self.restart_at = None;
    }

    /// Earliest moment anything is due, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.next_advance, self.restart_at) {
            (Some(a), Some(r)) => Some(a.min(r)),
            (a, r) => a.or(r),
        }
    }

    /// Advance the clock to `now` and report whether a forward move is due.
    ///
    /// A late poll fires once, like a delayed interval callback, and the
    /// schedule skips to the first deadline after `now`. A due restart starts
    /// the schedule from its own deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(at) = self.restart_at {
            if at <= now {
                self.restart_at = None;
                self.next_advance = Some(at + self.interval);
                log::debug!("auto-advance restarted after manual pause");
            }
        }

        let Some(next) = self.next_advance else {
            return false;
        };
        if next > now {
            return false;
        }
        let missed = (now - next).as_nanos() / self.interval.as_nanos();
        if missed > 0 {
            log::debug!("auto-advance polled late, skipping {} intervals", missed);
        }
        let skip = u32::try_from(missed + 1).unwrap_or(u32::MAX);
        self.next_advance = Some(next + self.interval * skip);
        true
    }
}
