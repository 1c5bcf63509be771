//! Fixed-interval frame clock for the terminal host.

use std::time::{Duration, Instant};

use woolfall_field::FrameScheduler;

/// Frame clock driven by the terminal event loop.
///
/// A frame request arms a deadline one interval after the previous one. The
/// event loop waits on input until [`TerminalClock::timeout`] and then asks
/// [`TerminalClock::take_due`] whether to tick.
#[derive(Debug)]
pub struct TerminalClock {
    interval: Duration,
    last_deadline: Option<Instant>,
    pending: Option<Instant>,
}

impl TerminalClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_deadline: None,
            pending: None,
        }
    }

    /// Time until the pending frame is due, or `None` when nothing is requested.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the pending request if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    fn arm(&mut self, now: Instant) {
        // Stay on the interval grid unless we have fallen behind it
        let next = self
            .last_deadline
            .map(|last| last + self.interval)
            .filter(|next| *next > now)
            .unwrap_or(now + self.interval);
        self.last_deadline = Some(next);
        self.pending = Some(next);
    }
}

impl FrameScheduler for TerminalClock {
    fn request_frame(&mut self) {
        self.arm(Instant::now());
    }
}
