//! Self-rescheduling frame loop.

use log::{debug, trace};
use rand::Rng;

use crate::field::BallField;
use crate::surface::Surface;

/// Frames between trace log lines.
const TRACE_EVERY: u64 = 600;

/// Host hook that arranges for the next frame to be ticked.
///
/// The host answers each request with exactly one call to
/// [`FrameLoop::tick`] at its next refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Frame loop lifecycle. There is no stopped state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

/// Drives a [`BallField`] one frame at a time.
#[derive(Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Leave `Idle` and request the first frame. Later calls do nothing.
    pub fn start<C: FrameScheduler + ?Sized>(&mut self, scheduler: &mut C) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        debug!("frame loop started");
        scheduler.request_frame();
    }

    /// Clear the surface, step every ball and request the next frame.
    ///
    /// Ticks delivered before [`FrameLoop::start`] are ignored.
    pub fn tick<S, R, C>(
        &mut self,
        field: &mut BallField,
        surface: &mut S,
        rng: &mut R,
        scheduler: &mut C,
    ) where
        S: Surface + ?Sized,
        R: Rng,
        C: FrameScheduler + ?Sized,
    {
        if self.state == LoopState::Idle {
            return;
        }

        surface.clear();
        field.step(surface, rng);
        self.frames += 1;
        if self.frames % TRACE_EVERY == 0 {
            trace!("rendered {} frames", self.frames);
        }
        scheduler.request_frame();
    }
}
