//! Start/stop lifecycle and frame counting for the paint loop.

use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::scheduler::FrameScheduler;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Running until stopped, never restarted. Owns the scheduler so that the
/// pending frame is always cancelled by the same party that requested it.
pub struct RenderLoop<F> {
    scheduler: F,
    state: LoopState,
    frame: u64,
    stats: FrameStats,
}

impl<F: FrameScheduler> RenderLoop<F> {
    /// Enter `Running` and request the first frame.
    pub fn start(mut scheduler: F) -> Self {
        scheduler.request_frame();
        Self {
            scheduler,
            state: LoopState::Running,
            frame: 0,
            stats: FrameStats::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames completed so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Bump the frame counter and return the new value used as simulation time.
    pub(crate) fn next_frame(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    /// Finish the current tick: sample frame rate and schedule the next one.
    pub(crate) fn reschedule(&mut self) {
        if let Some(fps) = self.stats.record() {
            log::debug!("[loop] frame={} fps={:.1}", self.frame, fps);
        }
        self.scheduler.request_frame();
    }

    /// `Running -> Stopped`, cancelling the pending frame. Returns false if
    /// already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        self.scheduler.cancel();
        true
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}

struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    /// Count a frame; yields the average rate once per sampling window.
    fn record(&mut self) -> Option<f64> {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f64();
        if elapsed < FRAME_STATS_INTERVAL_SEC {
            return None;
        }
        let fps = self.frames as f64 / elapsed;
        self.window_start = Instant::now();
        self.frames = 0;
        Some(fps)
    }
}
