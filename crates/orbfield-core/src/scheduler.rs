/// "Call me back before the next repaint."
///
/// The web build binds this to `requestAnimationFrame`; headless runs and tests
/// use [`ManualScheduler`] and fire frames themselves.
pub trait FrameScheduler {
    /// Request exactly one callback. A request while one is pending replaces it.
    fn request_frame(&mut self);
    /// Drop the pending callback, if any.
    fn cancel(&mut self);
}

/// Scheduler driven by hand: [`ManualScheduler::fire`] consumes the pending request.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    requests: u64,
    cancels: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request. Returns false when nothing was scheduled.
    pub fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn cancels(&self) -> u64 {
        self.cancels
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    fn cancel(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancels += 1;
        }
    }
}
