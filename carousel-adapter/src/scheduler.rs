/// Identifies one scheduled frame callback.
pub type FrameToken = u64;

/// The "request next frame" primitive, abstracted so the transition animator is testable
/// without a real display loop.
///
/// Contract:
/// - `schedule` requests that the driver invoke [`crate::Controller::on_frame`] once, on
///   the next frame, with the returned token.
/// - `cancel` revokes a previously scheduled callback. Canceling an already-fired or
///   unknown token is a no-op. A canceled callback may still arrive if it was already
///   queued; the controller absorbs it by token comparison.
/// - At most one callback is pending per controller; each frame step schedules only its
///   own successor.
pub trait FrameScheduler {
    fn schedule(&mut self) -> FrameToken;
    fn cancel(&mut self, token: FrameToken);
}

/// A deterministic scheduler for tests and simulations.
///
/// It performs no real scheduling: it records the pending token, and the driver loop reads
/// it back and calls `Controller::on_frame` with a virtual clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualScheduler {
    next_token: FrameToken,
    pending: Option<FrameToken>,
    scheduled: u64,
    canceled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The token of the not-yet-delivered frame request, if any.
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Marks the pending request as delivered and returns its token.
    pub fn take(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    /// Total number of frame requests made.
    pub fn scheduled_count(&self) -> u64 {
        self.scheduled
    }

    /// Number of requests canceled before delivery.
    pub fn canceled_count(&self) -> u64 {
        self.canceled
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) -> FrameToken {
        self.next_token += 1;
        self.pending = Some(self.next_token);
        self.scheduled += 1;
        self.next_token
    }

    fn cancel(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
            self.canceled += 1;
        }
    }
}
