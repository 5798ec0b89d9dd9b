use carousel::{Carousel, CarouselOptions, TransitionStep};

use crate::event::PointerEvent;
use crate::scheduler::{FrameScheduler, FrameToken};

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and drives its
/// transitions through a [`FrameScheduler`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_event(event, now_ms)` when pointer/touch events occur
/// - `on_frame(token, now_ms)` when a scheduled frame callback fires
///
/// At most one frame callback is pending at a time; each step schedules only its own
/// successor. Starting a new drag cancels the pending callback, and a callback that was
/// already queued when it got canceled is recognized by its stale token and ignored, so
/// teardown and re-entrant input can never corrupt the engine state.
#[derive(Clone, Debug)]
pub struct Controller<K, S> {
    carousel: Carousel<K>,
    scheduler: S,
    pending: Option<FrameToken>,
}

impl<K, S: FrameScheduler> Controller<K, S> {
    pub fn new(options: CarouselOptions<K>, scheduler: S) -> Self {
        Self {
            carousel: Carousel::new(options),
            scheduler,
            pending: None,
        }
    }

    pub fn from_carousel(carousel: Carousel<K>, scheduler: S) -> Self {
        Self {
            carousel,
            scheduler,
            pending: None,
        }
    }

    pub fn carousel(&self) -> &Carousel<K> {
        &self.carousel
    }

    /// Mutable access to the engine.
    ///
    /// Note that mutating the engine directly does not touch the pending frame request;
    /// a callback scheduled for a transition you cancel this way is absorbed as `Idle`.
    pub fn carousel_mut(&mut self) -> &mut Carousel<K> {
        &mut self.carousel
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Cancels any pending frame request and disassembles the controller.
    pub fn into_parts(mut self) -> (Carousel<K>, S) {
        self.disarm();
        (self.carousel, self.scheduler)
    }

    /// The token of the frame callback the controller expects next, if any.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn is_animating(&self) -> bool {
        self.carousel.is_transitioning()
    }

    /// Feeds the engine the measured slide width; see [`Carousel::set_slide_width`].
    pub fn set_slide_width(&mut self, slide_width: Option<f64>) {
        self.carousel.set_slide_width(slide_width);
    }

    /// Routes a pointer event into the engine.
    ///
    /// Pointer-down (mouse or touch) cancels the pending frame callback before the engine
    /// drops its transition: both halves of the cancellation are required. Release events
    /// schedule the first frame when they start an animated transition.
    pub fn on_event(&mut self, event: PointerEvent, now_ms: u64) {
        match event {
            PointerEvent::MouseDown { x } | PointerEvent::TouchStart { x } => {
                self.disarm();
                self.carousel.pointer_down(x);
            }
            PointerEvent::MouseMove { x } | PointerEvent::TouchMove { x } => {
                self.carousel.pointer_move(x);
            }
            PointerEvent::MouseUp | PointerEvent::MouseLeave | PointerEvent::TouchEnd => {
                if self.carousel.pointer_up(now_ms) {
                    self.arm();
                }
            }
            PointerEvent::Click => {
                self.carousel.click();
            }
        }
    }

    /// Advances the animation in response to a scheduled frame callback.
    ///
    /// A token that does not match the pending request is stale (canceled or superseded)
    /// and is ignored. Otherwise the engine samples the transition at `now_ms`; while it
    /// keeps running, the successor frame is scheduled. Returns the new offset, or `None`
    /// when the callback was stale or no transition was in flight.
    pub fn on_frame(&mut self, token: FrameToken, now_ms: u64) -> Option<f64> {
        if self.pending != Some(token) {
            return None;
        }
        self.pending = None;

        match self.carousel.transition_step(now_ms) {
            TransitionStep::Running => {
                self.arm();
                Some(self.carousel.offset())
            }
            TransitionStep::Done => Some(self.carousel.offset()),
            TransitionStep::Idle => None,
        }
    }

    /// Starts an animated transition to `index`; see [`Carousel::slide_to`].
    pub fn slide_to(&mut self, index: usize, now_ms: u64) {
        self.disarm();
        if self.carousel.slide_to(index, now_ms) {
            self.arm();
        }
    }

    /// Advances one slide; see [`Carousel::next`].
    pub fn next(&mut self, now_ms: u64) {
        self.disarm();
        if self.carousel.next(now_ms) {
            self.arm();
        }
    }

    /// Retreats one slide; see [`Carousel::prev`].
    pub fn prev(&mut self, now_ms: u64) {
        self.disarm();
        if self.carousel.prev(now_ms) {
            self.arm();
        }
    }

    fn arm(&mut self) {
        self.pending = Some(self.scheduler.schedule());
    }

    fn disarm(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
    }
}
