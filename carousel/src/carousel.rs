use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::options::CarouselOptions;
use crate::resolve;
use crate::state::FrameSnapshot;
use crate::types::{SlideKey, Slot, SlotKeyed};

/// Outcome of one animation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    /// No transition in flight. A frame callback that was canceled but already queued lands
    /// here and must be absorbed silently.
    Idle,
    /// The animation advanced; schedule the next frame.
    Running,
    /// The transition reached its deadline and the target index was committed.
    Done,
}

/// The current drag's anchor.
///
/// `base_offset` is zero for a fresh drag. When a drag interrupts an in-flight animation it
/// carries the not-yet-settled offset, so the new drag stacks on top of it instead of
/// snapping the strip back to rest.
#[derive(Clone, Copy, Debug)]
struct Drag {
    start_x: f64,
    base_offset: f64,
}

/// An in-flight animated transition. `None` on the engine means idle.
#[derive(Clone, Copy, Debug)]
struct Transition {
    next_index: usize,
    start_ms: u64,
    start_offset: f64,
    end_offset: f64,
}

/// A headless swipeable carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by feeding pointer X coordinates, a measured slide width, and a
///   millisecond clock.
/// - Rendering is exposed as a pure projection: [`Carousel::frame`] plus the
///   [`Carousel::for_each_visible_slot`] window.
///
/// For pointer-event routing and frame scheduling, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<K = SlideKey> {
    options: CarouselOptions<K>,
    index: usize,
    offset: f64,
    is_interacting: bool,
    drag: Option<Drag>,
    transition: Option<Transition>,
    did_drag: bool,
    slide_width: Option<f64>,
}

impl<K> Carousel<K> {
    /// Creates a new carousel from options.
    ///
    /// The committed index starts at `options.index` (controlled) or `options.default_index`,
    /// clamped to the slide count.
    pub fn new(options: CarouselOptions<K>) -> Self {
        let start = options.index.unwrap_or(options.default_index);
        cdebug!(
            count = options.count,
            start,
            looping = options.looping,
            "Carousel::new"
        );
        Self {
            index: clamp_index(start, options.count),
            offset: 0.0,
            is_interacting: false,
            drag: None,
            transition: None,
            did_drag: false,
            slide_width: None,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    /// Replaces the options wholesale.
    ///
    /// The committed index is re-clamped when the count shrinks, an in-flight transition
    /// whose target fell out of range is dropped, and `on_change` fires once if the resolved
    /// active index changed (controlled-prop updates arrive through here).
    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        let prev_active = self.active_index();
        self.options = options;
        ctrace!(
            count = self.options.count,
            controlled = self.options.index,
            looping = self.options.looping,
            "Carousel::set_options"
        );

        self.index = clamp_index(self.index, self.options.count);
        if let Some(t) = self.transition {
            if t.next_index >= self.options.count {
                self.transition = None;
                self.offset = 0.0;
            }
        }
        #[cfg(feature = "tracing")]
        if let Some(controlled) = self.options.index {
            if self.options.count > 0 && controlled >= self.options.count {
                cwarn!(
                    controlled,
                    count = self.options.count,
                    "controlled index out of range; clamping for render"
                );
            }
        }

        let active = self.active_index();
        if active != prev_active {
            self.notify_change(active);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.update_options(|o| o.count = count);
    }

    /// Sets or clears the controlled index.
    pub fn set_controlled_index(&mut self, index: Option<usize>) {
        if self.options.index == index {
            return;
        }
        self.update_options(|o| o.index = index);
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.options.looping = looping;
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    pub fn set_animate(&mut self, animate: bool) {
        self.options.animate = animate;
    }

    pub fn set_slide_threshold(&mut self, slide_threshold: f64) {
        self.options.slide_threshold = slide_threshold;
    }

    pub fn set_animation_duration_ms(&mut self, duration_ms: u64) {
        self.options.animation_duration_ms = duration_ms;
    }

    pub fn set_easing(&mut self, easing: impl Fn(f64) -> f64 + Send + Sync + 'static) {
        self.options.easing = Arc::new(easing);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel<K>, usize) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_click(
        &mut self,
        on_click: Option<impl Fn(&Carousel<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_click = on_click.map(|f| Arc::new(f) as _);
    }

    /// Feeds the engine the measured slide width in pixels.
    ///
    /// The width is captured once per transition when the animation starts; a resize
    /// mid-transition leaves the in-flight animation on the stale width (accepted
    /// degradation). Without a measurement, transitions commit immediately.
    pub fn set_slide_width(&mut self, slide_width: Option<f64>) {
        self.slide_width = slide_width;
    }

    pub fn slide_width(&self) -> Option<f64> {
        self.slide_width
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// The index driving the rendered window: the controlled override when present
    /// (clamped to the slide count), the committed index otherwise.
    pub fn active_index(&self) -> usize {
        match self.options.index {
            Some(controlled) => clamp_index(controlled, self.options.count),
            None => self.index,
        }
    }

    /// The last committed index, ignoring any controlled override.
    pub fn committed_index(&self) -> usize {
        self.index
    }

    /// Current displacement of the active slide from its resting position, in pixels.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_interacting(&self) -> bool {
        self.is_interacting
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Target index of the in-flight transition, if any.
    pub fn next_slide_index(&self) -> Option<usize> {
        self.transition.map(|t| t.next_index)
    }

    /// Whether the current/most recent interaction accumulated a drag offset.
    ///
    /// Cleared at the next pointer-down; while set, clicks are suppressed.
    pub fn did_drag(&self) -> bool {
        self.did_drag
    }

    pub fn slide_key(&self, index: usize) -> K {
        (self.options.get_slide_key)(index)
    }

    /// Begins an interaction at pointer X coordinate `x` (mouse-down or first-touch start).
    ///
    /// Interrupting an in-flight animation drops it and anchors the new drag at the
    /// not-yet-settled offset, so there is no visual jump; the adapter must also cancel its
    /// scheduled frame callback.
    pub fn pointer_down(&mut self, x: f64) {
        ctrace!(x, interrupting = self.transition.is_some(), "pointer_down");
        self.did_drag = false;
        if self.transition.take().is_some() {
            self.drag = Some(Drag {
                start_x: x,
                base_offset: self.offset,
            });
        } else {
            self.offset = 0.0;
            self.drag = Some(Drag {
                start_x: x,
                base_offset: 0.0,
            });
        }
        self.is_interacting = true;
    }

    /// Updates the drag offset from pointer X coordinate `x`.
    ///
    /// No-op unless an interaction is in progress.
    pub fn pointer_move(&mut self, x: f64) {
        if !self.is_interacting {
            return;
        }
        let Some(drag) = self.drag else {
            return;
        };
        self.offset = drag.base_offset + (x - drag.start_x);
    }

    /// Ends the interaction (mouse-up, mouse-leave, or touch-end).
    ///
    /// A zero-offset release is a tap: interaction just stops. Otherwise the threshold rule
    /// picks the target index and the engine hands off to the animator. Returns whether an
    /// animated transition is now in flight (the adapter's cue to schedule a frame).
    pub fn pointer_up(&mut self, now_ms: u64) -> bool {
        if !self.is_interacting {
            return false;
        }
        self.is_interacting = false;
        self.drag = None;

        if self.offset == 0.0 {
            return false;
        }
        self.did_drag = true;

        if self.options.count == 0 {
            self.offset = 0.0;
            return false;
        }

        let target = resolve::transition_index(
            self.offset,
            self.options.slide_threshold,
            self.options.count,
            self.index,
            self.options.looping,
        );
        ctrace!(offset = self.offset, target, "pointer_up");
        self.slide_to(target, now_ms)
    }

    /// Fires the click passthrough if this interaction did not register as a drag and no
    /// transition is in flight. Returns whether the click passed through.
    pub fn click(&self) -> bool {
        if self.did_drag || self.transition.is_some() {
            return false;
        }
        if let Some(cb) = &self.options.on_click {
            cb(self);
        }
        true
    }

    /// Starts a transition to `target` (clamped to the slide count).
    ///
    /// Commits immediately when animation is disabled or no slide width has been measured.
    /// A call mid-transition retargets from the current offset. Returns whether an animated
    /// transition is in flight.
    pub fn slide_to(&mut self, target: usize, now_ms: u64) -> bool {
        if self.options.count == 0 {
            return false;
        }
        let target = target.min(self.options.count - 1);

        if target == self.index && self.offset == 0.0 {
            // Nothing to move and nothing to relax back.
            self.transition = None;
            return false;
        }

        let width = match self.slide_width {
            Some(w) if self.options.animate && w > 0.0 => w,
            _ => {
                self.commit(target);
                return false;
            }
        };

        let end_offset = resolve::transition_offset(
            self.index,
            target,
            self.offset,
            width,
            self.options.count,
        );
        cdebug!(
            from = self.index,
            target,
            start_offset = self.offset,
            end_offset,
            "slide_to"
        );
        self.is_interacting = false;
        self.drag = None;
        self.transition = Some(Transition {
            next_index: target,
            start_ms: now_ms,
            start_offset: self.offset,
            end_offset,
        });
        true
    }

    /// Advances one slide forward using the same index arithmetic as drag navigation.
    ///
    /// Ignored mid-interaction. Returns whether an animated transition is in flight.
    pub fn next(&mut self, now_ms: u64) -> bool {
        if self.options.count == 0 || self.is_interacting {
            return false;
        }
        let target = resolve::next_index(self.index, self.options.count, self.options.looping);
        self.slide_to(target, now_ms)
    }

    /// Retreats one slide; see [`Carousel::next`].
    pub fn prev(&mut self, now_ms: u64) -> bool {
        if self.options.count == 0 || self.is_interacting {
            return false;
        }
        let target = resolve::prev_index(self.index, self.options.count, self.options.looping);
        self.slide_to(target, now_ms)
    }

    /// Samples the in-flight transition at `now_ms`.
    ///
    /// Past the duration deadline the target index commits and the offset resets. Before it,
    /// the offset moves along `start_offset - end_offset × easing(progress)` and the caller
    /// schedules the next frame. Never panics: a stale callback finds no transition and
    /// returns [`TransitionStep::Idle`].
    pub fn transition_step(&mut self, now_ms: u64) -> TransitionStep {
        let Some(t) = self.transition else {
            return TransitionStep::Idle;
        };

        let elapsed = now_ms.saturating_sub(t.start_ms);
        if elapsed >= self.options.animation_duration_ms {
            self.commit(t.next_index);
            return TransitionStep::Done;
        }

        let progress = (elapsed as f64 / self.options.animation_duration_ms as f64).clamp(0.0, 1.0);
        let eased = t.end_offset * (self.options.easing)(progress);
        self.offset = t.start_offset - eased;
        TransitionStep::Running
    }

    /// Returns the render projection of the current state.
    pub fn frame(&self) -> FrameSnapshot {
        FrameSnapshot {
            active_index: self.active_index(),
            offset: self.offset,
            is_interacting: self.is_interacting,
            is_transitioning: self.transition.is_some(),
        }
    }

    /// Iterates the visible slide window without allocating.
    ///
    /// Cells carry their resting `left_percent`; the render layer adds
    /// [`Carousel::offset`] pixels on top. A `None` slide is an empty placeholder cell.
    pub fn for_each_visible_slot(&self, mut f: impl FnMut(Slot)) {
        resolve::for_each_window_slot(
            self.options.count,
            self.active_index(),
            self.options.overscan,
            self.options.looping,
            |pos, slide| {
                f(Slot {
                    slide,
                    left_percent: 100.0 * (pos as f64 - 1.0),
                });
            },
        );
    }

    /// Keyed variant of [`Carousel::for_each_visible_slot`].
    pub fn for_each_visible_slot_keyed(&self, mut f: impl FnMut(SlotKeyed<K>)) {
        resolve::for_each_window_slot(
            self.options.count,
            self.active_index(),
            self.options.overscan,
            self.options.looping,
            |pos, slide| {
                f(SlotKeyed {
                    key: slide.map(|i| self.slide_key(i)),
                    slide,
                    left_percent: 100.0 * (pos as f64 - 1.0),
                });
            },
        );
    }

    /// Collects the visible window into `out` (clears `out` first).
    pub fn collect_visible_slots(&self, out: &mut Vec<Slot>) {
        out.clear();
        self.for_each_visible_slot(|slot| out.push(slot));
    }

    /// Collects the keyed visible window into `out` (clears `out` first).
    pub fn collect_visible_slots_keyed(&self, out: &mut Vec<SlotKeyed<K>>) {
        out.clear();
        self.for_each_visible_slot_keyed(|slot| out.push(slot));
    }

    fn commit(&mut self, target: usize) {
        let changed = self.index != target;
        self.index = target;
        self.offset = 0.0;
        self.is_interacting = false;
        self.drag = None;
        self.transition = None;
        cdebug!(index = target, changed, "commit");
        if changed {
            self.notify_change(target);
        }
    }

    fn notify_change(&self, index: usize) {
        if let Some(cb) = &self.options.on_change {
            cb(self, index);
        }
    }
}

fn clamp_index(index: usize, count: usize) -> usize {
    if count == 0 { 0 } else { index.min(count - 1) }
}
