use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::easing::{EasingFn, linear};
use crate::types::SlideKey;

/// A callback fired once per committed active-index change.
///
/// The second argument is the newly resolved active index.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Carousel<K>, usize) + Send + Sync>;

/// A callback fired when a click passes through (no drag accumulated, no transition in
/// flight). Suppressed clicks never reach it.
pub type OnClickCallback<K> = Arc<dyn Fn(&Carousel<K>) + Send + Sync>;

/// Maps a slide index to a stable render-list key.
///
/// Give each slide its own identity here when slides can be reordered or replaced; the
/// default keys by position (`i as u64`), which is the fallback a caller without stable
/// identities would use anyway.
pub type SlideKeyFn<K> = Arc<dyn Fn(usize) -> K + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s so adapters
/// can update a few fields and call `Carousel::set_options` without reallocating closures.
pub struct CarouselOptions<K = SlideKey> {
    /// Number of slides supplied by the caller.
    pub count: usize,

    /// Initial active index when the carousel is uncontrolled.
    pub default_index: usize,

    /// Controlled active index.
    ///
    /// When `Some`, this overrides the internally committed index for rendering on every
    /// update. The engine's drag/transition logic still operates on its own committed index;
    /// keeping the two in sync (by updating this field in response to `on_change`) is the
    /// caller's responsibility.
    pub index: Option<usize>,

    /// Whether index arithmetic wraps past the first/last slide.
    pub looping: bool,

    /// Max number of slides rendered around the active one.
    pub overscan: usize,

    /// Whether transitions are animated or snap instantly.
    pub animate: bool,

    /// Minimum drag distance in pixels to commit a slide change.
    pub slide_threshold: f64,

    pub animation_duration_ms: u64,

    /// Easing curve applied to transition progress.
    pub easing: EasingFn,

    pub get_slide_key: SlideKeyFn<K>,

    /// Optional callback fired when the active index commits.
    pub on_change: Option<OnChangeCallback<K>>,

    /// Optional click passthrough.
    pub on_click: Option<OnClickCallback<K>>,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            default_index: self.default_index,
            index: self.index,
            looping: self.looping,
            overscan: self.overscan,
            animate: self.animate,
            slide_threshold: self.slide_threshold,
            animation_duration_ms: self.animation_duration_ms,
            easing: Arc::clone(&self.easing),
            get_slide_key: Arc::clone(&self.get_slide_key),
            on_change: self.on_change.clone(),
            on_click: self.on_click.clone(),
        }
    }
}

impl CarouselOptions<SlideKey> {
    /// Creates options for a carousel keyed by position (`SlideKey = u64`).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            default_index: 0,
            index: None,
            looping: false,
            overscan: 3,
            animate: true,
            slide_threshold: 50.0,
            animation_duration_ms: 250,
            easing: Arc::new(linear),
            get_slide_key: Arc::new(|i| i as u64),
            on_change: None,
            on_click: None,
        }
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// `get_slide_key(i)` should return a stable identity for the slide at index `i`.
    pub fn new_with_key(
        count: usize,
        get_slide_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            default_index: 0,
            index: None,
            looping: false,
            overscan: 3,
            animate: true,
            slide_threshold: 50.0,
            animation_duration_ms: 250,
            easing: Arc::new(linear),
            get_slide_key: Arc::new(get_slide_key),
            on_change: None,
            on_click: None,
        }
    }

    pub fn with_default_index(mut self, default_index: usize) -> Self {
        self.default_index = default_index;
        self
    }

    /// Sets the controlled index (`None` switches back to uncontrolled).
    pub fn with_index(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_slide_threshold(mut self, slide_threshold: f64) -> Self {
        self.slide_threshold = slide_threshold;
        self
    }

    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.easing = Arc::new(easing);
        self
    }

    pub fn with_get_slide_key(
        mut self,
        get_slide_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_slide_key = Arc::new(get_slide_key);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel<K>, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_click(
        mut self,
        on_click: Option<impl Fn(&Carousel<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_click = on_click.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("default_index", &self.default_index)
            .field("index", &self.index)
            .field("looping", &self.looping)
            .field("overscan", &self.overscan)
            .field("animate", &self.animate)
            .field("slide_threshold", &self.slide_threshold)
            .field("animation_duration_ms", &self.animation_duration_ms)
            .finish_non_exhaustive()
    }
}
