use alloc::sync::Arc;

/// A pluggable easing curve mapping linear progress to eased progress.
///
/// The function receives `t` in `[0, 1]` and must map `0 -> 0`; it is expected (not
/// enforced) to map `1 -> 1`. The default is [`linear`].
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

pub fn linear(t: f64) -> f64 {
    t
}

pub fn smooth_step(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - (u * u * u) / 2.0
    }
}
