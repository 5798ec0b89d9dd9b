//! Pure index arithmetic: commit decisions, loop wrapping, transition geometry, and the
//! visible slide window.
//!
//! Everything here is stateless; [`crate::Carousel`] composes these functions with its
//! runtime state. Index math documents `count >= 1` as a precondition where noted; the
//! window functions accept `count == 0` and return empty output.

use alloc::vec::Vec;

use crate::types::Direction;

/// Returns the geometric direction of a transition from `prev` to `next`.
///
/// The loop seam is special-cased before the plain comparison: `0 -> count-1` is a backward
/// wrap and `count-1 -> 0` a forward wrap, regardless of the numeric ordering.
pub fn direction(prev: usize, next: usize, count: usize) -> Direction {
    if prev == 0 && next == count - 1 {
        return Direction::Backward;
    }
    if next > prev {
        return Direction::Forward;
    }
    if prev == count - 1 && next == 0 {
        return Direction::Forward;
    }
    Direction::Backward
}

/// Resolves the index a released drag commits to.
///
/// A drag to the right (`offset >= threshold`) moves one slide back, a drag to the left
/// (`offset <= -threshold`) one slide forward; `looping` decides wrap vs. stay at the
/// boundaries. Anything below the threshold returns `current` unchanged (the drag snaps
/// back). Precondition: `count >= 1`.
pub fn transition_index(
    offset: f64,
    threshold: f64,
    count: usize,
    current: usize,
    looping: bool,
) -> usize {
    if offset >= threshold {
        if current == 0 {
            return if looping { count - 1 } else { current };
        }
        return current - 1;
    }

    if offset <= -threshold {
        if current == count - 1 {
            return if looping { 0 } else { current };
        }
        return current + 1;
    }

    current
}

/// Index one slide forward of `index`, wrapping iff `looping`, clamping otherwise.
///
/// Precondition: `count >= 1`.
pub fn next_index(index: usize, count: usize, looping: bool) -> usize {
    if index == count - 1 {
        if looping { 0 } else { index }
    } else {
        index + 1
    }
}

/// Index one slide back of `index`, wrapping iff `looping`, clamping otherwise.
///
/// Precondition: `count >= 1`.
pub fn prev_index(index: usize, count: usize, looping: bool) -> usize {
    if index == 0 {
        if looping { count - 1 } else { index }
    } else {
        index - 1
    }
}

/// Total pixel displacement an animation must traverse to land `next` at the resting
/// position, starting from `start_offset`.
///
/// Equal indexes yield `start_offset` unchanged (no motion; the animation relaxes the
/// offset back to zero). Otherwise a forward transition adds one slide width and a backward
/// transition subtracts it.
pub fn transition_offset(
    prev: usize,
    next: usize,
    start_offset: f64,
    slide_width: f64,
    count: usize,
) -> f64 {
    if prev == next {
        return start_offset;
    }

    match direction(prev, next, count) {
        Direction::Forward => start_offset + slide_width,
        Direction::Backward => start_offset - slide_width,
    }
}

/// Walks the visible slide window around `active`, emitting `(position, slide)` pairs.
///
/// `position` is the cell's place in the window; the render layer puts cell `position` at
/// `100% × (position - 1) + offset px`. `slide` is `None` for an empty placeholder cell
/// (non-looping boundary).
///
/// Window shape:
/// - `count <= overscan`: every slide, unchanged.
/// - `active == 0`: the last slide (or a placeholder when not looping) followed by the
///   first `overscan - 1` slides.
/// - looping and `active == count - 1`: the two last slides followed by the first.
/// - otherwise: the contiguous window `[active - 1, active - 1 + overscan)`, clamped at
///   `count`.
///
/// `count == 0` emits nothing.
pub fn for_each_window_slot(
    count: usize,
    active: usize,
    overscan: usize,
    looping: bool,
    mut emit: impl FnMut(usize, Option<usize>),
) {
    if count <= overscan {
        for i in 0..count {
            emit(i, Some(i));
        }
        return;
    }

    debug_assert!(active < count, "active index out of range (active={active}, count={count})");

    if active == 0 {
        emit(0, if looping { Some(count - 1) } else { None });
        for i in 0..overscan.saturating_sub(1) {
            emit(i + 1, Some(i));
        }
        return;
    }

    if looping && active == count - 1 {
        emit(0, Some(count - 2));
        emit(1, Some(count - 1));
        emit(2, Some(0));
        return;
    }

    let start = active - 1;
    let end = core::cmp::min(count, start + overscan);
    for (pos, i) in (start..end).enumerate() {
        emit(pos, Some(i));
    }
}

/// Collects the visible window into a `Vec` (see [`for_each_window_slot`]).
pub fn visible_window(
    count: usize,
    active: usize,
    overscan: usize,
    looping: bool,
) -> Vec<Option<usize>> {
    let mut out = Vec::new();
    for_each_window_slot(count, active, overscan, looping, |_, slide| out.push(slide));
    out
}
