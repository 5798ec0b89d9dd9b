/// Geometric direction of a transition between two slide indexes.
///
/// `Forward` moves the strip toward higher indexes (the active slide exits to the left),
/// `Backward` toward lower indexes. The wrap cases at the loop seam are special-cased by
/// [`crate::resolve::direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

pub type SlideKey = u64;

/// One cell of the rendered slide window.
///
/// `slide` is `None` for an empty placeholder cell (non-looping boundary). The cell's
/// resting position is `left_percent` percent of the slide width; the render layer adds the
/// carousel's current pixel offset on top (`left = left_percent% + offset px`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub slide: Option<usize>,
    pub left_percent: f64,
}

/// A [`Slot`] carrying the slide's stable render-list key.
///
/// `key` is `None` exactly when `slide` is `None`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotKeyed<K> {
    pub key: Option<K>,
    pub slide: Option<usize>,
    pub left_percent: f64,
}
