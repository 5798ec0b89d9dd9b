/// A lightweight snapshot of the render-relevant carousel state.
///
/// Rendering is a pure projection of this snapshot plus the visible slot window: recompute
/// both whenever the engine reports a change. With `feature = "serde"`, this type implements
/// `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSnapshot {
    /// The index driving the rendered window (controlled override or committed index).
    pub active_index: usize,
    /// Horizontal displacement of the active slide from its resting position, in pixels.
    pub offset: f64,
    pub is_interacting: bool,
    pub is_transitioning: bool,
}
