/// A unified pointer-event stream for the carousel.
///
/// Mouse and touch input drive the same offset math; the engine only ever sees X
/// coordinates. `MouseLeave` ends the interaction exactly like `MouseUp`, so a drag that
/// leaves the widget commits instead of sticking.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvent {
    MouseDown { x: f64 },
    MouseMove { x: f64 },
    MouseUp,
    MouseLeave,
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    Click,
}

impl PointerEvent {
    /// Builds a touch-start event from a platform touch list (single-finger horizontal
    /// swipe: only the first active touch point counts). `None` when the list is empty.
    pub fn touch_start(touch_xs: &[f64]) -> Option<Self> {
        first_touch_x(touch_xs).map(|x| Self::TouchStart { x })
    }

    /// Builds a touch-move event from a platform touch list; see [`PointerEvent::touch_start`].
    pub fn touch_move(touch_xs: &[f64]) -> Option<Self> {
        first_touch_x(touch_xs).map(|x| Self::TouchMove { x })
    }
}

/// X coordinate of the first active touch point, if any.
pub fn first_touch_x(touch_xs: &[f64]) -> Option<f64> {
    touch_xs.first().copied()
}
