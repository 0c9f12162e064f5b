//! Drag session state machine for the gradient panel.
//!
//! Pointer interaction is modeled as an explicit two-state machine instead
//! of a boolean flag: `Idle` until a press lands on the panel, `Dragging`
//! until release or cancel. While dragging, move events sample the surface
//! even when the pointer has left the panel bounds (coordinates are clamped
//! by the caller), which is the terminal equivalent of pointer capture.

/// State of a pointer drag session over the gradient surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No active drag session
    #[default]
    Idle,
    /// Pointer is held down; move events sample the surface
    Dragging,
}

impl DragState {
    /// Pointer pressed down on the panel. Always enters `Dragging`.
    pub fn pointer_down(&mut self) {
        *self = Self::Dragging;
    }

    /// Pointer moved. Returns `true` if the move belongs to an active drag
    /// session and should trigger sampling.
    #[must_use]
    pub fn pointer_move(&self) -> bool {
        *self == Self::Dragging
    }

    /// Pointer released or the drag was cancelled. Always returns to `Idle`.
    pub fn pointer_up(&mut self) {
        *self = Self::Idle;
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        *self == Self::Dragging
    }
}
