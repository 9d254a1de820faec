//! Canvas collaborator seam.
//!
//! The rendering engine is external; the menu only needs to create text
//! widgets, mutate their text, and nudge their vertical position one
//! pixel at a time.

/// Opaque handle to a canvas widget.
///
/// Widgets are owned by the canvas; the menu holds non-owning handles
/// into that arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasHandle(pub u64);

impl CanvasHandle {
    /// Creates a handle from a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget factory and mutator provided by the display framework.
pub trait Canvas {
    /// Creates a text widget at `(x, y)` and returns its handle.
    fn create_textbox(&mut self, text: &str, x: i32, y: i32) -> CanvasHandle;

    /// Replaces the textual content of a text widget.
    fn set_text(&mut self, handle: CanvasHandle, text: &str);

    /// Moves a widget vertically by `dy` pixels.
    ///
    /// Called once per animation unit step; the menu paces these calls
    /// itself to produce a smooth scroll.
    fn shift_y(&mut self, handle: CanvasHandle, dy: i32);

    /// Destroys a widget. The handle must not be used afterwards.
    fn destroy(&mut self, handle: CanvasHandle);
}
