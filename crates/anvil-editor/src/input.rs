//! Input abstraction layer.
//!
//! Normalizes DOM drag events into a `PointerEvent` consumed by the drag
//! session. Coordinates are the event's offset from the canvas element,
//! i.e. already in the same space as the highlights.

use anvil_core::Point;

/// A normalized drag event over a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved while dragging over the canvas.
    DragOver { offset_x: f64, offset_y: f64 },

    /// Pointer released over the canvas.
    Drop { offset_x: f64, offset_y: f64 },

    /// Pointer left the canvas mid-drag.
    DragLeave,
}

impl PointerEvent {
    /// Create a DragOver from a DOM `MouseEvent`'s `offsetX`/`offsetY`.
    pub fn drag_over(offset_x: f64, offset_y: f64) -> Self {
        Self::DragOver { offset_x, offset_y }
    }

    pub fn drop_at(offset_x: f64, offset_y: f64) -> Self {
        Self::Drop { offset_x, offset_y }
    }

    /// Canvas-local position, if this event carries one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::DragOver { offset_x, offset_y } | Self::Drop { offset_x, offset_y } => {
                Some(Point::new(offset_x, offset_y))
            }
            Self::DragLeave => None,
        }
    }
}
