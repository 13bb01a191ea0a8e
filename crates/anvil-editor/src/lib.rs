pub mod drag;
pub mod input;
pub mod walker;

pub use drag::{DragSession, DragUpdate, DropIntent, HighlightSource};
pub use input::PointerEvent;
pub use walker::LinearLayout;
