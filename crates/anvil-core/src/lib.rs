pub mod config;
pub mod geometry;
pub mod id;
pub mod load;
pub mod model;
pub mod selector;

pub use config::SelectorConfig;
pub use geometry::{DropZone, Highlight, HighlightBar, Point};
pub use id::{LayoutId, WidgetId};
pub use load::{emit_highlights, parse_highlights};
pub use model::*;
pub use selector::{DropTarget, select_closest, select_closest_with, viable_drop_positions};
