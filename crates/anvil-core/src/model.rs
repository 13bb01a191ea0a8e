//! Layout-system vocabulary shared by the highlight walker, the selector
//! and the drop-commit side.
//!
//! None of these types are interpreted by the selector itself. They ride
//! along inside each highlight so that whoever commits the drop knows
//! where in the widget tree the dragged widgets should land.

use crate::id::{LayoutId, WidgetId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Widget id of the top-level canvas every page starts with.
pub const MAIN_CANVAS_ID: &str = "0";

// ─── Layout vocabulary ───────────────────────────────────────────────────

/// Alignment of a child within a flex layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexLayerAlignment {
    #[default]
    None,
    Start,
    Center,
    End,
}

/// Kind of layout component a highlight belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutComponentType {
    AlignedColumn,
    AlignedRow,
    Column,
    Row,
}

impl LayoutComponentType {
    /// Row-like layouts place children side by side, so their insertion
    /// points are vertical bars.
    pub fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::AlignedRow)
    }
}

/// How a widget sizes itself along the main axis of its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveBehavior {
    Fill,
    Hug,
}

// ─── Highlight payload ───────────────────────────────────────────────────

/// Where a highlight would insert the dragged widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightInfo {
    pub alignment: FlexLayerAlignment,
    /// Canvas widget that owns the layout.
    pub canvas_id: WidgetId,
    /// Top-down hierarchy of layouts; the last entry is the immediate parent.
    pub layout_order: SmallVec<[LayoutId; 4]>,
    /// Index within the parent layout to insert at.
    pub row_index: usize,
}

impl HighlightInfo {
    pub fn new(canvas_id: WidgetId, row_index: usize) -> Self {
        Self {
            alignment: FlexLayerAlignment::None,
            canvas_id,
            layout_order: SmallVec::new(),
            row_index,
        }
    }

    /// Immediate parent layout of the insertion point, if known.
    pub fn parent_layout(&self) -> Option<LayoutId> {
        self.layout_order.last().copied()
    }
}

impl Default for HighlightInfo {
    fn default() -> Self {
        Self::new(WidgetId::intern(MAIN_CANVAS_ID), 0)
    }
}

// ─── Widget arrangement ──────────────────────────────────────────────────

/// Measured position of a rendered widget, in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionData {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PositionData {
    pub fn rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

/// Positions of every rendered widget, keyed by widget id.
pub type WidgetPositions = HashMap<WidgetId, PositionData>;

/// A widget currently being dragged over the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggedWidget {
    pub widget_id: WidgetId,
    #[serde(rename = "type")]
    pub widget_type: String,
    pub responsive_behavior: ResponsiveBehavior,
}
