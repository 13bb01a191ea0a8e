//! Highlight geometry: the candidate drop locations a drag can resolve to.
//!
//! A highlight is a thin bar drawn between widgets. Vertical bars sit
//! between widgets laid out in a row, horizontal bars between widgets
//! stacked in a column. Each bar has a catchment (`DropZone`) reaching
//! past its bounding box in the directions that matter for its orientation.
//!
//! The layout walker hands highlights over as flat records with an
//! `isVertical` flag; here they become a tagged union so that each
//! orientation's math lives apart.

use crate::id::{LayoutId, WidgetId};
use crate::model::{FlexLayerAlignment, HighlightInfo, MAIN_CANVAS_ID};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pointer position in canvas-local pixels.
pub use kurbo::Point;

// ─── Drop zone ───────────────────────────────────────────────────────────

/// Extra catchment beyond a highlight's box, per side, in pixels.
///
/// `None` means the side was not declared; the selector falls back to its
/// default range for it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DropZone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl DropZone {
    /// Catchment for a vertical bar: only left/right matter.
    pub fn horizontal_sides(left: f64, right: f64) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            ..Self::default()
        }
        .normalized()
    }

    /// Catchment for a horizontal bar: only top/bottom matter.
    pub fn vertical_sides(top: f64, bottom: f64) -> Self {
        Self {
            top: Some(top),
            bottom: Some(bottom),
            ..Self::default()
        }
        .normalized()
    }

    /// Clamp negative tolerances to zero.
    pub fn normalized(self) -> Self {
        let clamp = |side: Option<f64>| side.map(|v| v.max(0.0));
        Self {
            top: clamp(self.top),
            bottom: clamp(self.bottom),
            left: clamp(self.left),
            right: clamp(self.right),
        }
    }
}

// ─── Highlight ───────────────────────────────────────────────────────────

/// Bounding box, catchment and payload of a single highlight bar.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightBar {
    pub pos_x: f64,
    pub pos_y: f64,
    pub width: f64,
    pub height: f64,
    pub drop_zone: DropZone,
    pub info: HighlightInfo,
}

impl HighlightBar {
    /// Negative extents are treated as zero-span.
    pub fn new(pos_x: f64, pos_y: f64, width: f64, height: f64) -> Self {
        Self {
            pos_x,
            pos_y,
            width: width.max(0.0),
            height: height.max(0.0),
            drop_zone: DropZone::default(),
            info: HighlightInfo::default(),
        }
    }

    pub fn with_drop_zone(mut self, drop_zone: DropZone) -> Self {
        self.drop_zone = drop_zone.normalized();
        self
    }

    pub fn with_info(mut self, info: HighlightInfo) -> Self {
        self.info = info;
        self
    }

    /// Bounding box. Extents are clamped so a hand-edited bar can never
    /// produce an inverted rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos_x,
            self.pos_y,
            self.pos_x + self.width.max(0.0),
            self.pos_y + self.height.max(0.0),
        )
    }
}

/// A candidate drop location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HighlightRecord", into = "HighlightRecord")]
pub enum Highlight {
    /// Insertion point between widgets in a row; `height` is its span.
    Vertical(HighlightBar),
    /// Insertion point between widgets in a column; `width` is its span.
    Horizontal(HighlightBar),
}

impl Highlight {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical(_))
    }

    pub fn bar(&self) -> &HighlightBar {
        match self {
            Self::Vertical(bar) | Self::Horizontal(bar) => bar,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bar().bounds()
    }

    pub fn info(&self) -> &HighlightInfo {
        &self.bar().info
    }
}

// ─── Wire form ───────────────────────────────────────────────────────────

/// Flat record as produced by the layout walker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HighlightRecord {
    is_vertical: bool,
    pos_x: f64,
    pos_y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    drop_zone: DropZone,
    #[serde(default)]
    alignment: FlexLayerAlignment,
    #[serde(default = "main_canvas")]
    canvas_id: WidgetId,
    #[serde(default)]
    layout_order: SmallVec<[LayoutId; 4]>,
    #[serde(default)]
    row_index: usize,
}

fn main_canvas() -> WidgetId {
    WidgetId::intern(MAIN_CANVAS_ID)
}

impl From<HighlightRecord> for Highlight {
    fn from(r: HighlightRecord) -> Self {
        let info = HighlightInfo {
            alignment: r.alignment,
            canvas_id: r.canvas_id,
            layout_order: r.layout_order,
            row_index: r.row_index,
        };
        let bar = HighlightBar::new(r.pos_x, r.pos_y, r.width, r.height)
            .with_drop_zone(r.drop_zone)
            .with_info(info);
        if r.is_vertical {
            Highlight::Vertical(bar)
        } else {
            Highlight::Horizontal(bar)
        }
    }
}

impl From<Highlight> for HighlightRecord {
    fn from(h: Highlight) -> Self {
        let is_vertical = h.is_vertical();
        let (Highlight::Vertical(bar) | Highlight::Horizontal(bar)) = h;
        Self {
            is_vertical,
            pos_x: bar.pos_x,
            pos_y: bar.pos_y,
            width: bar.width,
            height: bar.height,
            drop_zone: bar.drop_zone,
            alignment: bar.info.alignment,
            canvas_id: bar.info.canvas_id,
            layout_order: bar.info.layout_order,
            row_index: bar.info.row_index,
        }
    }
}
