//! Highlight derivation for a single row or column layout.
//!
//! Walks the measured children of a linear layout and emits one insertion
//! bar before each child plus one after the last. Rows get vertical bars,
//! columns horizontal ones. Each bar's catchment reaches halfway to its
//! neighbours; the outermost sides are left at 0 so the selector's default
//! range applies to them.

use crate::drag::HighlightSource;
use anvil_core::{
    DraggedWidget, DropZone, FlexLayerAlignment, Highlight, HighlightBar, HighlightInfo,
    LayoutComponentType, LayoutId, WidgetId, WidgetPositions,
};
use kurbo::Rect;

/// Thickness of a drawn highlight bar, in pixels.
pub const HIGHLIGHT_THICKNESS: f64 = 4.0;

/// A row or column of widgets on one canvas.
#[derive(Debug, Clone)]
pub struct LinearLayout {
    pub canvas_id: WidgetId,
    pub layout_type: LayoutComponentType,
    /// Top-down path of layouts ending with this one.
    pub layout_order: Vec<LayoutId>,
    pub alignment: FlexLayerAlignment,
    pub children: Vec<WidgetId>,
}

impl LinearLayout {
    pub fn new(
        canvas_id: WidgetId,
        layout_type: LayoutComponentType,
        layout_order: Vec<LayoutId>,
        children: Vec<WidgetId>,
    ) -> Self {
        Self {
            canvas_id,
            layout_type,
            layout_order,
            alignment: FlexLayerAlignment::Start,
            children,
        }
    }

    fn info(&self, row_index: usize) -> HighlightInfo {
        let mut info = HighlightInfo::new(self.canvas_id, row_index);
        info.alignment = self.alignment;
        info.layout_order = self.layout_order.iter().copied().collect();
        info
    }
}

impl HighlightSource for LinearLayout {
    fn derive_highlights(
        &self,
        canvas_id: WidgetId,
        positions: &WidgetPositions,
        dragged: &[DraggedWidget],
    ) -> Vec<Highlight> {
        if canvas_id != self.canvas_id {
            return Vec::new();
        }

        // Dragged widgets leave their slot; unmeasured children are skipped.
        let rects: Vec<Rect> = self
            .children
            .iter()
            .filter(|id| !dragged.iter().any(|d| d.widget_id == **id))
            .filter_map(|id| positions.get(id).map(|p| p.rect()))
            .collect();

        let Some(span) = rects.iter().copied().reduce(|a, b| a.union(b)) else {
            return Vec::new();
        };

        let is_row = self.layout_type.is_row();
        let mut stops: Vec<f64> = rects
            .iter()
            .map(|r| if is_row { r.x0 } else { r.y0 })
            .collect();
        stops.extend(rects.last().map(|r| if is_row { r.x1 } else { r.y1 }));

        let half_gap = |i: usize, j: usize| (stops[j] - stops[i]).abs() / 2.0;
        let last = stops.len() - 1;

        stops
            .iter()
            .enumerate()
            .map(|(i, &stop)| {
                let before = if i > 0 { half_gap(i - 1, i) } else { 0.0 };
                let after = if i < last { half_gap(i, i + 1) } else { 0.0 };
                if is_row {
                    Highlight::Vertical(
                        HighlightBar::new(stop, span.y0, HIGHLIGHT_THICKNESS, span.height())
                            .with_drop_zone(DropZone::horizontal_sides(before, after))
                            .with_info(self.info(i)),
                    )
                } else {
                    Highlight::Horizontal(
                        HighlightBar::new(span.x0, stop, span.width(), HIGHLIGHT_THICKNESS)
                            .with_drop_zone(DropZone::vertical_sides(before, after))
                            .with_info(self.info(i)),
                    )
                }
            })
            .collect()
    }
}
