//! Drag session: drives drop-target selection while widgets are dragged
//! over an Anvil canvas.
//!
//! Every drag-over asks the `HighlightSource` for a fresh list of
//! highlights, derived from the latest measured widget positions, and
//! picks the closest one. The session keeps an owned copy
//! of the current pick for painting, never a reference into the list,
//! since the list is rebuilt on the next event anyway.
//!
//! Rate limiting (animation frame, throttling) is the caller's business.

use crate::input::PointerEvent;
use anvil_core::{
    DraggedWidget, Highlight, LayoutId, SelectorConfig, WidgetId, WidgetPositions,
    select_closest_with,
};

/// Produces candidate highlights from the current widget arrangement.
///
/// `positions` may lag behind what is on screen; implementations take them
/// as given.
pub trait HighlightSource {
    fn derive_highlights(
        &self,
        canvas_id: WidgetId,
        positions: &WidgetPositions,
        dragged: &[DraggedWidget],
    ) -> Vec<Highlight>;
}

impl<F> HighlightSource for F
where
    F: Fn(WidgetId, &WidgetPositions, &[DraggedWidget]) -> Vec<Highlight>,
{
    fn derive_highlights(
        &self,
        canvas_id: WidgetId,
        positions: &WidgetPositions,
        dragged: &[DraggedWidget],
    ) -> Vec<Highlight> {
        self(canvas_id, positions, dragged)
    }
}

/// What the drop-commit side needs to insert the dragged widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIntent {
    pub dragged: Vec<DraggedWidget>,
    pub highlight: Highlight,
}

impl DropIntent {
    pub fn canvas_id(&self) -> WidgetId {
        self.highlight.info().canvas_id
    }

    pub fn parent_layout(&self) -> Option<LayoutId> {
        self.highlight.info().parent_layout()
    }

    pub fn row_index(&self) -> usize {
        self.highlight.info().row_index
    }
}

/// Result of feeding one event to a `DragSession`.
#[derive(Debug, Clone, PartialEq)]
pub enum DragUpdate {
    /// Current drop target after a drag-over (`None` = nothing under the pointer).
    Target(Option<Highlight>),
    /// The drag ended on a target.
    Committed(DropIntent),
    /// The pointer left the canvas, or the drag ended with no target.
    Cancelled,
}

#[derive(Debug)]
pub struct DragSession {
    canvas_id: WidgetId,
    dragged: Vec<DraggedWidget>,
    positions: WidgetPositions,
    config: SelectorConfig,
    current: Option<Highlight>,
    finished: bool,
}

impl DragSession {
    pub fn new(canvas_id: WidgetId, dragged: Vec<DraggedWidget>) -> Self {
        Self::with_config(canvas_id, dragged, SelectorConfig::default())
    }

    pub fn with_config(
        canvas_id: WidgetId,
        dragged: Vec<DraggedWidget>,
        config: SelectorConfig,
    ) -> Self {
        Self {
            canvas_id,
            dragged,
            positions: WidgetPositions::new(),
            config,
            current: None,
            finished: false,
        }
    }

    pub fn canvas_id(&self) -> WidgetId {
        self.canvas_id
    }

    pub fn dragged(&self) -> &[DraggedWidget] {
        &self.dragged
    }

    /// Replace the measured widget positions used for the next events.
    pub fn set_positions(&mut self, positions: WidgetPositions) {
        self.positions = positions;
    }

    pub fn positions(&self) -> &WidgetPositions {
        &self.positions
    }

    /// Highlight picked by the latest drag-over, for painting.
    pub fn current(&self) -> Option<&Highlight> {
        self.current.as_ref()
    }

    /// `false` once a drop has been handled.
    pub fn is_active(&self) -> bool {
        !self.finished
    }

    /// Feed one event. Events after the drop are ignored and report `Cancelled`.
    pub fn handle(&mut self, event: &PointerEvent, source: &dyn HighlightSource) -> DragUpdate {
        if self.finished {
            return DragUpdate::Cancelled;
        }

        match *event {
            PointerEvent::DragOver { .. } => {
                let picked = self.pick(event, source);
                if picked != self.current {
                    log::debug!(
                        "drop target on {} -> {:?}",
                        self.canvas_id,
                        picked.as_ref().map(|h| h.info().row_index)
                    );
                }
                self.current = picked.clone();
                DragUpdate::Target(picked)
            }
            PointerEvent::Drop { .. } => {
                self.finished = true;
                self.current = None;
                match self.pick(event, source) {
                    Some(highlight) => {
                        log::debug!(
                            "dropping {} widget(s) on {} at row {}",
                            self.dragged.len(),
                            self.canvas_id,
                            highlight.info().row_index
                        );
                        DragUpdate::Committed(DropIntent {
                            dragged: std::mem::take(&mut self.dragged),
                            highlight,
                        })
                    }
                    None => {
                        log::debug!("drop on {} with no target", self.canvas_id);
                        DragUpdate::Cancelled
                    }
                }
            }
            PointerEvent::DragLeave => {
                self.current = None;
                DragUpdate::Cancelled
            }
        }
    }

    fn pick(&self, event: &PointerEvent, source: &dyn HighlightSource) -> Option<Highlight> {
        let pointer = event.position()?;
        let highlights = source.derive_highlights(self.canvas_id, &self.positions, &self.dragged);
        select_closest_with(pointer, &highlights, &self.config).cloned()
    }
}
