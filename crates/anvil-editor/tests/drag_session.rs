//! Integration tests: drag session over a live highlight source (anvil-editor).
//!
//! The source re-reads its highlight list on every call, the way the
//! layout walker recomputes highlights on every drag-over.

use anvil_core::{
    DraggedWidget, Highlight, LayoutComponentType, LayoutId, PositionData, ResponsiveBehavior,
    WidgetId, WidgetPositions, parse_highlights,
};
use anvil_editor::{DragSession, DragUpdate, HighlightSource, LinearLayout, PointerEvent};
use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};

/// Highlight source whose layout can change between events.
struct LiveLayout {
    highlights: RefCell<Vec<Highlight>>,
    calls: Cell<usize>,
}

impl LiveLayout {
    fn new() -> Self {
        Self {
            highlights: RefCell::new(
                parse_highlights(include_str!("fixtures/two_rows.json")).unwrap(),
            ),
            calls: Cell::new(0),
        }
    }
}

impl HighlightSource for LiveLayout {
    fn derive_highlights(
        &self,
        canvas_id: WidgetId,
        _positions: &WidgetPositions,
        _dragged: &[DraggedWidget],
    ) -> Vec<Highlight> {
        self.calls.set(self.calls.get() + 1);
        self.highlights
            .borrow()
            .iter()
            .filter(|h| h.info().canvas_id == canvas_id)
            .cloned()
            .collect()
    }
}

fn dragged() -> Vec<DraggedWidget> {
    vec![DraggedWidget {
        widget_id: WidgetId::intern("input_1"),
        widget_type: "INPUT_WIDGET".into(),
        responsive_behavior: ResponsiveBehavior::Fill,
    }]
}

fn main_canvas() -> WidgetId {
    WidgetId::intern("0")
}

// ─── Drag-over ──────────────────────────────────────────────────────────

#[test]
fn every_drag_over_recomputes_highlights() {
    let layout = LiveLayout::new();
    let mut session = DragSession::new(main_canvas(), dragged());

    for x in [205.0, 210.0, 215.0] {
        session.handle(&PointerEvent::drag_over(x, 30.0), &layout);
    }
    assert_eq!(layout.calls.get(), 3);
}

#[test]
fn target_follows_pointer() {
    let layout = LiveLayout::new();
    let mut session = DragSession::new(main_canvas(), dragged());

    session.handle(&PointerEvent::drag_over(205.0, 30.0), &layout);
    let first = session.current().unwrap().info().clone();
    assert_eq!(first.parent_layout(), Some(LayoutId::intern("row_1")));
    assert_eq!(first.row_index, 1);

    session.handle(&PointerEvent::drag_over(50.0, 58.0), &layout);
    let second = session.current().unwrap().info().clone();
    assert_eq!(second.parent_layout(), Some(LayoutId::intern("main_column")));
    assert_eq!(second.row_index, 1);
}

#[test]
fn other_canvas_has_no_targets() {
    let layout = LiveLayout::new();
    let mut session = DragSession::new(WidgetId::intern("modal_canvas"), dragged());
    assert_eq!(
        session.handle(&PointerEvent::drag_over(205.0, 30.0), &layout),
        DragUpdate::Target(None)
    );
}

#[test]
fn stale_target_is_not_retained_after_layout_change() {
    let layout = LiveLayout::new();
    let mut session = DragSession::new(main_canvas(), dragged());

    session.handle(&PointerEvent::drag_over(205.0, 30.0), &layout);
    assert!(session.current().is_some());

    layout.highlights.borrow_mut().clear();
    session.handle(&PointerEvent::drag_over(205.0, 30.0), &layout);
    assert!(session.current().is_none());
}

// ─── Drop ───────────────────────────────────────────────────────────────

#[test]
fn drop_commits_at_drop_position() {
    let layout = LiveLayout::new();
    let mut session = DragSession::new(main_canvas(), dragged());

    // Hovered over row 1, but released between the rows: the drop point wins.
    session.handle(&PointerEvent::drag_over(205.0, 30.0), &layout);
    let update = session.handle(&PointerEvent::drop_at(10.0, 140.0), &layout);

    let DragUpdate::Committed(intent) = update else {
        panic!("expected a committed drop, got {update:?}");
    };
    assert_eq!(intent.canvas_id(), main_canvas());
    assert_eq!(intent.parent_layout(), Some(LayoutId::intern("main_column")));
    assert_eq!(intent.row_index(), 2);
    assert_eq!(intent.dragged, dragged());
    assert!(!session.is_active());
}

#[test]
fn drop_outside_every_catchment_cancels() {
    let layout = LiveLayout::new();
    let mut session = DragSession::new(main_canvas(), dragged());
    session.handle(&PointerEvent::drag_over(205.0, 30.0), &layout);
    assert_eq!(
        session.handle(&PointerEvent::drop_at(900.0, 900.0), &layout),
        DragUpdate::Cancelled
    );
    assert!(session.current().is_none());
}

// ─── Highlights from measured positions ─────────────────────────────────

fn measured(entries: &[(&str, f64, f64, f64, f64)]) -> WidgetPositions {
    entries
        .iter()
        .map(|&(id, left, top, width, height)| {
            (
                WidgetId::intern(id),
                PositionData {
                    left,
                    top,
                    width,
                    height,
                },
            )
        })
        .collect()
}

fn toolbar_row() -> LinearLayout {
    LinearLayout::new(
        main_canvas(),
        LayoutComponentType::AlignedRow,
        vec![LayoutId::intern("main_column"), LayoutId::intern("toolbar")],
        vec![
            WidgetId::intern("search"),
            WidgetId::intern("filter"),
            WidgetId::intern("export"),
        ],
    )
}

#[test]
fn row_walker_drives_selection_from_positions() {
    let walker = toolbar_row();
    let mut session = DragSession::new(main_canvas(), dragged());

    // Nothing measured yet: no targets.
    assert_eq!(
        session.handle(&PointerEvent::drag_over(105.0, 20.0), &walker),
        DragUpdate::Target(None)
    );

    session.set_positions(measured(&[
        ("search", 0.0, 0.0, 100.0, 40.0),
        ("filter", 100.0, 0.0, 100.0, 40.0),
        ("export", 200.0, 0.0, 100.0, 40.0),
    ]));
    session.handle(&PointerEvent::drag_over(105.0, 20.0), &walker);
    let info = session.current().unwrap().info().clone();
    assert_eq!(info.parent_layout(), Some(LayoutId::intern("toolbar")));
    assert_eq!(info.row_index, 1);
}

#[test]
fn moved_widgets_shift_the_target() {
    let walker = toolbar_row();
    let mut session = DragSession::new(main_canvas(), dragged());
    session.set_positions(measured(&[
        ("search", 0.0, 0.0, 100.0, 40.0),
        ("filter", 100.0, 0.0, 100.0, 40.0),
        ("export", 200.0, 0.0, 100.0, 40.0),
    ]));
    session.handle(&PointerEvent::drag_over(195.0, 20.0), &walker);
    assert_eq!(session.current().unwrap().info().row_index, 2);

    // "filter" grew and pushed the slot after it to x=300; the pointer now
    // falls in the right-hand catchment of the bar before "filter".
    session.set_positions(measured(&[
        ("search", 0.0, 0.0, 100.0, 40.0),
        ("filter", 100.0, 0.0, 200.0, 40.0),
        ("export", 300.0, 0.0, 100.0, 40.0),
    ]));
    let update = session.handle(&PointerEvent::drop_at(195.0, 20.0), &walker);
    let DragUpdate::Committed(intent) = update else {
        panic!("expected a committed drop, got {update:?}");
    };
    assert_eq!(intent.row_index(), 1);
    assert_eq!(intent.parent_layout(), Some(LayoutId::intern("toolbar")));
}
