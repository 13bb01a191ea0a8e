//! Closest-highlight selection: pointer position → drop target.
//!
//! Runs in two passes over a fresh highlight list:
//!
//! 1. **Zone filtering.** Keep highlights whose catchment contains the
//!    pointer. Verticals are checked first; if any of them qualifies, the
//!    declared top/bottom catchment of every horizontal is shrunk so a
//!    precise in-row insertion point is not stolen by a looser row edge.
//! 2. **Ranking.** Pick the survivor nearest to the pointer, measured
//!    along the bar's normal and past the ends of its span.
//!
//! Nothing is cached between calls; the caller recomputes highlights on
//! every drag-over and the result borrows from that list only.

use crate::config::SelectorConfig;
use crate::geometry::{Highlight, HighlightBar, Point};
use kurbo::Vec2;
use std::cmp::Ordering;

/// Per-pass context for zone filtering.
#[derive(Debug, Clone, Copy)]
pub struct Catchment<'a> {
    pub config: &'a SelectorConfig,
    /// Set once a vertical highlight catches the pointer.
    pub vertical_bias: bool,
}

/// Something the pointer can be dropped onto.
pub trait DropTarget {
    /// Whether the pointer lies inside this target's catchment.
    fn qualifies(&self, pointer: Point, catchment: &Catchment<'_>) -> bool;

    /// Distance from the pointer to the target, used for ranking.
    fn distance_to(&self, pointer: Point) -> f64;
}

impl DropTarget for Highlight {
    fn qualifies(&self, pointer: Point, catchment: &Catchment<'_>) -> bool {
        match self {
            Highlight::Vertical(bar) => vertical_qualifies(bar, pointer, catchment),
            Highlight::Horizontal(bar) => horizontal_qualifies(bar, pointer, catchment),
        }
    }

    fn distance_to(&self, pointer: Point) -> f64 {
        match self {
            Highlight::Vertical(bar) => vertical_distance(bar, pointer),
            Highlight::Horizontal(bar) => horizontal_distance(bar, pointer),
        }
    }
}

// ─── Orientation math ────────────────────────────────────────────────────

fn vertical_qualifies(bar: &HighlightBar, p: Point, c: &Catchment<'_>) -> bool {
    let b = bar.bounds();
    if !(b.y0..=b.y1).contains(&p.y) {
        return false;
    }
    if p.x >= b.x0 {
        p.x <= b.x0 + c.config.side_range(bar.drop_zone.right)
    } else {
        p.x >= b.x0 - c.config.side_range(bar.drop_zone.left)
    }
}

fn horizontal_qualifies(bar: &HighlightBar, p: Point, c: &Catchment<'_>) -> bool {
    let b = bar.bounds();
    if !(b.x0..=b.x1).contains(&p.x) {
        return false;
    }
    let cfg = c.config;
    if p.y >= b.y0 {
        let below =
            cfg.biased_range(bar.drop_zone.bottom, cfg.bias_bottom_scale, c.vertical_bias);
        p.y <= b.y0 + below
    } else {
        let above =
            cfg.biased_range(bar.drop_zone.top, cfg.bias_top_scale, c.vertical_bias);
        p.y >= b.y0 - above
    }
}

/// Signed overshoot of `v` past the `[lo, hi]` span, or 0 inside it.
fn overshoot(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        v - lo
    } else if v > hi {
        v - hi
    } else {
        0.0
    }
}

fn vertical_distance(bar: &HighlightBar, p: Point) -> f64 {
    let b = bar.bounds();
    Vec2::new(p.x - b.x0, overshoot(p.y, b.y0, b.y1)).hypot()
}

fn horizontal_distance(bar: &HighlightBar, p: Point) -> f64 {
    let b = bar.bounds();
    Vec2::new(overshoot(p.x, b.x0, b.x1), p.y - b.y0).hypot()
}

// ─── Selection ───────────────────────────────────────────────────────────

/// Highlights whose catchment contains `pointer`.
///
/// Qualifying verticals come first, then qualifying horizontals, each in
/// input order.
pub fn viable_drop_positions<'a>(
    highlights: &'a [Highlight],
    pointer: Point,
    config: &SelectorConfig,
) -> Vec<&'a Highlight> {
    let mut catchment = Catchment {
        config,
        vertical_bias: false,
    };

    let mut selection: Vec<&Highlight> = highlights
        .iter()
        .filter(|h| h.is_vertical() && h.qualifies(pointer, &catchment))
        .collect();

    catchment.vertical_bias = !selection.is_empty();

    selection.extend(
        highlights
            .iter()
            .filter(|h| !h.is_vertical() && h.qualifies(pointer, &catchment)),
    );

    log::trace!(
        "{} of {} highlights viable at ({}, {}), vertical bias: {}",
        selection.len(),
        highlights.len(),
        pointer.x,
        pointer.y,
        catchment.vertical_bias
    );
    selection
}

/// Pick the best drop target under `pointer` using the default policy.
///
/// Returns `None` when the list is empty or no catchment contains the
/// pointer. That is the normal "nothing under the cursor" state.
pub fn select_closest(pointer: Point, highlights: &[Highlight]) -> Option<&Highlight> {
    select_closest_with(pointer, highlights, &SelectorConfig::DEFAULT)
}

/// Like [`select_closest`], with an explicit policy.
///
/// Ties go to whichever candidate comes first after filtering.
pub fn select_closest_with<'a>(
    pointer: Point,
    highlights: &'a [Highlight],
    config: &SelectorConfig,
) -> Option<&'a Highlight> {
    if highlights.is_empty() {
        return None;
    }

    viable_drop_positions(highlights, pointer, config)
        .into_iter()
        .map(|h| (h, h.distance_to(pointer)))
        .min_by(|a, b| by_distance(a.1, b.1))
        .map(|(h, distance)| {
            log::trace!(
                "closest highlight: row {} of {:?}, distance {distance}",
                h.info().row_index,
                h.info().parent_layout()
            );
            h
        })
}

/// Ascending distance; NaN sorts after every real distance.
fn by_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
