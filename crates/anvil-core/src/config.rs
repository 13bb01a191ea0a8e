//! Selector policy constants.
//!
//! The scaling factors were tuned by hand against real layouts. Changing
//! them changes which drop target wins near row/column corners, so they
//! live here as named values rather than inline in the geometry math.

/// Catchment, in pixels, for any side a highlight does not declare.
pub const DEFAULT_DROP_RANGE: f64 = 10.0;

/// Scale applied to a horizontal highlight's declared `bottom` tolerance
/// once some vertical highlight already catches the pointer.
pub const VERTICAL_BIAS_BOTTOM_SCALE: f64 = 0.2;

/// Scale applied to a horizontal highlight's declared `top` tolerance
/// once some vertical highlight already catches the pointer.
pub const VERTICAL_BIAS_TOP_SCALE: f64 = 0.3;

/// Configuration for `select_closest_with`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Fallback catchment for undeclared sides. Default: **10px**.
    pub default_drop_range: f64,

    /// Shrink factor for `dropZone.bottom` of horizontals under vertical bias.
    /// Default: **0.2**.
    pub bias_bottom_scale: f64,

    /// Shrink factor for `dropZone.top` of horizontals under vertical bias.
    /// Default: **0.3**.
    pub bias_top_scale: f64,
}

impl SelectorConfig {
    pub const DEFAULT: Self = Self {
        default_drop_range: DEFAULT_DROP_RANGE,
        bias_bottom_scale: VERTICAL_BIAS_BOTTOM_SCALE,
        bias_top_scale: VERTICAL_BIAS_TOP_SCALE,
    };

    /// Reach of a vertical bar's left or right side.
    ///
    /// A side declared as `0` counts as undeclared: vertical bars always
    /// keep at least the default catchment.
    pub fn side_range(&self, declared: Option<f64>) -> f64 {
        declared
            .filter(|v| *v > 0.0)
            .unwrap_or(self.default_drop_range)
    }

    /// Reach of a horizontal bar's top or bottom side.
    ///
    /// Only declared values are scaled; an undeclared side gets the full
    /// default range whether or not the bias is active.
    pub fn biased_range(&self, declared: Option<f64>, scale: f64, biased: bool) -> f64 {
        match declared {
            Some(v) if biased => v.max(0.0) * scale,
            Some(v) => v.max(0.0),
            None => self.default_drop_range,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
