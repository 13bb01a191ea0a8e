//! Loading highlight lists in the layout walker's JSON form.

use crate::geometry::Highlight;

/// Decode a JSON array of highlight records.
///
/// Malformed geometry (negative extents or tolerances) is normalized rather
/// than rejected; only structurally invalid JSON is an error.
///
/// # Errors
/// Returns a description of the first decoding failure.
pub fn parse_highlights(json: &str) -> Result<Vec<Highlight>, String> {
    let highlights: Vec<Highlight> = serde_json::from_str(json)
        .map_err(|e| format!("invalid highlight list at line {}: {e}", e.line()))?;
    log::debug!("loaded {} highlights", highlights.len());
    Ok(highlights)
}

/// Encode highlights back to the layout walker's JSON form.
///
/// # Errors
/// JSON has no NaN or infinity, so a highlight with non-finite geometry is
/// rejected instead of being written as `null`.
pub fn emit_highlights(highlights: &[Highlight]) -> Result<String, String> {
    if let Some(i) = highlights.iter().position(|h| !is_finite(h)) {
        return Err(format!("highlight {i} has non-finite geometry"));
    }
    serde_json::to_string_pretty(highlights).map_err(|e| e.to_string())
}

fn is_finite(h: &Highlight) -> bool {
    let bar = h.bar();
    let dz = &bar.drop_zone;
    [bar.pos_x, bar.pos_y, bar.width, bar.height]
        .into_iter()
        .chain([dz.top, dz.bottom, dz.left, dz.right].into_iter().flatten())
        .all(f64::is_finite)
}
