use tracing::{debug, warn};

use crate::models::{RenderedBar, Series};
use crate::utils::errors::RenderError;

/// Default bar glyph (full block)
pub const DEFAULT_GLYPH: &str = "█";

/// Widest bar the renderer will produce, in glyphs
pub const MAX_BAR_WIDTH: usize = 1000;

/// Scale every value in `series` against the series maximum.
///
/// Each bar is `floor(value / max * max_width)` glyphs long, so the largest
/// value always fills `max_width`. When the maximum is zero every bar is empty.
/// Fails with `InvalidInput` on an empty series, `max_width` outside
/// `1..=MAX_BAR_WIDTH`, an empty glyph, or a negative or non-finite value.
pub fn render(series: &Series, max_width: usize, glyph: &str) -> Result<Vec<RenderedBar>, RenderError> {
    if series.is_empty() {
        return Err(RenderError::InvalidInput(format!(
            "series '{}' is empty",
            series.name
        )));
    }
    if max_width < 1 {
        return Err(RenderError::InvalidInput(
            "max_width must be at least 1".to_string(),
        ));
    }
    if max_width > MAX_BAR_WIDTH {
        return Err(RenderError::InvalidInput(format!(
            "max_width {} exceeds the limit of {}",
            max_width, MAX_BAR_WIDTH
        )));
    }
    if glyph.is_empty() {
        return Err(RenderError::InvalidInput("bar glyph is empty".to_string()));
    }
    if max_width.checked_mul(glyph.len()).is_none() {
        return Err(RenderError::InvalidInput(format!(
            "bar of {} x '{}' does not fit in memory",
            max_width, glyph
        )));
    }
    if let Some(bad) = series
        .points
        .iter()
        .find(|p| !p.value.is_finite() || p.value < 0.0)
    {
        return Err(RenderError::InvalidInput(format!(
            "value {} for '{}' is not a non-negative number",
            bad.value, bad.label
        )));
    }

    let max = series
        .points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);

    if max == 0.0 {
        warn!("Series '{}' has no non-zero values, rendering empty bars", series.name);
    }

    let bars = series
        .points
        .iter()
        .map(|p| {
            let length = bar_length(p.value, max, max_width);
            RenderedBar {
                label: p.label.clone(),
                value: p.value,
                length,
                bar: glyph.repeat(length),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "Rendered '{}' against max {} at width {}: lengths {:?}",
        series.name,
        max,
        max_width,
        bars.iter().map(|b| b.length).collect::<Vec<_>>()
    );

    Ok(bars)
}

/// `floor(value / max * max_width)`, clamped to `0..=max_width`
fn bar_length(value: f64, max: f64, max_width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    let scaled = (value / max * max_width as f64).floor();
    (scaled.max(0.0) as usize).min(max_width)
}
