use tracing::debug;

use crate::models::{DataPoint, Extreme, Series, StepChange, TrendSummary};
use crate::utils::errors::RenderError;

fn extreme(point: &DataPoint) -> Extreme {
    Extreme {
        label: point.label.clone(),
        value: point.value,
        note: point.note.clone(),
    }
}

/// Relative change from `from` to `to` in percent; `None` when `from` is zero
fn change_pct(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((to - from) / from * 100.0)
    }
}

/// Derive reduction, step and extreme figures from a series
pub fn analyze(series: &Series) -> Result<TrendSummary, RenderError> {
    let (first, last) = match (series.points.first(), series.points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(RenderError::InvalidInput(format!(
                "cannot analyze empty series '{}'",
                series.name
            )))
        }
    };

    let steps = series
        .points
        .windows(2)
        .map(|pair| StepChange {
            from_label: pair[0].label.clone(),
            to_label: pair[1].label.clone(),
            change_pct: change_pct(pair[0].value, pair[1].value),
        })
        .collect::<Vec<_>>();

    // Ties resolve to the earliest point
    let mut best = first;
    let mut worst = first;
    for point in &series.points {
        if point.value < best.value {
            best = point;
        }
        if point.value > worst.value {
            worst = point;
        }
    }

    let spread = if best.value == 0.0 {
        None
    } else {
        Some(worst.value / best.value)
    };

    let strictly_decreasing = series.points.windows(2).all(|pair| pair[1].value < pair[0].value);

    let summary = TrendSummary {
        first: extreme(first),
        last: extreme(last),
        total_reduction_pct: change_pct(first.value, last.value).map(|pct| -pct),
        steps,
        best: extreme(best),
        worst: extreme(worst),
        spread,
        strictly_decreasing,
    };

    debug!("Trend for '{}': {:?}", series.name, summary);

    Ok(summary)
}
