//! Trend analysis models

/// Relative change between two consecutive points
#[derive(Debug, Clone, PartialEq)]
pub struct StepChange {
    pub from_label: String,
    pub to_label: String,
    /// Negative for a reduction; `None` when the starting value is zero
    pub change_pct: Option<f64>,
}

/// A point singled out by the analysis (lowest or highest value)
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub label: String,
    pub value: f64,
    pub note: Option<String>,
}

/// Figures derived from a series
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub first: Extreme,
    pub last: Extreme,
    /// `(first - last) / first`, as a percentage
    pub total_reduction_pct: Option<f64>,
    pub steps: Vec<StepChange>,
    pub best: Extreme,
    pub worst: Extreme,
    /// `worst / best`
    pub spread: Option<f64>,
    pub strictly_decreasing: bool,
}
