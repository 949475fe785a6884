use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{Dataset, RenderedBar, TrendSummary};
use crate::services::{bar_service, efficiency_service, trend_service};
use crate::utils::errors::RenderError;
use crate::utils::table::{Align, Table};

const RULE_WIDTH: usize = 70;

/// Bar widths and glyph used when building a report
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub glyph: String,
    pub faults_width: usize,
    pub simple_width: usize,
    pub rates_width: usize,
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Format a percentage with one decimal
fn pct(value: f64) -> String {
    format!("{:.1}%", value)
}

fn header(title: &str, generated_at: DateTime<Utc>) -> Vec<String> {
    vec![
        format!("=== {} ===", title),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC")),
        String::new(),
    ]
}

fn page_fault_table(bars: &[RenderedBar], with_values: bool) -> Vec<String> {
    let mut table = Table::new(vec!["Page Size (bytes)", "Page Faults", "Chart"])
        .align(0, Align::Right)
        .align(1, Align::Right);
    for bar in bars {
        let chart = if with_values {
            format!("{} {}", bar.bar, bar.value)
        } else {
            bar.bar.clone()
        };
        table.add_row(vec![bar.label.clone(), format!("{}", bar.value), chart]);
    }
    table.render_lines()
}

fn fault_rate_table(bars: &[RenderedBar], unit: &str) -> Vec<String> {
    let mut table = Table::new(vec!["Configuration", "Fault Rate (%)", "Chart", "Efficiency"])
        .align(0, Align::Right)
        .align(1, Align::Right);
    for bar in bars {
        table.add_row(vec![
            bar.label.clone(),
            format!("{:.2}{}", bar.value, unit),
            format!("{} {}{}", bar.bar, bar.value, unit),
            efficiency_service::classify(bar.value).to_string(),
        ]);
    }
    table.render_lines()
}

fn trend_lines(trend: &TrendSummary) -> Vec<String> {
    let mut lines = Vec::new();
    if trend.strictly_decreasing {
        lines.push("📈 TREND: INVERSE RELATION".to_string());
        lines.push("   • Larger pages = fewer page faults".to_string());
    } else {
        lines.push("📈 TREND: NOT MONOTONIC".to_string());
    }
    if let Some(total) = trend.total_reduction_pct {
        lines.push(format!(
            "   • Total reduction: {} ({} → {})",
            pct(total),
            trend.first.value,
            trend.last.value
        ));
    }
    lines
}

fn optimal_lines(trend: &TrendSummary, unit: &str) -> Vec<String> {
    let mut lines = vec![format!(
        "🏆 OPTIMAL CONFIGURATION: {} ({:.2}{} faults)",
        trend.best.label, trend.best.value, unit
    )];
    if let Some(note) = &trend.best.note {
        lines.push(format!("   • {}", note));
    }
    lines
}

fn detailed_analysis(faults: &TrendSummary, rates: &TrendSummary, unit: &str) -> Vec<String> {
    let mut lines = vec!["🔍 DETAILED ANALYSIS:".to_string(), rule('='), "1. PAGE SIZE STEPS:".to_string()];

    for step in &faults.steps {
        let change = match step.change_pct {
            Some(change) => format!("{:+.1}% faults", change),
            None => "n/a (no faults at start)".to_string(),
        };
        lines.push(format!("   • {}→{} bytes: {}", step.from_label, step.to_label, change));
    }
    lines.push(format!(
        "   • Best: {} bytes → {} faults; worst: {} bytes → {} faults",
        faults.best.label, faults.best.value, faults.worst.label, faults.worst.value
    ));

    lines.push(String::new());
    lines.push("2. CONFIGURATION SPREAD:".to_string());
    lines.push(format!(
        "   • {}: {:.2}{} faults (most efficient)",
        rates.best.label, rates.best.value, unit
    ));
    lines.push(format!(
        "   • {}: {:.2}{} faults (least efficient)",
        rates.worst.label, rates.worst.value, unit
    ));
    if let Some(spread) = rates.spread {
        lines.push(format!("   • {:.0}x difference in efficiency", spread));
    }
    lines
}

/// Page faults only, narrow bars
pub fn build_simple_report(
    dataset: &Dataset,
    options: &ReportOptions,
    generated_at: DateTime<Utc>,
) -> Result<Vec<String>, RenderError> {
    let bars = bar_service::render(&dataset.page_faults, options.simple_width, &options.glyph)?;
    let trend = trend_service::analyze(&dataset.page_faults)?;

    let mut lines = header(&format!("{}: {}", dataset.page_faults.name, dataset.title), generated_at);
    lines.extend(page_fault_table(&bars, false));
    lines.push(String::new());
    lines.extend(trend_lines(&trend));

    info!("Built simple report ({} lines)", lines.len());
    Ok(lines)
}

/// Both series with efficiency tags and the computed analysis
pub fn build_full_report(
    dataset: &Dataset,
    options: &ReportOptions,
    generated_at: DateTime<Utc>,
) -> Result<Vec<String>, RenderError> {
    // Render everything up front so an invalid series yields no partial output
    let fault_bars = bar_service::render(&dataset.page_faults, options.faults_width, &options.glyph)?;
    let rate_bars = bar_service::render(&dataset.fault_rates, options.rates_width, &options.glyph)?;
    let fault_trend = trend_service::analyze(&dataset.page_faults)?;
    let rate_trend = trend_service::analyze(&dataset.fault_rates)?;
    let unit = dataset.fault_rates.unit.as_str();

    let mut lines = header(&format!("PAGE FAULT REPORT: {}", dataset.title), generated_at);

    lines.push(format!("📊 CHART 1: {} ({})", dataset.page_faults.name.to_uppercase(), dataset.title));
    lines.push(rule('='));
    lines.extend(page_fault_table(&fault_bars, true));
    lines.push(String::new());
    lines.extend(trend_lines(&fault_trend));
    lines.push(String::new());
    lines.push(rule('='));

    lines.push(String::new());
    lines.push(format!("📊 CHART 2: {}", dataset.fault_rates.name.to_uppercase()));
    lines.push(rule('='));
    lines.extend(fault_rate_table(&rate_bars, unit));
    lines.push(String::new());
    lines.extend(optimal_lines(&rate_trend, unit));
    lines.push(String::new());
    lines.push(rule('='));

    lines.push(String::new());
    lines.extend(detailed_analysis(&fault_trend, &rate_trend, unit));
    lines.push(String::new());
    lines.push(rule('='));

    info!("Built full report ({} lines)", lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataPoint, Series};
    use crate::services::dataset_service::default_dataset;
    use chrono::TimeZone;

    fn options() -> ReportOptions {
        ReportOptions {
            glyph: "█".to_string(),
            faults_width: 40,
            simple_width: 20,
            rates_width: 30,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    fn line_with<'a>(lines: &'a [String], needle: &str) -> &'a str {
        lines
            .iter()
            .find(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("no line contains {:?}", needle))
    }

    #[test]
    fn test_simple_report_rows() {
        let lines = build_simple_report(&default_dataset(), &options(), fixed_time()).unwrap();

        assert_eq!(lines[1], "Generated: 2024-05-01 12:30:00 UTC");
        let row = line_with(&lines, " 535 |");
        assert!(row.ends_with(&"█".repeat(20)));
        let row = line_with(&lines, " 98 |");
        // floor(98 / 535 * 20) = 3
        assert!(row.ends_with("| ███"));
        assert!(line_with(&lines, "Total reduction").contains("81.7%"));
    }

    #[test]
    fn test_full_report_sections() {
        let lines = build_full_report(&default_dataset(), &options(), fixed_time()).unwrap();

        assert!(line_with(&lines, " 301 |").contains(&format!("{} 301", "█".repeat(22))));
        let config4 = line_with(&lines, "Config 4");
        assert!(config4.contains(&"█".repeat(30)));
        assert!(config4.contains("🔴 REGULAR"));
        assert!(line_with(&lines, "Config 3 |").contains("🟢 EXCELLENT"));
        assert!(line_with(&lines, "Config 2 |").contains("🟡 GOOD"));
        let optimal = line_with(&lines, "OPTIMAL CONFIGURATION");
        assert!(optimal.contains("Config 3 (0.20% faults)"));
        assert!(line_with(&lines, "(most efficient)").contains("Config 3: 0.20%"));
        assert!(line_with(&lines, "(least efficient)").contains("Config 4: 1.58%"));
        assert!(lines.iter().any(|l| l == "   • 2048 bytes, 3 processes"));
        assert!(line_with(&lines, "256→512 bytes").contains("-43.7%"));
        assert!(line_with(&lines, "2048→4096 bytes").contains("-22.2%"));
        assert!(lines.iter().any(|l| l == "   • 8x difference in efficiency"));
    }

    #[test]
    fn test_table_columns_line_up() {
        let lines = build_full_report(&default_dataset(), &options(), fixed_time()).unwrap();
        let pipes: Vec<usize> = lines
            .iter()
            .filter(|l| l.contains("Config ") && l.contains(" | "))
            .map(|l| l.chars().position(|c| c == '|').unwrap())
            .collect();
        assert_eq!(pipes.len(), 4);
        assert!(pipes.iter().all(|p| *p == pipes[0]));
    }

    #[test]
    fn test_invalid_series_aborts_without_output() {
        let mut dataset = default_dataset();
        dataset.fault_rates = Series::new("empty", "%", vec![]);
        let result = build_full_report(&dataset, &options(), fixed_time());
        assert!(matches!(result, Err(RenderError::InvalidInput(_))));

        let mut opts = options();
        opts.simple_width = 0;
        assert!(build_simple_report(&default_dataset(), &opts, fixed_time()).is_err());
    }

    #[test]
    fn test_non_monotonic_trend_is_reported() {
        let mut dataset = default_dataset();
        dataset.page_faults = Series::new(
            "faults",
            "faults",
            vec![DataPoint::new("256", 10.0), DataPoint::new("512", 20.0)],
        );
        let lines = build_simple_report(&dataset, &options(), fixed_time()).unwrap();
        assert!(lines.iter().any(|l| l.contains("NOT MONOTONIC")));
        assert!(line_with(&lines, "Total reduction").contains("-100.0%"));
    }
}
