use chrono::Utc;

use crate::config::Config;
use crate::models::Dataset;
use crate::services::output_service::OutputSink;
use crate::services::report_service::{self, ReportOptions};
use crate::utils::AppError;

fn report_options(config: &Config) -> ReportOptions {
    ReportOptions {
        glyph: config.glyph.clone(),
        faults_width: config.faults_width,
        simple_width: config.simple_width,
        rates_width: config.rates_width,
    }
}

pub async fn execute_simple(config: &Config, dataset: &Dataset, sink: &mut OutputSink) -> Result<(), AppError> {
    tracing::info!("📊 Simple report requested");
    let lines = report_service::build_simple_report(dataset, &report_options(config), Utc::now())?;
    sink.write_lines(&lines).await?;
    Ok(())
}

pub async fn execute_full(config: &Config, dataset: &Dataset, sink: &mut OutputSink) -> Result<(), AppError> {
    tracing::info!("📊 Full report requested");
    let lines = report_service::build_full_report(dataset, &report_options(config), Utc::now())?;
    sink.write_lines(&lines).await?;
    Ok(())
}
