use crate::config::Config;
use crate::models::Dataset;
use crate::services::chart_service;
use crate::services::output_service::OutputSink;
use crate::utils::AppError;

pub async fn execute(config: &Config, dataset: &Dataset, sink: &mut OutputSink) -> Result<(), AppError> {
    tracing::info!(
        "🖼️ Chart generation requested ({}x{} into {})",
        config.chart.width,
        config.chart.height,
        config.chart.output_dir.display()
    );

    let files = chart_service::generate_charts(dataset, &config.chart).await?;

    let mut lines = vec!["✅ Charts generated:".to_string()];
    lines.extend(files.written.iter().map(|path| format!("   • {}", path.display())));
    sink.write_lines(&lines).await?;
    Ok(())
}
