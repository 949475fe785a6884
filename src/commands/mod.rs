pub mod chart;
pub mod report;

use tracing::info;

use crate::config::{Command, Config};
use crate::services::dataset_service;
use crate::services::output_service::OutputSink;
use crate::utils::AppError;

/// Load the dataset and run the configured command
pub async fn run(config: &Config) -> Result<(), AppError> {
    let dataset = dataset_service::load_dataset(config.dataset_path.as_deref()).await?;
    let mut sink = OutputSink::new(config.output_path.clone());

    info!("Running command {:?}", config.command);

    match config.command {
        Command::Simple => report::execute_simple(config, &dataset, &mut sink).await,
        Command::Full => report::execute_full(config, &dataset, &mut sink).await,
        Command::Image => chart::execute(config, &dataset, &mut sink).await,
        Command::All => {
            report::execute_simple(config, &dataset, &mut sink).await?;
            sink.write_lines(&[String::new()]).await?;
            report::execute_full(config, &dataset, &mut sink).await?;
            chart::execute(config, &dataset, &mut sink).await
        }
    }
}
