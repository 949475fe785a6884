use tracing::{error, info};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod models;
mod services;
mod utils;

use config::Config;
use utils::AppError;

fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "pagefault_charts=info".parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), AppError> {
    let arg = std::env::args().nth(1);
    let config = Config::from_env()?.with_command_arg(arg.as_deref())?;
    commands::run(&config).await
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    info!("📊 Starting pagefault-charts v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
