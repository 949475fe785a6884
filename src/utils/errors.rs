use thiserror::Error;

/// Errors raised while turning a series into bars or trend figures
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Configuration errors (environment variables and command selection)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error("Unknown command: '{0}'. Supported: simple, full, image, all")]
    UnknownCommand(String),
}

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid dataset: {0}")]
    Invalid(String),
}

/// Image rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Chart worker failed: {0}")]
    Worker(String),
}

/// Top-level error surfaced by `main`
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
