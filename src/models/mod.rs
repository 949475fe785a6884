//! Data models for pagefault-charts commands and services
//!
//! This module organizes the inputs (series, datasets) and the result structs
//! produced by the rendering, analysis and charting services.

pub mod bar;
pub mod chart;
pub mod efficiency;
pub mod series;
pub mod trend;

// Re-export commonly used types for convenience
pub use bar::RenderedBar;
pub use chart::{ChartFiles, ChartOptions};
pub use efficiency::Efficiency;
pub use series::{DataPoint, Dataset, Series};
pub use trend::{Extreme, StepChange, TrendSummary};
