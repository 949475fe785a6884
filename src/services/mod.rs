pub mod bar_service;
pub mod chart_service;
pub mod dataset_service;
pub mod efficiency_service;
pub mod output_service;
pub mod report_service;
pub mod trend_service;
