use std::path::Path;

use lazy_static::lazy_static;
use tracing::info;

use crate::models::{DataPoint, Dataset, Series};
use crate::utils::errors::DatasetError;

lazy_static! {
    /// Results of the 100x100 matrix simulation runs
    static ref DEFAULT_DATASET: Dataset = Dataset {
        title: "Matrices 100x100".to_string(),
        page_faults: Series::new(
            "Page faults vs page size",
            "faults",
            vec![
                DataPoint::new("256", 535.0),
                DataPoint::new("512", 301.0),
                DataPoint::new("1024", 184.0),
                DataPoint::new("2048", 126.0),
                DataPoint::new("4096", 98.0),
            ],
        ),
        fault_rates: Series::new(
            "Fault rate per configuration",
            "%",
            vec![
                DataPoint::new("Config 1", 0.39),
                DataPoint::new("Config 2", 0.80),
                DataPoint::new("Config 3", 0.20).with_note("2048 bytes, 3 processes"),
                DataPoint::new("Config 4", 1.58).with_note("256 bytes"),
            ],
        ),
    };
}

/// The built-in dataset
pub fn default_dataset() -> Dataset {
    DEFAULT_DATASET.clone()
}

/// Load a dataset from `path`, or the built-in one when no path is given
pub async fn load_dataset(path: Option<&Path>) -> Result<Dataset, DatasetError> {
    let Some(path) = path else {
        info!("Using built-in dataset");
        return Ok(default_dataset());
    };

    let origin = path.display().to_string();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DatasetError::Io {
            path: origin.clone(),
            source,
        })?;

    let dataset = parse_dataset(&contents, &origin)?;
    info!(
        "Loaded dataset '{}' from {} ({} + {} points)",
        dataset.title,
        origin,
        dataset.page_faults.len(),
        dataset.fault_rates.len()
    );
    Ok(dataset)
}

/// Parse and validate a JSON dataset
pub fn parse_dataset(contents: &str, origin: &str) -> Result<Dataset, DatasetError> {
    let dataset: Dataset = serde_json::from_str(contents).map_err(|source| DatasetError::Parse {
        path: origin.to_string(),
        source,
    })?;

    for series in [&dataset.page_faults, &dataset.fault_rates] {
        if series.is_empty() {
            return Err(DatasetError::Invalid(format!(
                "series '{}' has no points",
                series.name
            )));
        }
        if let Some(bad) = series
            .points
            .iter()
            .find(|p| !p.value.is_finite() || p.value < 0.0)
        {
            return Err(DatasetError::Invalid(format!(
                "value {} for '{}' in series '{}' is not a non-negative number",
                bad.value, bad.label, series.name
            )));
        }
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_literals() {
        let dataset = default_dataset();
        assert_eq!(dataset.page_faults.labels(), vec!["256", "512", "1024", "2048", "4096"]);
        assert_eq!(dataset.page_faults.values(), vec![535.0, 301.0, 184.0, 126.0, 98.0]);
        assert_eq!(
            dataset.fault_rates.labels(),
            vec!["Config 1", "Config 2", "Config 3", "Config 4"]
        );
        assert_eq!(dataset.fault_rates.values(), vec![0.39, 0.80, 0.20, 1.58]);
        assert_eq!(
            dataset.fault_rates.points[2].note.as_deref(),
            Some("2048 bytes, 3 processes")
        );
    }

    #[test]
    fn test_parse_rejects_empty_series() {
        let json = r#"{
            "title": "t",
            "page_faults": { "name": "pf", "points": [] },
            "fault_rates": { "name": "fr", "points": [ { "label": "a", "value": 1.0 } ] }
        }"#;
        let result = parse_dataset(json, "inline");
        assert!(matches!(result, Err(DatasetError::Invalid(_))));
    }

    #[test]
    fn test_parse_rejects_negative_values() {
        let json = r#"{
            "title": "t",
            "page_faults": { "name": "pf", "points": [ { "label": "256", "value": -5.0 } ] },
            "fault_rates": { "name": "fr", "points": [ { "label": "a", "value": 1.0 } ] }
        }"#;
        let result = parse_dataset(json, "inline");
        assert!(matches!(result, Err(DatasetError::Invalid(msg)) if msg.contains("256")));
    }

    #[test]
    fn test_parse_accepts_zero_values() {
        let json = r#"{
            "title": "t",
            "page_faults": { "name": "pf", "points": [ { "label": "256", "value": 0.0 } ] },
            "fault_rates": { "name": "fr", "points": [ { "label": "a", "value": 0.0 } ] }
        }"#;
        assert!(parse_dataset(json, "inline").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_dataset("{ not json", "inline");
        assert!(matches!(result, Err(DatasetError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_dataset_from_file() {
        let path = std::env::temp_dir().join(format!(
            "pagefault_charts_dataset_{}.json",
            std::process::id()
        ));
        let original = default_dataset();
        let json = serde_json::to_string_pretty(&original).unwrap();
        tokio::fs::write(&path, json).await.unwrap();

        let loaded = load_dataset(Some(&path)).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_load_without_path_uses_default() {
        let loaded = load_dataset(None).await.unwrap();
        assert_eq!(loaded, default_dataset());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("pagefault_charts_missing_dataset.json");
        let result = load_dataset(Some(&path)).await;
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
