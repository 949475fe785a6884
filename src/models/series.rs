//! Series and dataset models

use serde::{Deserialize, Serialize};

/// A single labeled value in a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        DataPoint {
            label: label.into(),
            value,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// An ordered, immutable sequence of data points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Series {
            name: name.into(),
            unit: unit.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// The two series shown by every report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub title: String,
    pub page_faults: Series,
    pub fault_rates: Series,
}
