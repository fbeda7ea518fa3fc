//! Error handling for report loading and validation

use super::records::{CellKind, Outcome};
use thiserror::Error;

/// A report document that breaks one of the data-model invariants.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("{0} is empty")]
    Empty(&'static str),

    #[error("model {0:?} appears more than once")]
    DuplicateModel(String),

    #[error("{field} of {record:?} is {value}, expected a value in [0, 1]")]
    MetricOutOfRange {
        record: String,
        field: &'static str,
        value: f64,
    },

    #[error("confusion matrix has {found} cells, expected 4")]
    ConfusionShape { found: usize },

    #[error("confusion cell (predicted {predicted}, actual {actual}) appears more than once")]
    DuplicateCell { predicted: Outcome, actual: Outcome },

    #[error("class distribution percentages sum to {total}, expected 100")]
    DistributionSum { total: f64 },

    #[error("class {label:?} has count {count} of {total}, inconsistent with {percentage}%")]
    DistributionCount {
        label: String,
        count: u64,
        total: u64,
        percentage: f64,
    },

    #[error("threshold {next} does not follow {previous} in ascending order")]
    ThresholdOrder { previous: f64, next: f64 },

    #[error("feature {name:?} has negative importance {importance}")]
    NegativeImportance { name: String, importance: f64 },

    #[error("feature {name:?} is out of descending importance order")]
    ImportanceOrder { name: String },

    #[error("epoch {next} does not strictly follow epoch {previous}")]
    EpochOrder { previous: u32, next: u32 },

    #[error("epochs are counted from 1")]
    ZeroEpoch,

    #[error("epoch {epoch} has a negative loss")]
    NegativeLoss { epoch: u32 },

    #[error("{0} counts add up to more than a u64 can hold")]
    CountOverflow(&'static str),

    #[error("{0} contains a card with an empty label")]
    EmptyLabel(&'static str),

    #[error("impact statement for {0} is missing or duplicated")]
    ImpactShape(CellKind),
}

/// Failure to obtain a usable report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed report JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid report: {0}")]
    Invalid(#[from] DatasetError),
}
