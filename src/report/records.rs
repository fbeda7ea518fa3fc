//! Report record types
//!
//! Field shapes of every collection the reporting pipeline hands over.
//! All of them are plain data; the invariants live in `validate`.

use serde::{Deserialize, Serialize};

/// Aggregate scores for one trained model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelComparisonRecord {
    pub name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Outcome class of a churn prediction.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[strum(to_string = "Churn")]
    Churn,
    #[strum(to_string = "No Churn")]
    NoChurn,
}

/// One cell of the 2x2 confusion matrix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfusionCell {
    pub predicted: Outcome,
    pub actual: Outcome,
    pub count: u64,
}

/// Named position of a confusion cell, keyed by (predicted, actual).
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    #[strum(to_string = "True Negative")]
    TrueNegative,
    #[strum(to_string = "False Positive")]
    FalsePositive,
    #[strum(to_string = "False Negative")]
    FalseNegative,
    #[strum(to_string = "True Positive")]
    TruePositive,
}

impl CellKind {
    /// "Churn" is the positive class.
    pub fn of(predicted: Outcome, actual: Outcome) -> Self {
        match (predicted, actual) {
            (Outcome::NoChurn, Outcome::NoChurn) => CellKind::TrueNegative,
            (Outcome::Churn, Outcome::NoChurn) => CellKind::FalsePositive,
            (Outcome::NoChurn, Outcome::Churn) => CellKind::FalseNegative,
            (Outcome::Churn, Outcome::Churn) => CellKind::TruePositive,
        }
    }

    pub fn predicted(&self) -> Outcome {
        match self {
            CellKind::TrueNegative | CellKind::FalseNegative => Outcome::NoChurn,
            CellKind::FalsePositive | CellKind::TruePositive => Outcome::Churn,
        }
    }

    pub fn actual(&self) -> Outcome {
        match self {
            CellKind::TrueNegative | CellKind::FalsePositive => Outcome::NoChurn,
            CellKind::FalseNegative | CellKind::TruePositive => Outcome::Churn,
        }
    }

    /// Whether the prediction matched the actual outcome.
    pub fn is_correct(&self) -> bool {
        matches!(self, CellKind::TrueNegative | CellKind::TruePositive)
    }
}

impl ConfusionCell {
    pub fn kind(&self) -> CellKind {
        CellKind::of(self.predicted, self.actual)
    }
}

/// Share of one outcome class in the evaluated dataset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassDistributionEntry {
    pub label: String,
    pub percentage: f64,
    pub count: u64,
}

/// Precision, recall and F1 at one decision threshold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThresholdPoint {
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Visual accent of a KPI card.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum AccentKind {
    Success,
    Danger,
    Info,
    Highlight,
}

/// A named KPI with a preformatted value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BusinessMetricCard {
    pub label: String,
    pub display_value: String,
    pub accent: AccentKind,
}

/// Relative contribution of one model input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeatureImportanceEntry {
    pub name: String,
    pub importance: f64,
    pub is_engineered: bool,
}

/// Loss at one training checkpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingCurvePoint {
    pub epoch: u32,
    pub train_loss: f64,
    pub val_loss: f64,
}

/// Business reading of one confusion cell. `amount` is preformatted by the pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImpactStatement {
    pub kind: CellKind,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumption: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BusinessImpact {
    pub statements: Vec<ImpactStatement>,
    pub net_benefit: BusinessMetricCard,
}

/// The whole document emitted by the reporting pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub model_comparison: Vec<ModelComparisonRecord>,
    pub confusion: Vec<ConfusionCell>,
    pub class_distribution: Vec<ClassDistributionEntry>,
    pub threshold_sweep: Vec<ThresholdPoint>,
    pub business_metrics: Vec<BusinessMetricCard>,
    pub feature_importance: Vec<FeatureImportanceEntry>,
    pub training_curve: Vec<TrainingCurvePoint>,
    pub impact: BusinessImpact,
}
