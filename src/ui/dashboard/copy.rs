//! Static narrative text shown alongside the panels.

use crate::report::records::CellKind;

pub const TITLE: &str = "PyTorch Customer Churn Prediction";
pub const SUBTITLE: &str =
    "End-to-end ML pipeline with class-weighted loss for imbalanced telecom data";

pub const FOOTER_FACTS: &str = "Dataset: Telco Customer Churn | Framework: PyTorch | Optimizer: Adam | Architecture: 128→64 MLP with Dropout 0.3";
pub const FOOTER_TECHNIQUES: &str =
    "Stratified sampling • Class-weighted loss • Threshold tuning • Business-oriented evaluation";
pub const FOOTER_KEYS: &str = "[1-4] Tab | [←/→] Cycle | [Q] Quit";

pub const ARCHITECTURE_NOTE: &str = "Architecture: 128→64 hidden layers with dropout (0.3), Adam optimizer, class-weighted BCEWithLogitsLoss";
pub const THRESHOLD_NOTE: &str = "Optimal Threshold: 0.5-0.6 balances precision and recall. Lower thresholds increase recall (catch more churners) but reduce precision (more false alarms).";
pub const CONFUSION_TITLE: &str = "Confusion Matrix (Weighted MLP @ 0.5)";
pub const NET_BENEFIT_CAPTION: &str = "ROI from deploying weighted MLP model with 0.5 threshold";

/// Heading noun and description for the business reading of a cell.
pub fn impact_copy(kind: CellKind) -> (&'static str, &'static str) {
    match kind {
        CellKind::TruePositive => (
            "True Positives",
            "Churners correctly identified and saved through retention",
        ),
        CellKind::TrueNegative => (
            "True Negatives",
            "Non-churners correctly identified, no unnecessary outreach",
        ),
        CellKind::FalseNegative => ("False Negatives", "Churners missed, revenue lost"),
        CellKind::FalsePositive => (
            "False Positives",
            "Non-churners contacted unnecessarily",
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock {
    pub title: &'static str,
    pub formula: Option<&'static str>,
    pub body: &'static str,
}

pub const RATIONALE: [TextBlock; 3] = [
    TextBlock {
        title: "Higher Recall (78.34% vs 47.06%)",
        formula: None,
        body: "Catches 66% more at-risk customers before they leave. In churn prediction, missing a churner costs far more than a false alarm.",
    },
    TextBlock {
        title: "Better F1 Score (0.6247 vs 0.5432)",
        formula: None,
        body: "Achieves superior balance between precision and recall, critical for imbalanced datasets where accuracy alone is misleading.",
    },
    TextBlock {
        title: "Class-Weighted Loss Function",
        formula: None,
        body: "Penalizes misclassifying minority class (churners) more heavily during training, aligning model optimization with business priorities.",
    },
];

pub const ENGINEERED_FEATURES: [TextBlock; 4] = [
    TextBlock {
        title: "ChargeRatio",
        formula: Some("TotalCharges / MonthlyCharges"),
        body: "Captures customer value trajectory. Higher ratios indicate long-term, stable customers.",
    },
    TextBlock {
        title: "IsNewCustomer",
        formula: Some("tenure < 12 months"),
        body: "New customers are at higher churn risk during onboarding period.",
    },
    TextBlock {
        title: "ContractIsMonthToMonth",
        formula: Some("Binary flag from Contract"),
        body: "Month-to-month contracts have significantly higher churn than annual contracts.",
    },
    TextBlock {
        title: "IsAutoPay",
        formula: Some("From PaymentMethod patterns"),
        body: "Automatic payment methods correlate with lower churn through reduced friction.",
    },
];

pub const PIPELINE_STEPS: [(&str, &str); 4] = [
    (
        "Data Cleaning",
        "Checked missing values, duplicates, converted TotalCharges to numeric with median imputation",
    ),
    (
        "Feature Engineering",
        "Created ChargeRatio, IsNewCustomer, ContractIsMonthToMonth, IsAutoPay",
    ),
    (
        "Encoding & Scaling",
        "One-hot encoding for categoricals, z-score normalization for numericals",
    ),
    (
        "Stratified Split",
        "80/20 train/test split preserving 26.5% churn ratio in both sets",
    ),
];
