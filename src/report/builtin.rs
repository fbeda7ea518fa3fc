//! Built-in evaluation report
//!
//! Figures for the class-weighted MLP run on the Telco customer churn data.
//! Used when no report document is supplied.

use super::records::{
    AccentKind, BusinessImpact, BusinessMetricCard, CellKind, ClassDistributionEntry,
    ConfusionCell, FeatureImportanceEntry, ImpactStatement, ModelComparisonRecord, Outcome,
    ReportDocument, ThresholdPoint, TrainingCurvePoint,
};

fn model(name: &str, accuracy: f64, precision: f64, recall: f64, f1: f64) -> ModelComparisonRecord {
    ModelComparisonRecord {
        name: name.to_string(),
        accuracy,
        precision,
        recall,
        f1,
    }
}

fn cell(predicted: Outcome, actual: Outcome, count: u64) -> ConfusionCell {
    ConfusionCell {
        predicted,
        actual,
        count,
    }
}

fn threshold(threshold: f64, precision: f64, recall: f64, f1: f64) -> ThresholdPoint {
    ThresholdPoint {
        threshold,
        precision,
        recall,
        f1,
    }
}

fn card(label: &str, display_value: &str, accent: AccentKind) -> BusinessMetricCard {
    BusinessMetricCard {
        label: label.to_string(),
        display_value: display_value.to_string(),
        accent,
    }
}

fn feature(name: &str, importance: f64, is_engineered: bool) -> FeatureImportanceEntry {
    FeatureImportanceEntry {
        name: name.to_string(),
        importance,
        is_engineered,
    }
}

fn checkpoint(epoch: u32, train_loss: f64, val_loss: f64) -> TrainingCurvePoint {
    TrainingCurvePoint {
        epoch,
        train_loss,
        val_loss,
    }
}

fn impact(kind: CellKind, amount: &str, assumption: Option<&str>) -> ImpactStatement {
    ImpactStatement {
        kind,
        amount: amount.to_string(),
        assumption: assumption.map(str::to_string),
    }
}

/// Returns the built-in report document.
pub fn document() -> ReportDocument {
    use Outcome::{Churn, NoChurn};

    ReportDocument {
        model_comparison: vec![
            model("Weighted MLP", 0.7502, 0.5195, 0.7834, 0.6247),
            model("Baseline MLP", 0.7899, 0.6423, 0.4706, 0.5432),
        ],
        confusion: vec![
            cell(NoChurn, NoChurn, 950),
            cell(Churn, NoChurn, 85),
            cell(NoChurn, Churn, 267),
            cell(Churn, Churn, 108),
        ],
        class_distribution: vec![
            ClassDistributionEntry {
                label: "No Churn".to_string(),
                percentage: 73.5,
                count: 5174,
            },
            ClassDistributionEntry {
                label: "Churn".to_string(),
                percentage: 26.5,
                count: 1869,
            },
        ],
        threshold_sweep: vec![
            threshold(0.3, 0.42, 0.89, 0.57),
            threshold(0.4, 0.48, 0.85, 0.61),
            threshold(0.5, 0.52, 0.78, 0.62),
            threshold(0.6, 0.58, 0.68, 0.63),
            threshold(0.7, 0.65, 0.52, 0.58),
            threshold(0.8, 0.71, 0.38, 0.49),
        ],
        business_metrics: vec![
            card("Saved Revenue", "$324,000", AccentKind::Success),
            card("Missed Revenue", "$80,100", AccentKind::Danger),
            card("Retention Rate", "78.34%", AccentKind::Info),
            card("Customers Saved", "108", AccentKind::Highlight),
        ],
        feature_importance: vec![
            feature("Tenure", 0.18, false),
            feature("MonthlyCharges", 0.16, false),
            feature("ChargeRatio", 0.14, true),
            feature("TotalCharges", 0.12, false),
            feature("ContractIsMonthToMonth", 0.11, true),
            feature("IsAutoPay", 0.09, true),
            feature("IsNewCustomer", 0.08, true),
            feature("InternetService", 0.07, false),
            feature("TechSupport", 0.05, false),
        ],
        training_curve: vec![
            checkpoint(1, 0.52, 0.48),
            checkpoint(5, 0.41, 0.43),
            checkpoint(10, 0.36, 0.40),
            checkpoint(15, 0.33, 0.39),
            checkpoint(20, 0.31, 0.38),
        ],
        impact: BusinessImpact {
            statements: vec![
                impact(
                    CellKind::TruePositive,
                    "$324,000 saved",
                    Some("Assuming $3,000 avg customer lifetime value"),
                ),
                impact(CellKind::TrueNegative, "$0 wasted", None),
                impact(
                    CellKind::FalseNegative,
                    "$80,100 lost",
                    Some("Assuming $300 avg monthly value × 1 year"),
                ),
                impact(
                    CellKind::FalsePositive,
                    "$4,250 spent",
                    Some("Assuming $50 contact cost per customer"),
                ),
            ],
            net_benefit: card("Total Net Benefit", "$239,750", AccentKind::Highlight),
        },
    }
}
