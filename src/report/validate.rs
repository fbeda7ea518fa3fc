//! Invariant checks run once when a report document is loaded.

use super::error::DatasetError;
use super::records::{
    BusinessImpact, BusinessMetricCard, CellKind, ClassDistributionEntry, ConfusionCell,
    FeatureImportanceEntry, ModelComparisonRecord, ReportDocument, ThresholdPoint,
    TrainingCurvePoint,
};
use crate::consts::report::{DISTRIBUTION_COUNT_TOLERANCE, DISTRIBUTION_SUM_TOLERANCE};
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// Checks every invariant of the document, stopping at the first violation.
pub fn validate_document(doc: &ReportDocument) -> Result<(), DatasetError> {
    validate_models(&doc.model_comparison)?;
    validate_confusion(&doc.confusion)?;
    validate_distribution(&doc.class_distribution)?;
    validate_threshold_sweep(&doc.threshold_sweep)?;
    validate_cards("business metrics", &doc.business_metrics)?;
    validate_features(&doc.feature_importance)?;
    validate_training_curve(&doc.training_curve)?;
    validate_impact(&doc.impact)?;
    Ok(())
}

fn unit_interval(record: &str, field: &'static str, value: f64) -> Result<(), DatasetError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DatasetError::MetricOutOfRange {
            record: record.to_string(),
            field,
            value,
        })
    }
}

fn validate_models(models: &[ModelComparisonRecord]) -> Result<(), DatasetError> {
    if models.is_empty() {
        return Err(DatasetError::Empty("model comparison"));
    }
    let mut seen = HashSet::new();
    for m in models {
        if !seen.insert(m.name.as_str()) {
            return Err(DatasetError::DuplicateModel(m.name.clone()));
        }
        unit_interval(&m.name, "accuracy", m.accuracy)?;
        unit_interval(&m.name, "precision", m.precision)?;
        unit_interval(&m.name, "recall", m.recall)?;
        unit_interval(&m.name, "f1", m.f1)?;
    }
    Ok(())
}

fn validate_confusion(cells: &[ConfusionCell]) -> Result<(), DatasetError> {
    if cells.len() != 4 {
        return Err(DatasetError::ConfusionShape { found: cells.len() });
    }
    let mut seen = HashSet::new();
    for cell in cells {
        if !seen.insert(cell.kind()) {
            return Err(DatasetError::DuplicateCell {
                predicted: cell.predicted,
                actual: cell.actual,
            });
        }
    }
    checked_total("confusion matrix", cells.iter().map(|c| c.count))?;
    Ok(())
}

/// Sum of `counts`, or [`DatasetError::CountOverflow`] if it does not fit in a `u64`.
fn checked_total(
    section: &'static str,
    counts: impl IntoIterator<Item = u64>,
) -> Result<u64, DatasetError> {
    counts
        .into_iter()
        .try_fold(0u64, |acc, n| acc.checked_add(n))
        .ok_or(DatasetError::CountOverflow(section))
}

fn validate_distribution(entries: &[ClassDistributionEntry]) -> Result<(), DatasetError> {
    if entries.is_empty() {
        return Err(DatasetError::Empty("class distribution"));
    }
    let total_pct: f64 = entries.iter().map(|e| e.percentage).sum();
    if (total_pct - 100.0).abs() > DISTRIBUTION_SUM_TOLERANCE {
        return Err(DatasetError::DistributionSum { total: total_pct });
    }
    let total = checked_total("class distribution", entries.iter().map(|e| e.count))?;
    for e in entries {
        let observed = if total == 0 {
            0.0
        } else {
            e.count as f64 / total as f64 * 100.0
        };
        if (observed - e.percentage).abs() > DISTRIBUTION_COUNT_TOLERANCE {
            return Err(DatasetError::DistributionCount {
                label: e.label.clone(),
                count: e.count,
                total,
                percentage: e.percentage,
            });
        }
    }
    Ok(())
}

fn validate_threshold_sweep(points: &[ThresholdPoint]) -> Result<(), DatasetError> {
    if points.is_empty() {
        return Err(DatasetError::Empty("threshold sweep"));
    }
    for p in points {
        let name = format!("threshold {}", p.threshold);
        unit_interval(&name, "threshold", p.threshold)?;
        unit_interval(&name, "precision", p.precision)?;
        unit_interval(&name, "recall", p.recall)?;
        unit_interval(&name, "f1", p.f1)?;
    }
    for pair in points.windows(2) {
        if pair[1].threshold <= pair[0].threshold {
            return Err(DatasetError::ThresholdOrder {
                previous: pair[0].threshold,
                next: pair[1].threshold,
            });
        }
    }
    Ok(())
}

fn validate_cards(section: &'static str, cards: &[BusinessMetricCard]) -> Result<(), DatasetError> {
    if cards.is_empty() {
        return Err(DatasetError::Empty(section));
    }
    if cards.iter().any(|c| c.label.trim().is_empty()) {
        return Err(DatasetError::EmptyLabel(section));
    }
    Ok(())
}

fn validate_features(features: &[FeatureImportanceEntry]) -> Result<(), DatasetError> {
    if features.is_empty() {
        return Err(DatasetError::Empty("feature importance"));
    }
    if let Some(f) = features.iter().find(|f| f.importance < 0.0) {
        return Err(DatasetError::NegativeImportance {
            name: f.name.clone(),
            importance: f.importance,
        });
    }
    for pair in features.windows(2) {
        if pair[1].importance > pair[0].importance {
            return Err(DatasetError::ImportanceOrder {
                name: pair[1].name.clone(),
            });
        }
    }
    Ok(())
}

fn validate_training_curve(points: &[TrainingCurvePoint]) -> Result<(), DatasetError> {
    if points.is_empty() {
        return Err(DatasetError::Empty("training curve"));
    }
    if let Some(p) = points
        .iter()
        .find(|p| p.train_loss < 0.0 || p.val_loss < 0.0)
    {
        return Err(DatasetError::NegativeLoss { epoch: p.epoch });
    }
    if points[0].epoch == 0 {
        return Err(DatasetError::ZeroEpoch);
    }
    for pair in points.windows(2) {
        if pair[1].epoch <= pair[0].epoch {
            return Err(DatasetError::EpochOrder {
                previous: pair[0].epoch,
                next: pair[1].epoch,
            });
        }
    }
    Ok(())
}

fn validate_impact(impact: &BusinessImpact) -> Result<(), DatasetError> {
    for kind in CellKind::iter() {
        let n = impact.statements.iter().filter(|s| s.kind == kind).count();
        if n != 1 {
            return Err(DatasetError::ImpactShape(kind));
        }
    }
    validate_cards("net benefit", std::slice::from_ref(&impact.net_benefit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builtin;
    use crate::report::records::Outcome;

    #[test]
    fn builtin_document_is_valid() {
        assert_eq!(validate_document(&builtin::document()), Ok(()));
    }

    #[test]
    fn rejects_three_confusion_cells() {
        let mut doc = builtin::document();
        doc.confusion.pop();
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::ConfusionShape { found: 3 })
        );
    }

    #[test]
    fn rejects_duplicated_confusion_cell() {
        let mut doc = builtin::document();
        doc.confusion[3].predicted = Outcome::NoChurn;
        assert!(matches!(
            validate_document(&doc),
            Err(DatasetError::DuplicateCell { .. })
        ));
    }

    #[test]
    fn rejects_percentages_not_summing_to_100() {
        let mut doc = builtin::document();
        doc.class_distribution[0].percentage = 70.0;
        assert!(matches!(
            validate_document(&doc),
            Err(DatasetError::DistributionSum { .. })
        ));
    }

    #[test]
    fn rejects_count_inconsistent_with_percentage() {
        let mut doc = builtin::document();
        doc.class_distribution[1].count = 3000;
        assert!(matches!(
            validate_document(&doc),
            Err(DatasetError::DistributionCount { .. })
        ));
    }

    #[test]
    fn rejects_metric_above_one() {
        let mut doc = builtin::document();
        doc.model_comparison[1].recall = 1.2;
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::MetricOutOfRange {
                record: "Baseline MLP".to_string(),
                field: "recall",
                value: 1.2,
            })
        );
    }

    #[test]
    fn rejects_duplicate_model_name() {
        let mut doc = builtin::document();
        doc.model_comparison[1].name = "Weighted MLP".to_string();
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::DuplicateModel("Weighted MLP".to_string()))
        );
    }

    #[test]
    fn rejects_duplicate_threshold() {
        let mut doc = builtin::document();
        doc.threshold_sweep[3].threshold = 0.5;
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::ThresholdOrder {
                previous: 0.5,
                next: 0.5,
            })
        );
    }

    #[test]
    fn rejects_unsorted_importance() {
        let mut doc = builtin::document();
        doc.feature_importance.swap(0, 1);
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::ImportanceOrder {
                name: "Tenure".to_string()
            })
        );
    }

    #[test]
    fn rejects_repeated_epoch() {
        let mut doc = builtin::document();
        doc.training_curve[2].epoch = 5;
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::EpochOrder {
                previous: 5,
                next: 5,
            })
        );
    }

    #[test]
    fn rejects_negative_loss() {
        let mut doc = builtin::document();
        doc.training_curve[4].val_loss = -0.1;
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::NegativeLoss { epoch: 20 })
        );
    }

    #[test]
    fn rejects_blank_card_label() {
        let mut doc = builtin::document();
        doc.business_metrics[2].label = "  ".to_string();
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::EmptyLabel("business metrics"))
        );
    }

    #[test]
    fn rejects_missing_impact_statement() {
        let mut doc = builtin::document();
        doc.impact
            .statements
            .retain(|s| s.kind != CellKind::FalsePositive);
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::ImpactShape(CellKind::FalsePositive))
        );
    }

    #[test]
    fn rejects_distribution_counts_that_overflow() {
        let mut doc = builtin::document();
        doc.class_distribution[0].count = u64::MAX;
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::CountOverflow("class distribution"))
        );
    }

    #[test]
    fn rejects_confusion_counts_that_overflow() {
        let mut doc = builtin::document();
        doc.confusion[0].count = u64::MAX;
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::CountOverflow("confusion matrix"))
        );
    }

    #[test]
    fn checked_total_sums_in_range() {
        assert_eq!(checked_total("x", [950, 85, 267, 108]), Ok(1410));
        assert_eq!(checked_total("x", Vec::new()), Ok(0));
    }

    #[test]
    fn rejects_empty_model_comparison() {
        let mut doc = builtin::document();
        doc.model_comparison.clear();
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::Empty("model comparison"))
        );
    }

    #[test]
    fn rejects_empty_threshold_sweep() {
        let mut doc = builtin::document();
        doc.threshold_sweep.clear();
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::Empty("threshold sweep"))
        );
    }

    #[test]
    fn rejects_negative_importance() {
        let mut doc = builtin::document();
        doc.feature_importance[8].importance = -0.01;
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::NegativeImportance {
                name: "TechSupport".to_string(),
                importance: -0.01,
            })
        );
    }

    #[test]
    fn rejects_epoch_zero() {
        let mut doc = builtin::document();
        doc.training_curve[0].epoch = 0;
        assert_eq!(validate_document(&doc), Err(DatasetError::ZeroEpoch));
    }

    #[test]
    fn rejects_duplicated_impact_statement() {
        let mut doc = builtin::document();
        let extra = doc.impact.statements[0].clone();
        doc.impact.statements.push(extra);
        assert_eq!(
            validate_document(&doc),
            Err(DatasetError::ImpactShape(CellKind::TruePositive))
        );
    }
}
