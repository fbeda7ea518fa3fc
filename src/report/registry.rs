//! Dataset registry
//!
//! Immutable, validated view over one report document. Accessors hand out
//! shared slices; nothing is recomputed or re-sorted.

use super::error::DatasetError;
use super::records::{
    BusinessImpact, BusinessMetricCard, CellKind, ClassDistributionEntry, ConfusionCell,
    FeatureImportanceEntry, ImpactStatement, ModelComparisonRecord, ReportDocument,
    ThresholdPoint, TrainingCurvePoint,
};
use super::validate::validate_document;

#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    doc: ReportDocument,
}

impl DatasetRegistry {
    /// Validates the document and takes ownership of it.
    ///
    /// # Errors
    /// Returns the first [`DatasetError`] found; a registry never holds a
    /// document that breaks an invariant.
    pub fn from_document(doc: ReportDocument) -> Result<Self, DatasetError> {
        validate_document(&doc)?;
        Ok(Self { doc })
    }

    pub fn model_comparison(&self) -> &[ModelComparisonRecord] {
        &self.doc.model_comparison
    }

    pub fn confusion_cells(&self) -> &[ConfusionCell] {
        &self.doc.confusion
    }

    /// Count for one (predicted, actual) position.
    pub fn confusion_count(&self, kind: CellKind) -> Option<u64> {
        self.doc
            .confusion
            .iter()
            .find(|c| c.kind() == kind)
            .map(|c| c.count)
    }

    /// Total evaluated population. The sum was checked for overflow when the
    /// document was validated.
    pub fn confusion_total(&self) -> u64 {
        self.confusion_cells().iter().map(|c| c.count).sum()
    }

    pub fn class_distribution(&self) -> &[ClassDistributionEntry] {
        &self.doc.class_distribution
    }

    pub fn threshold_sweep(&self) -> &[ThresholdPoint] {
        &self.doc.threshold_sweep
    }

    pub fn business_metrics(&self) -> &[BusinessMetricCard] {
        &self.doc.business_metrics
    }

    pub fn feature_importance(&self) -> &[FeatureImportanceEntry] {
        &self.doc.feature_importance
    }

    pub fn training_curve(&self) -> &[TrainingCurvePoint] {
        &self.doc.training_curve
    }

    pub fn impact(&self) -> &BusinessImpact {
        &self.doc.impact
    }

    pub fn impact_statement(&self, kind: CellKind) -> Option<&ImpactStatement> {
        self.doc.impact.statements.iter().find(|s| s.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builtin;

    fn registry() -> DatasetRegistry {
        DatasetRegistry::from_document(builtin::document()).unwrap()
    }

    #[test]
    fn confusion_counts_sum_to_population() {
        let reg = registry();
        assert_eq!(reg.confusion_cells().len(), 4);
        assert_eq!(reg.confusion_total(), 1410);
    }

    #[test]
    fn confusion_accuracy_matches_weighted_model() {
        let reg = registry();
        let tp = reg.confusion_count(CellKind::TruePositive).unwrap();
        let tn = reg.confusion_count(CellKind::TrueNegative).unwrap();
        let accuracy = (tp + tn) as f64 / reg.confusion_total() as f64;
        let weighted = reg
            .model_comparison()
            .iter()
            .find(|m| m.name == "Weighted MLP")
            .unwrap();
        assert!((accuracy - 0.7504).abs() < 1e-4);
        assert!((accuracy - weighted.accuracy).abs() < 1e-3);
    }

    #[test]
    fn class_distribution_totals() {
        let reg = registry();
        let pct: f64 = reg.class_distribution().iter().map(|e| e.percentage).sum();
        let count: u64 = reg.class_distribution().iter().map(|e| e.count).sum();
        assert!((pct - 100.0).abs() < 1e-9);
        assert_eq!(count, 7043);
    }

    #[test]
    fn threshold_sweep_is_ascending_and_bounded() {
        let reg = registry();
        let sweep = reg.threshold_sweep();
        assert!(sweep.windows(2).all(|w| w[0].threshold < w[1].threshold));
        for p in sweep {
            for v in [p.threshold, p.precision, p.recall, p.f1] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
        let mid = sweep.iter().find(|p| p.threshold == 0.5).unwrap();
        assert_eq!((mid.precision, mid.recall, mid.f1), (0.52, 0.78, 0.62));
    }

    #[test]
    fn training_curve_epochs_increase_and_losses_fall() {
        let reg = registry();
        let curve = reg.training_curve();
        let epochs: Vec<u32> = curve.iter().map(|p| p.epoch).collect();
        assert_eq!(epochs, vec![1, 5, 10, 15, 20]);
        for w in curve.windows(2) {
            assert!(w[1].train_loss <= w[0].train_loss);
            assert!(w[1].val_loss <= w[0].val_loss);
        }
        assert!(curve.iter().all(|p| p.train_loss >= 0.0 && p.val_loss >= 0.0));
    }

    #[test]
    fn impact_statement_lookup_by_cell_kind() {
        let reg = registry();
        let fp = reg.impact_statement(CellKind::FalsePositive).unwrap();
        assert_eq!(fp.amount, "$4,250 spent");
        assert_eq!(reg.impact().net_benefit.display_value, "$239,750");
    }
}
