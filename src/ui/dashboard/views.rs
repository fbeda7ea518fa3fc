//! Tab views
//!
//! Each tab is a fixed, ordered arrangement of panels. Selection happens here
//! by exhaustive match on [`TabId`]; nothing is computed.

use crate::ui::tabs::TabId;
use ratatui::layout::Constraint;

/// Every panel the dashboard can mount.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::EnumIter)]
pub enum PanelId {
    KpiCards,
    ClassDistribution,
    ModelComparison,
    TrainingCurve,
    ThresholdSweep,
    ConfusionGrid,
    ImpactBreakdown,
    NetBenefit,
    ModelRationale,
    FeatureImportance,
    EngineeredFeatures,
    PreprocessingPipeline,
}

impl PanelId {
    /// Stable title prefix shown on the panel frame.
    pub fn title(&self) -> &'static str {
        match self {
            PanelId::KpiCards => "Key Metrics",
            PanelId::ClassDistribution => "Dataset Distribution",
            PanelId::ModelComparison => "Model Performance Comparison",
            PanelId::TrainingCurve => "Training Progress",
            PanelId::ThresholdSweep => "Threshold Tuning Analysis",
            PanelId::ConfusionGrid => "Confusion Matrix",
            PanelId::ImpactBreakdown => "Business Impact Calculator",
            PanelId::NetBenefit => "Net Benefit",
            PanelId::ModelRationale => "Why Weighted MLP Wins",
            PanelId::FeatureImportance => "Feature Importance Analysis",
            PanelId::EngineeredFeatures => "Feature Engineering Highlights",
            PanelId::PreprocessingPipeline => "Data Preprocessing Pipeline",
        }
    }
}

/// One horizontal band of a tab: its height and the panels laid side by side.
///
/// Heights are `Min` for bands whose content has a fixed row count and
/// `Fill` for the rest, so every band keeps a non-empty area on small
/// terminals instead of being pushed off screen.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub height: Constraint,
    pub panels: &'static [PanelId],
}

const OVERVIEW: &[Row] = &[
    Row {
        height: Constraint::Min(7),
        panels: &[PanelId::KpiCards],
    },
    Row {
        height: Constraint::Fill(1),
        panels: &[PanelId::ClassDistribution, PanelId::ModelComparison],
    },
];

const MODEL: &[Row] = &[
    Row {
        height: Constraint::Fill(3),
        panels: &[PanelId::TrainingCurve, PanelId::ThresholdSweep],
    },
    Row {
        height: Constraint::Fill(2),
        panels: &[PanelId::ConfusionGrid],
    },
];

const BUSINESS: &[Row] = &[
    Row {
        height: Constraint::Fill(3),
        panels: &[PanelId::ImpactBreakdown],
    },
    Row {
        height: Constraint::Min(5),
        panels: &[PanelId::NetBenefit],
    },
    Row {
        height: Constraint::Fill(2),
        panels: &[PanelId::ModelRationale],
    },
];

// Importance band: borders, one row per feature and the legend.
const FEATURES: &[Row] = &[
    Row {
        height: Constraint::Min(12),
        panels: &[PanelId::FeatureImportance],
    },
    Row {
        height: Constraint::Fill(1),
        panels: &[PanelId::EngineeredFeatures, PanelId::PreprocessingPipeline],
    },
];

pub fn layout_for(tab: TabId) -> &'static [Row] {
    match tab {
        TabId::Overview => OVERVIEW,
        TabId::Model => MODEL,
        TabId::Business => BUSINESS,
        TabId::Features => FEATURES,
    }
}

/// Panels of a tab in mount order.
pub fn panels_for(tab: TabId) -> Vec<PanelId> {
    layout_for(tab)
        .iter()
        .flat_map(|row| row.panels.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn each_tab_mounts_its_fixed_panel_list() {
        assert_eq!(
            panels_for(TabId::Overview),
            vec![
                PanelId::KpiCards,
                PanelId::ClassDistribution,
                PanelId::ModelComparison
            ]
        );
        assert_eq!(
            panels_for(TabId::Model),
            vec![
                PanelId::TrainingCurve,
                PanelId::ThresholdSweep,
                PanelId::ConfusionGrid
            ]
        );
        assert_eq!(
            panels_for(TabId::Business),
            vec![
                PanelId::ImpactBreakdown,
                PanelId::NetBenefit,
                PanelId::ModelRationale
            ]
        );
        assert_eq!(
            panels_for(TabId::Features),
            vec![
                PanelId::FeatureImportance,
                PanelId::EngineeredFeatures,
                PanelId::PreprocessingPipeline
            ]
        );
    }

    #[test]
    fn every_panel_belongs_to_exactly_one_tab() {
        let mut seen = HashSet::new();
        for tab in TabId::iter() {
            for panel in panels_for(tab) {
                assert!(seen.insert(panel), "{panel:?} mounted by two tabs");
            }
        }
        assert_eq!(seen.len(), PanelId::iter().count());
    }

    #[test]
    fn bands_only_use_min_or_fill_heights() {
        for tab in TabId::iter() {
            for row in layout_for(tab) {
                assert!(
                    matches!(row.height, Constraint::Min(_) | Constraint::Fill(_)),
                    "{tab}: {:?} has a rigid height",
                    row.panels
                );
            }
        }
    }

    #[test]
    fn panel_titles_are_distinct() {
        let titles: HashSet<&str> = PanelId::iter().map(|p| p.title()).collect();
        assert_eq!(titles.len(), PanelId::iter().count());
    }
}
