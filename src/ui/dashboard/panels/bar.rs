//! Bar panels: grouped model metrics and horizontal feature importance.

use super::{PanelError, panel_block};
use crate::consts::cli_consts::{
    BAR_VALUE_SCALE, IMPORTANCE_DECIMALS, MAX_METRIC_BAR_WIDTH, METRIC_DECIMALS,
};
use crate::report::DatasetRegistry;
use crate::ui::format::fixed;
use crate::ui::palette::{ColorToken, METRIC_SERIES, feature_color};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};

#[derive(Debug, Clone, PartialEq)]
pub struct BarModel {
    pub label: String,
    pub value: f64,
    /// Readout printed on the bar.
    pub text: String,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroupModel {
    pub label: String,
    pub bars: Vec<BarModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarPanel {
    pub title: String,
    pub direction: Direction,
    /// Value range of the value axis.
    pub domain: (f64, f64),
    pub groups: Vec<BarGroupModel>,
    pub legend: Vec<(String, ColorToken)>,
}

impl BarPanel {
    pub fn bars(&self) -> impl Iterator<Item = &BarModel> {
        self.groups.iter().flat_map(|g| g.bars.iter())
    }
}

const METRIC_NAMES: [&str; 4] = ["accuracy", "precision", "recall", "f1"];

/// One group per model, one bar per metric, on a fixed `[0, 1]` axis.
pub fn model_comparison(registry: &DatasetRegistry) -> Result<BarPanel, PanelError> {
    let models = registry.model_comparison();
    if models.is_empty() {
        return Err(PanelError::EmptySlice("model comparison"));
    }
    let groups = models
        .iter()
        .map(|m| BarGroupModel {
            label: m.name.clone(),
            bars: [m.accuracy, m.precision, m.recall, m.f1]
                .into_iter()
                .zip(METRIC_SERIES)
                .zip(METRIC_NAMES)
                .map(|((value, color), name)| BarModel {
                    label: name.to_string(),
                    value,
                    text: fixed(value, METRIC_DECIMALS),
                    color,
                })
                .collect(),
        })
        .collect();

    Ok(BarPanel {
        title: "Model Performance Comparison".to_string(),
        direction: Direction::Vertical,
        domain: (0.0, 1.0),
        groups,
        legend: METRIC_NAMES
            .iter()
            .zip(METRIC_SERIES)
            .map(|(name, color)| (name.to_string(), color))
            .collect(),
    })
}

/// Single horizontal group, colored per bar by the engineered flag.
pub fn feature_importance(registry: &DatasetRegistry) -> Result<BarPanel, PanelError> {
    let features = registry.feature_importance();
    let max = features
        .iter()
        .map(|f| f.importance)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        .ok_or(PanelError::EmptySlice("feature importance"))?;
    if max <= 0.0 {
        return Err(PanelError::DegenerateDomain("feature importance"));
    }

    let bars = features
        .iter()
        .map(|f| BarModel {
            label: f.name.clone(),
            value: f.importance,
            text: fixed(f.importance, IMPORTANCE_DECIMALS),
            color: feature_color(f.is_engineered),
        })
        .collect();

    Ok(BarPanel {
        title: "Feature Importance Analysis".to_string(),
        direction: Direction::Horizontal,
        domain: (0.0, max),
        groups: vec![BarGroupModel {
            label: String::new(),
            bars,
        }],
        legend: vec![
            ("Original Features".to_string(), feature_color(false)),
            ("Engineered Features".to_string(), feature_color(true)),
        ],
    })
}

const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 3;

/// Widest vertical bar that still fits every group into `width` cells.
fn vertical_bar_width(width: u16, groups: usize, bars_per_group: usize) -> u16 {
    let groups = groups.max(1) as u16;
    let bars = bars_per_group.max(1) as u16;
    let per_group = width.saturating_sub(GROUP_GAP * (groups - 1)) / groups;
    let per_bar = per_group.saturating_sub(BAR_GAP * (bars - 1)) / bars;
    per_bar.clamp(1, MAX_METRIC_BAR_WIDTH)
}

fn scaled(value: f64) -> u64 {
    (value.max(0.0) * BAR_VALUE_SCALE).round() as u64
}

pub fn render(f: &mut Frame, area: Rect, panel: &BarPanel) {
    let block = panel_block(&panel.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(inner);

    let horizontal = panel.direction == Direction::Horizontal;
    let bars_per_group = panel.groups.iter().map(|g| g.bars.len()).max().unwrap_or(0);
    let mut chart = BarChart::default()
        .direction(panel.direction)
        .bar_width(if horizontal {
            1
        } else {
            vertical_bar_width(chunks[0].width, panel.groups.len(), bars_per_group)
        })
        .bar_gap(if horizontal { 0 } else { BAR_GAP })
        .group_gap(GROUP_GAP)
        .max(scaled(panel.domain.1));

    for group in &panel.groups {
        let bars: Vec<Bar> = group
            .bars
            .iter()
            .map(|b| {
                let color = b.color.color();
                let bar = Bar::default()
                    .value(scaled(b.value))
                    .text_value(b.text.clone())
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color));
                if horizontal {
                    bar.label(Line::from(b.label.clone()))
                } else {
                    bar
                }
            })
            .collect();
        let mut bar_group = BarGroup::default().bars(&bars);
        if !group.label.is_empty() {
            bar_group = bar_group.label(Line::from(group.label.clone()));
        }
        chart = chart.data(bar_group);
    }
    f.render_widget(chart, chunks[0]);

    let mut legend = Vec::new();
    for (name, color) in &panel.legend {
        legend.push(Span::styled("■ ", Style::default().fg(color.color())));
        legend.push(Span::styled(
            format!("{}   ", name),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(legend)).centered(), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builtin;

    fn registry() -> DatasetRegistry {
        DatasetRegistry::from_document(builtin::document()).unwrap()
    }

    #[test]
    fn model_comparison_groups_by_model_on_unit_domain() {
        let panel = model_comparison(&registry()).unwrap();
        assert_eq!(panel.domain, (0.0, 1.0));
        let labels: Vec<&str> = panel.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Weighted MLP", "Baseline MLP"]);
        let weighted: Vec<&str> = panel.groups[0].bars.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(weighted, vec!["0.7502", "0.5195", "0.7834", "0.6247"]);
    }

    #[test]
    fn series_colors_follow_palette_index_not_value() {
        let panel = model_comparison(&registry()).unwrap();
        for group in &panel.groups {
            let colors: Vec<ColorToken> = group.bars.iter().map(|b| b.color).collect();
            assert_eq!(colors, METRIC_SERIES.to_vec());
        }
    }

    #[test]
    fn feature_importance_marks_engineered_features() {
        let panel = feature_importance(&registry()).unwrap();
        assert_eq!(panel.direction, Direction::Horizontal);
        assert_eq!(panel.bars().count(), 9);

        let engineered: Vec<&str> = panel
            .bars()
            .filter(|b| b.color == feature_color(true))
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(
            engineered,
            vec![
                "ChargeRatio",
                "ContractIsMonthToMonth",
                "IsAutoPay",
                "IsNewCustomer"
            ]
        );
        let original = panel
            .bars()
            .filter(|b| b.color == feature_color(false))
            .count();
        assert_eq!(original, 5);
    }

    #[test]
    fn feature_importance_domain_is_max_observed_and_order_kept() {
        let panel = feature_importance(&registry()).unwrap();
        assert_eq!(panel.domain, (0.0, 0.18));
        let first = panel.bars().next().unwrap();
        let last = panel.bars().last().unwrap();
        assert_eq!(first.label, "Tenure");
        assert_eq!(last.label, "TechSupport");
    }

    #[test]
    fn importance_text_has_two_decimals() {
        let panel = feature_importance(&registry()).unwrap();
        let first = panel.bars().next().unwrap();
        assert_eq!(first.text, fixed(0.18, IMPORTANCE_DECIMALS));
        assert_eq!(first.text, "0.18");
    }

    #[test]
    fn vertical_bars_narrow_to_fit_the_panel() {
        // Two groups of four: 2 * (4 * 6 + 3) + 3 cells at full width.
        assert_eq!(vertical_bar_width(120, 2, 4), 6);
        assert_eq!(vertical_bar_width(35, 2, 4), 3);
        assert_eq!(vertical_bar_width(4, 2, 4), 1);
        assert_eq!(vertical_bar_width(0, 0, 0), 1);
    }

    #[test]
    fn scaling_keeps_four_decimals() {
        assert_eq!(scaled(0.7502), 7502);
        assert_eq!(scaled(1.0), 10_000);
        assert_eq!(scaled(-0.5), 0);
    }
}
