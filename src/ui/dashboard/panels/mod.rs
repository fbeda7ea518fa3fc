//! Chart panels
//!
//! Every panel is built in two steps: a pure `build` from registry slices to a
//! view model, then a `render` of that model into a frame area. A panel that
//! fails to build only replaces its own area with an error frame.

pub mod bar;
pub mod confusion;
pub mod line;
pub mod narrative;
pub mod pie;
pub mod stat_grid;

use super::views::PanelId;
use crate::report::DatasetRegistry;
use crate::report::records::CellKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PanelError {
    #[error("{0} has no entries")]
    EmptySlice(&'static str),

    #[error("confusion cell {0} is missing")]
    MissingCell(CellKind),

    #[error("impact statement for {0} is missing")]
    MissingImpact(CellKind),

    #[error("axis range of {0} is empty")]
    DegenerateDomain(&'static str),
}

/// Fully resolved content of one mounted panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Bar(bar::BarPanel),
    Line(line::LinePanel),
    Pie(pie::PiePanel),
    StatGrid(stat_grid::StatGrid),
    Hero(stat_grid::HeroCard),
    Confusion(confusion::ConfusionGrid),
    Impact(narrative::ImpactPanel),
    Cards(narrative::CardList),
    Steps(narrative::StepList),
}

/// Builds the view model of `panel` from the registry.
pub fn build(panel: PanelId, registry: &DatasetRegistry) -> Result<PanelView, PanelError> {
    Ok(match panel {
        PanelId::KpiCards => PanelView::StatGrid(stat_grid::kpi_cards(registry)?),
        PanelId::ClassDistribution => PanelView::Pie(pie::class_distribution(registry)?),
        PanelId::ModelComparison => PanelView::Bar(bar::model_comparison(registry)?),
        PanelId::TrainingCurve => PanelView::Line(line::training_curve(registry)?),
        PanelId::ThresholdSweep => PanelView::Line(line::threshold_sweep(registry)?),
        PanelId::ConfusionGrid => PanelView::Confusion(confusion::confusion_grid(registry)?),
        PanelId::ImpactBreakdown => PanelView::Impact(narrative::impact_breakdown(registry)?),
        PanelId::NetBenefit => PanelView::Hero(stat_grid::net_benefit(registry)),
        PanelId::ModelRationale => PanelView::Cards(narrative::model_rationale()),
        PanelId::FeatureImportance => PanelView::Bar(bar::feature_importance(registry)?),
        PanelId::EngineeredFeatures => PanelView::Cards(narrative::engineered_features()),
        PanelId::PreprocessingPipeline => PanelView::Steps(narrative::preprocessing_pipeline()),
    })
}

pub fn render(f: &mut Frame, area: Rect, view: &PanelView) {
    match view {
        PanelView::Bar(p) => bar::render(f, area, p),
        PanelView::Line(p) => line::render(f, area, p),
        PanelView::Pie(p) => pie::render(f, area, p),
        PanelView::StatGrid(p) => stat_grid::render_grid(f, area, p),
        PanelView::Hero(p) => stat_grid::render_hero(f, area, p),
        PanelView::Confusion(p) => confusion::render(f, area, p),
        PanelView::Impact(p) => narrative::render_impact(f, area, p),
        PanelView::Cards(p) => narrative::render_cards(f, area, p),
        PanelView::Steps(p) => narrative::render_steps(f, area, p),
    }
}

/// Frame drawn in place of a panel whose data could not be bound.
pub fn render_error(f: &mut Frame, area: Rect, panel: PanelId, error: &PanelError) {
    let block = Block::default()
        .title(panel.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::uniform(1));
    let body = Paragraph::new(format!("Unavailable: {}", error))
        .style(Style::default().fg(Color::LightRed))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(body, area);
}

/// Standard rounded panel frame.
pub(crate) fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}
