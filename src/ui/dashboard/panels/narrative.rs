//! Text panels: the business impact breakdown, rationale and feature cards,
//! and the preprocessing steps.

use super::{PanelError, panel_block};
use crate::report::DatasetRegistry;
use crate::report::records::CellKind;
use crate::ui::dashboard::copy::{self, TextBlock};
use crate::ui::format::thousands;
use crate::ui::palette::{ColorToken, cell_color};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactItem {
    pub kind: CellKind,
    /// e.g. `"✓ True Positives (108)"`.
    pub heading: String,
    pub description: &'static str,
    pub amount: String,
    pub assumption: Option<String>,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactPanel {
    pub title: &'static str,
    pub columns: [[ImpactItem; 2]; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardList {
    pub title: &'static str,
    pub cards: &'static [TextBlock],
    pub columns: u16,
    pub accent: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepList {
    pub title: &'static str,
    pub steps: &'static [(&'static str, &'static str)],
}

// Gains on the left, costs on the right.
const IMPACT_COLUMNS: [[CellKind; 2]; 2] = [
    [CellKind::TruePositive, CellKind::TrueNegative],
    [CellKind::FalseNegative, CellKind::FalsePositive],
];

fn impact_item(registry: &DatasetRegistry, kind: CellKind) -> Result<ImpactItem, PanelError> {
    let count = registry
        .confusion_count(kind)
        .ok_or(PanelError::MissingCell(kind))?;
    let statement = registry
        .impact_statement(kind)
        .ok_or(PanelError::MissingImpact(kind))?;
    let (noun, description) = copy::impact_copy(kind);
    let mark = if kind.is_correct() { "✓" } else { "✗" };
    Ok(ImpactItem {
        kind,
        heading: format!("{} {} ({})", mark, noun, thousands(count)),
        description,
        amount: statement.amount.clone(),
        assumption: statement.assumption.clone(),
        color: cell_color(kind),
    })
}

pub fn impact_breakdown(registry: &DatasetRegistry) -> Result<ImpactPanel, PanelError> {
    let [[a, b], [c, d]] = IMPACT_COLUMNS;
    Ok(ImpactPanel {
        title: "Business Impact Calculator",
        columns: [
            [impact_item(registry, a)?, impact_item(registry, b)?],
            [impact_item(registry, c)?, impact_item(registry, d)?],
        ],
    })
}

pub fn model_rationale() -> CardList {
    CardList {
        title: "Why Weighted MLP Wins",
        cards: &copy::RATIONALE,
        columns: 1,
        accent: ColorToken::Indigo,
    }
}

pub fn engineered_features() -> CardList {
    CardList {
        title: "Feature Engineering Highlights",
        cards: &copy::ENGINEERED_FEATURES,
        columns: 2,
        accent: ColorToken::Amber,
    }
}

pub fn preprocessing_pipeline() -> StepList {
    StepList {
        title: "Data Preprocessing Pipeline",
        steps: &copy::PIPELINE_STEPS,
    }
}

fn split_even(area: Rect, direction: Direction, parts: u16) -> Vec<Rect> {
    let parts = parts.max(1) as u32;
    Layout::default()
        .direction(direction)
        .constraints((0..parts).map(|_| Constraint::Ratio(1, parts)))
        .split(area)
        .to_vec()
}

pub fn render_impact(f: &mut Frame, area: Rect, panel: &ImpactPanel) {
    let block = panel_block(panel.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = split_even(inner, Direction::Horizontal, 2);
    for (items, column) in panel.columns.iter().zip(columns) {
        for (item, cell) in items.iter().zip(split_even(column, Direction::Vertical, 2)) {
            let color = item.color.color();
            let mut lines = vec![
                Line::from(Span::styled(
                    item.heading.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    item.description,
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    item.amount.as_str(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
            ];
            if let Some(assumption) = &item.assumption {
                lines.push(Line::from(Span::styled(
                    assumption.as_str(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            let frame = Block::default()
                .borders(Borders::LEFT)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(color));
            f.render_widget(
                Paragraph::new(lines).block(frame).wrap(Wrap { trim: true }),
                cell,
            );
        }
    }
}

pub fn render_cards(f: &mut Frame, area: Rect, list: &CardList) {
    let block = panel_block(list.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = list.columns.max(1) as usize;
    let rows = list.cards.len().div_ceil(columns) as u16;
    let color = list.accent.color();
    for (row_cards, row_area) in list
        .cards
        .chunks(columns)
        .zip(split_even(inner, Direction::Vertical, rows))
    {
        for (card, cell) in row_cards
            .iter()
            .zip(split_even(row_area, Direction::Horizontal, list.columns))
        {
            let mut lines = vec![Line::from(Span::styled(
                card.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))];
            if let Some(formula) = card.formula {
                lines.push(Line::from(Span::styled(
                    formula,
                    Style::default().fg(Color::LightYellow),
                )));
            }
            lines.push(Line::from(Span::styled(
                card.body,
                Style::default().fg(Color::Gray),
            )));
            let frame = Block::default()
                .borders(Borders::LEFT)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(color));
            f.render_widget(
                Paragraph::new(lines).block(frame).wrap(Wrap { trim: true }),
                cell,
            );
        }
    }
}

pub fn render_steps(f: &mut Frame, area: Rect, list: &StepList) {
    let block = panel_block(list.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::with_capacity(list.steps.len() * 2);
    for (i, (name, detail)) in list.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. ", i + 1),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                *name,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", detail),
            Style::default().fg(Color::Gray),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
