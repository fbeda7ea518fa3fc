//! Stat cards: the KPI grid on the overview and the net-benefit card.

use super::{PanelError, panel_block};
use crate::report::DatasetRegistry;
use crate::ui::dashboard::copy;
use crate::ui::palette::{ColorToken, accent_color, accent_icon};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub icon: &'static str,
    pub label: String,
    pub value: String,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatGrid {
    pub title: String,
    pub cards: Vec<StatCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCard {
    pub title: String,
    pub card: StatCard,
    pub caption: &'static str,
}

pub fn kpi_cards(registry: &DatasetRegistry) -> Result<StatGrid, PanelError> {
    let metrics = registry.business_metrics();
    if metrics.is_empty() {
        return Err(PanelError::EmptySlice("business metrics"));
    }
    Ok(StatGrid {
        title: "Key Metrics".to_string(),
        cards: metrics
            .iter()
            .map(|m| StatCard {
                icon: accent_icon(m.accent),
                label: m.label.clone(),
                value: m.display_value.clone(),
                color: accent_color(m.accent),
            })
            .collect(),
    })
}

pub fn net_benefit(registry: &DatasetRegistry) -> HeroCard {
    let net = &registry.impact().net_benefit;
    HeroCard {
        title: "Net Benefit".to_string(),
        card: StatCard {
            icon: accent_icon(net.accent),
            label: net.label.clone(),
            value: net.display_value.clone(),
            color: accent_color(net.accent),
        },
        caption: copy::NET_BENEFIT_CAPTION,
    }
}

fn card_lines(card: &StatCard) -> Vec<Line<'_>> {
    vec![
        Line::from(Span::styled(
            card.icon,
            Style::default()
                .fg(card.color.color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.label.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            card.value.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

pub fn render_grid(f: &mut Frame, area: Rect, grid: &StatGrid) {
    let block = panel_block(&grid.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Cards are fixed-size: one equal share each.
    let count = grid.cards.len().max(1) as u32;
    let constraints: Vec<Constraint> = grid
        .cards
        .iter()
        .map(|_| Constraint::Ratio(1, count))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (card, column) in grid.cards.iter().zip(columns.iter()) {
        let card_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(card.color.color()));
        f.render_widget(Paragraph::new(card_lines(card)).block(card_block), *column);
    }
}

pub fn render_hero(f: &mut Frame, area: Rect, hero: &HeroCard) {
    let color = hero.card.color.color();
    let block = Block::default()
        .title(hero.title.as_str())
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", hero.card.icon), Style::default().fg(color)),
            Span::styled(
                hero.card.label.as_str(),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            hero.card.value.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hero.caption,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builtin;

    fn registry() -> DatasetRegistry {
        DatasetRegistry::from_document(builtin::document()).unwrap()
    }

    #[test]
    fn one_card_per_business_metric_passed_through_verbatim() {
        let grid = kpi_cards(&registry()).unwrap();
        let values: Vec<&str> = grid.cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["$324,000", "$80,100", "78.34%", "108"]);
        assert_eq!(grid.cards[1].color, ColorToken::Red);
    }

    #[test]
    fn net_benefit_is_the_opaque_pipeline_figure() {
        let hero = net_benefit(&registry());
        assert_eq!(hero.card.label, "Total Net Benefit");
        assert_eq!(hero.card.value, "$239,750");
    }
}
