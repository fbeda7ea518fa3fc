//! 2x2 confusion grid. Rows are the actual class, columns the predicted one.

use super::{PanelError, panel_block};
use crate::report::DatasetRegistry;
use crate::report::records::{CellKind, Outcome};
use crate::ui::dashboard::copy;
use crate::ui::format::thousands;
use crate::ui::palette::{ColorToken, cell_color};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionCard {
    pub kind: CellKind,
    pub count: u64,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionGrid {
    pub title: &'static str,
    pub rows: [[ConfusionCard; 2]; 2],
}

const ROW_ORDER: [Outcome; 2] = [Outcome::NoChurn, Outcome::Churn];

pub fn confusion_grid(registry: &DatasetRegistry) -> Result<ConfusionGrid, PanelError> {
    let card = |actual: Outcome, predicted: Outcome| -> Result<ConfusionCard, PanelError> {
        let kind = CellKind::of(predicted, actual);
        let count = registry
            .confusion_count(kind)
            .ok_or(PanelError::MissingCell(kind))?;
        Ok(ConfusionCard {
            kind,
            count,
            color: cell_color(kind),
        })
    };

    let [first, second] = ROW_ORDER;
    Ok(ConfusionGrid {
        title: copy::CONFUSION_TITLE,
        rows: [
            [card(first, first)?, card(first, second)?],
            [card(second, first)?, card(second, second)?],
        ],
    })
}

pub fn render(f: &mut Frame, area: Rect, grid: &ConfusionGrid) {
    let block = panel_block(grid.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(inner);

    for (row, row_area) in grid.rows.iter().zip(rows.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row_area);
        for (card, cell_area) in row.iter().zip(columns.iter()) {
            let color = card.color.color();
            let cell = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color));
            let lines = vec![
                Line::from(Span::styled(
                    thousands(card.count),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    card.kind.to_string(),
                    Style::default().fg(Color::White),
                )),
                Line::from(Span::styled(
                    format!(
                        "Predicted: {} | Actual: {}",
                        card.kind.predicted(),
                        card.kind.actual()
                    ),
                    Style::default().fg(Color::Gray),
                )),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(cell),
                *cell_area,
            );
        }
    }
}
