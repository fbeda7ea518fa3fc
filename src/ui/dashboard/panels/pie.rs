//! Pie panel for the class distribution, drawn on a braille canvas.

use super::{PanelError, panel_block};
use crate::consts::cli_consts::PIE_SWEEP_STEP_DEG;
use crate::report::DatasetRegistry;
use crate::ui::format::{share_label, thousands};
use crate::ui::palette::{ColorToken, palette_color};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};

#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub label: String,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PiePanel {
    pub title: String,
    pub segments: Vec<PieSegment>,
    pub caption: String,
}

pub fn class_distribution(registry: &DatasetRegistry) -> Result<PiePanel, PanelError> {
    let entries = registry.class_distribution();
    if entries.is_empty() {
        return Err(PanelError::EmptySlice("class distribution"));
    }
    let total: f64 = entries.iter().map(|e| e.percentage).sum();
    if total <= 0.0 {
        return Err(PanelError::DegenerateDomain("class distribution"));
    }

    let mut start = 0.0;
    let segments = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let sweep = e.percentage / total * 360.0;
            let segment = PieSegment {
                label: share_label(&e.label, e.percentage),
                start_deg: start,
                sweep_deg: sweep,
                color: palette_color(i),
            };
            start += sweep;
            segment
        })
        .collect();

    // Caption reads minority class first.
    let mut by_share: Vec<_> = entries.iter().collect();
    by_share.sort_by(|a, b| a.percentage.total_cmp(&b.percentage));
    let parts: Vec<String> = by_share
        .iter()
        .map(|e| {
            format!(
                "{}% {} ({})",
                e.percentage,
                e.label.to_lowercase(),
                thousands(e.count)
            )
        })
        .collect();
    let lead = match (by_share.first(), by_share.last()) {
        (Some(min), Some(max)) if max.percentage >= 1.5 * min.percentage => "Imbalanced dataset",
        _ => "Balanced dataset",
    };

    Ok(PiePanel {
        title: "Dataset Distribution".to_string(),
        segments,
        caption: format!("{}: {}", lead, parts.join(" vs ")),
    })
}

pub fn render(f: &mut Frame, area: Rect, panel: &PiePanel) {
    let block = panel_block(&panel.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(panel.segments.len() as u16),
            Constraint::Length(2),
        ])
        .split(inner);

    // Terminal cells are about twice as tall as wide.
    let canvas_area = chunks[0];
    let y_half = 1.1;
    let x_half = if canvas_area.height == 0 {
        y_half
    } else {
        y_half * canvas_area.width as f64 / (2.0 * canvas_area.height as f64)
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(|ctx| {
            for segment in &panel.segments {
                let color = segment.color.color();
                let end = segment.start_deg + segment.sweep_deg;
                let mut angle = segment.start_deg;
                while angle < end {
                    let rad = angle.to_radians();
                    ctx.draw(&CanvasLine::new(0.0, 0.0, rad.cos(), rad.sin(), color));
                    angle += PIE_SWEEP_STEP_DEG;
                }
            }
        });
    f.render_widget(canvas, canvas_area);

    let legend: Vec<Line> = panel
        .segments
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(s.color.color())),
                Span::styled(
                    s.label.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend).centered(), chunks[1]);
    f.render_widget(
        Paragraph::new(panel.caption.clone())
            .centered()
            .style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builtin;

    fn panel() -> PiePanel {
        let registry = DatasetRegistry::from_document(builtin::document()).unwrap();
        class_distribution(&registry).unwrap()
    }

    #[test]
    fn segments_follow_input_order_with_share_labels() {
        let labels: Vec<String> = panel().segments.into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["No Churn: 73.5%", "Churn: 26.5%"]);
    }

    #[test]
    fn segments_tile_the_full_circle() {
        let segments = panel().segments;
        assert_eq!(segments[0].start_deg, 0.0);
        assert!((segments[1].start_deg - segments[0].sweep_deg).abs() < 1e-9);
        let total: f64 = segments.iter().map(|s| s.sweep_deg).sum();
        assert!((total - 360.0).abs() < 1e-9);
        assert_eq!(segments[0].color, palette_color(0));
        assert_eq!(segments[1].color, palette_color(1));
    }

    #[test]
    fn caption_leads_with_minority_class() {
        assert_eq!(
            panel().caption,
            "Imbalanced dataset: 26.5% churn (1,869) vs 73.5% no churn (5,174)"
        );
    }
}
