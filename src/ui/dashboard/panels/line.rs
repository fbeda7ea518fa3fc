//! Line panels: training loss by epoch and the threshold sweep.
//!
//! Points are plotted in the order the registry stores them. Below each chart
//! a readout lists every point with fixed precision.

use super::{PanelError, panel_block};
use crate::consts::cli_consts::{LINE_CHART_MIN_ROWS, LOSS_DECIMALS, THRESHOLD_DECIMALS};
use crate::report::DatasetRegistry;
use crate::report::records::ThresholdPoint;
use crate::ui::dashboard::copy;
use crate::ui::format::{ceil_tenth, fixed};
use crate::ui::palette::ColorToken;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Wrap};

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: ColorToken,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePanel {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Precision of x labels.
    pub x_decimals: usize,
    /// Precision of every y readout.
    pub decimals: usize,
    pub series: Vec<LineSeries>,
    pub caption: Option<&'static str>,
}

impl LinePanel {
    /// One line per x position: `"<x_title> <x>  <series> <y>  ..."`.
    pub fn readout(&self) -> Vec<String> {
        let Some(first) = self.series.first() else {
            return Vec::new();
        };
        first
            .points
            .iter()
            .enumerate()
            .map(|(i, (x, _))| {
                let mut row = format!("{} {}", self.x_title, fixed(*x, self.x_decimals));
                for s in &self.series {
                    if let Some((_, y)) = s.points.get(i) {
                        row.push_str(&format!("  {} {}", s.name, fixed(*y, self.decimals)));
                    }
                }
                row
            })
            .collect()
    }
}

/// Axis range spanning the first and last x as stored, widened if they coincide.
fn x_span(first: f64, last: f64) -> [f64; 2] {
    if (last - first).abs() < f64::EPSILON {
        [first - 1.0, last + 1.0]
    } else {
        [first, last]
    }
}

pub fn training_curve(registry: &DatasetRegistry) -> Result<LinePanel, PanelError> {
    let curve = registry.training_curve();
    let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
        return Err(PanelError::EmptySlice("training curve"));
    };
    let max_loss = curve
        .iter()
        .flat_map(|p| [p.train_loss, p.val_loss])
        .fold(0.0_f64, f64::max);
    let y_max = ceil_tenth(max_loss);
    if y_max <= 0.0 {
        return Err(PanelError::DegenerateDomain("training curve"));
    }

    Ok(LinePanel {
        title: format!("Training Progress ({} Epochs)", last.epoch),
        x_title: "Epoch",
        y_title: "Loss",
        x_bounds: x_span(first.epoch as f64, last.epoch as f64),
        y_bounds: [0.0, y_max],
        x_decimals: 0,
        decimals: LOSS_DECIMALS,
        series: vec![
            LineSeries {
                name: "Training Loss".to_string(),
                color: ColorToken::Blue,
                points: curve
                    .iter()
                    .map(|p| (p.epoch as f64, p.train_loss))
                    .collect(),
            },
            LineSeries {
                name: "Validation Loss".to_string(),
                color: ColorToken::Red,
                points: curve.iter().map(|p| (p.epoch as f64, p.val_loss)).collect(),
            },
        ],
        caption: Some(copy::ARCHITECTURE_NOTE),
    })
}

pub fn threshold_sweep(registry: &DatasetRegistry) -> Result<LinePanel, PanelError> {
    let sweep = registry.threshold_sweep();
    let (Some(first), Some(last)) = (sweep.first(), sweep.last()) else {
        return Err(PanelError::EmptySlice("threshold sweep"));
    };
    let series = |name: &str, color: ColorToken, pick: fn(&ThresholdPoint) -> f64| LineSeries {
        name: name.to_string(),
        color,
        points: sweep.iter().map(|p| (p.threshold, pick(p))).collect(),
    };

    Ok(LinePanel {
        title: "Threshold Tuning Analysis".to_string(),
        x_title: "Threshold",
        y_title: "Score",
        x_bounds: x_span(first.threshold, last.threshold),
        y_bounds: [0.0, 1.0],
        x_decimals: THRESHOLD_DECIMALS,
        decimals: THRESHOLD_DECIMALS,
        series: vec![
            series("precision", ColorToken::Green, |p| p.precision),
            series("recall", ColorToken::Red, |p| p.recall),
            series("f1", ColorToken::Amber, |p| p.f1),
        ],
        caption: Some(copy::THRESHOLD_NOTE),
    })
}

/// Rows left to the readout and caption once the chart has its minimum.
/// The caption goes first, then the readout, each all or nothing.
fn side_rows(height: u16, readout: u16, caption: u16) -> (u16, u16) {
    let spare = height.saturating_sub(LINE_CHART_MIN_ROWS);
    if spare >= readout + caption {
        (readout, caption)
    } else if spare >= caption {
        (0, caption)
    } else {
        (0, 0)
    }
}

pub fn render(f: &mut Frame, area: Rect, panel: &LinePanel) {
    let block = panel_block(&panel.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let readout = panel.readout();
    let caption_rows = if panel.caption.is_some() { 2 } else { 0 };
    let (readout_rows, caption_rows) =
        side_rows(inner.height, readout.len() as u16, caption_rows);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(readout_rows),
            Constraint::Length(caption_rows),
        ])
        .split(inner);

    let datasets: Vec<Dataset> = panel
        .series
        .iter()
        .map(|s| {
            Dataset::default()
                .name(s.name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(s.color.color()))
                .data(&s.points)
        })
        .collect();

    let [x_min, x_max] = panel.x_bounds;
    let [y_min, y_max] = panel.y_bounds;
    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(panel.x_title)
                .style(Style::default().fg(Color::Gray))
                .bounds(panel.x_bounds)
                .labels(vec![
                    Span::raw(fixed(x_min, panel.x_decimals)),
                    Span::raw(fixed((x_min + x_max) / 2.0, panel.x_decimals)),
                    Span::raw(fixed(x_max, panel.x_decimals)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(panel.y_title)
                .style(Style::default().fg(Color::Gray))
                .bounds(panel.y_bounds)
                .labels(vec![
                    Span::raw(fixed(y_min, 1)),
                    Span::raw(fixed((y_min + y_max) / 2.0, 1)),
                    Span::raw(fixed(y_max, 1)),
                ]),
        );
    f.render_widget(chart, chunks[0]);

    let rows: Vec<Line> = readout
        .into_iter()
        .map(|r| Line::from(Span::styled(r, Style::default().fg(Color::DarkGray))))
        .collect();
    if readout_rows > 0 {
        f.render_widget(Paragraph::new(rows), chunks[1]);
    }

    if let Some(caption) = panel.caption.filter(|_| caption_rows > 0) {
        let note = Paragraph::new(Line::from(Span::styled(
            caption,
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )))
        .wrap(Wrap { trim: true });
        f.render_widget(note, chunks[2]);
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
    fn training_curve_keeps_epoch_order() {
        let panel = training_curve(&registry()).unwrap();
        assert_eq!(panel.title, "Training Progress (20 Epochs)");
        assert_eq!(panel.x_bounds, [1.0, 20.0]);
        let xs: Vec<f64> = panel.series[0].points.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![1.0, 5.0, 10.0, 15.0, 20.0]);
        assert!((panel.y_bounds[1] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn threshold_sweep_uses_unit_domain_and_two_decimals() {
        let panel = threshold_sweep(&registry()).unwrap();
        assert_eq!(panel.y_bounds, [0.0, 1.0]);
        assert_eq!(panel.series.len(), 3);
        let readout = panel.readout();
        assert_eq!(readout.len(), 6);
        assert_eq!(
            readout[2],
            "Threshold 0.50  precision 0.52  recall 0.78  f1 0.62"
        );
    }

    #[test]
    fn readout_lists_points_in_stored_order() {
        let mut doc = builtin::document();
        doc.training_curve.truncate(2);
        let registry = DatasetRegistry::from_document(doc).unwrap();
        let panel = training_curve(&registry).unwrap();
        let readout = panel.readout();
        assert_eq!(
            readout,
            vec![
                "Epoch 1  Training Loss 0.52  Validation Loss 0.48",
                "Epoch 5  Training Loss 0.41  Validation Loss 0.43",
            ]
        );
    }

    #[test]
    fn readout_and_caption_give_way_to_the_chart() {
        assert_eq!(side_rows(15, 6, 2), (6, 2));
        assert_eq!(side_rows(10, 6, 2), (0, 2));
        assert_eq!(side_rows(6, 6, 2), (0, 0));
        assert_eq!(side_rows(0, 6, 0), (0, 0));
    }

    #[test]
    fn single_point_widens_x_axis() {
        assert_eq!(x_span(0.5, 0.5), [-0.5, 1.5]);
        assert_eq!(x_span(1.0, 20.0), [1.0, 20.0]);
    }
}
