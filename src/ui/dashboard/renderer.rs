//! Dashboard main renderer

use super::components::{footer, header, nav};
use super::panels;
use super::state::DashboardState;
use super::views::{PanelId, layout_for};
use crate::consts::cli_consts::COMPACT_CHROME_HEIGHT;
use crate::report::DatasetRegistry;
use crate::ui::tabs::TabId;

use log::warn;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let compact = f.area().height < COMPACT_CHROME_HEIGHT;
    let (margin, chrome) = if compact {
        (0, [1, 1, 1])
    } else {
        (1, [3, 2, 4])
    };
    let [header_rows, nav_rows, footer_rows] = chrome;

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_rows),
            Constraint::Length(nav_rows),
            Constraint::Fill(1),
            Constraint::Length(footer_rows),
        ])
        .margin(margin)
        .split(f.area());

    header::render_header(f, main_chunks[0], compact);
    nav::render_nav(f, main_chunks[1], state.active_tab(), compact);
    render_tab(f, main_chunks[2], state.active_tab(), state.registry());
    footer::render_footer(f, main_chunks[3], compact);
}

/// Lays out the rows of `tab` and mounts each of its panels.
fn render_tab(f: &mut Frame, area: Rect, tab: TabId, registry: &DatasetRegistry) {
    let rows = layout_for(tab);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|r| r.height))
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let count = row.panels.len().max(1) as u32;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(row.panels.iter().map(|_| Constraint::Ratio(1, count)))
            .split(*row_area);
        for (panel, cell) in row.panels.iter().zip(cells.iter()) {
            render_panel(f, *cell, *panel, registry);
        }
    }
}

fn render_panel(f: &mut Frame, area: Rect, panel: PanelId, registry: &DatasetRegistry) {
    match panels::build(panel, registry) {
        Ok(view) => panels::render(f, area, &view),
        Err(e) => {
            warn!("panel {:?} unavailable: {}", panel, e);
            panels::render_error(f, area, panel, &e);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::report::{DatasetRegistry, builtin};
    use crate::session::headless_mode::render_snapshot;
    use crate::ui::dashboard::views::panels_for;
    use crate::ui::tabs::TabId;
    use strum::IntoEnumIterator;

    fn registry() -> DatasetRegistry {
        DatasetRegistry::from_document(builtin::document()).unwrap()
    }

    #[test]
    fn each_tab_shows_only_its_own_panels() {
        let registry = registry();
        for tab in TabId::iter() {
            let text = render_snapshot(&registry, tab, 140, 60).unwrap();
            for shown in panels_for(tab) {
                assert!(text.contains(shown.title()), "{tab}: missing {shown:?}");
            }
            for other in TabId::iter().filter(|t| *t != tab) {
                for hidden in panels_for(other) {
                    assert!(
                        !text.contains(hidden.title()),
                        "{tab}: {hidden:?} should not be mounted"
                    );
                }
            }
        }
    }

    #[test]
    fn every_panel_of_a_tab_fits_common_terminal_sizes() {
        let registry = registry();
        for (width, height) in [(120, 40), (80, 24)] {
            for tab in TabId::iter() {
                let text = render_snapshot(&registry, tab, width, height).unwrap();
                for shown in panels_for(tab) {
                    assert!(
                        text.contains(shown.title()),
                        "{width}x{height} {tab}: {shown:?} has no visible area"
                    );
                }
                assert!(text.contains("[Q] Quit"), "{width}x{height} {tab}: no key hints");
            }

            let features = render_snapshot(&registry, TabId::Features, width, height).unwrap();
            for entry in registry.feature_importance() {
                assert!(
                    features.contains(&entry.name),
                    "{width}x{height}: feature {} not drawn",
                    entry.name
                );
            }

            let business = render_snapshot(&registry, TabId::Business, width, height).unwrap();
            assert!(business.contains("$239,750"));
            assert!(business.contains("Class-Weighted Loss Function"));
        }
    }

    #[test]
    fn roomy_terminal_keeps_readouts_and_full_pipeline() {
        let registry = registry();
        let model = render_snapshot(&registry, TabId::Model, 120, 40).unwrap();
        assert!(model.contains("Threshold 0.50  precision 0.52  recall 0.78  f1 0.62"));
        assert!(model.contains("Epoch 20  Training Loss 0.31  Validation Loss 0.38"));

        let features = render_snapshot(&registry, TabId::Features, 120, 40).unwrap();
        assert!(features.contains("Stratified Split"));
        assert!(features.contains("End-to-end ML pipeline"));
    }

    #[test]
    fn chrome_is_shared_by_every_tab() {
        let registry = registry();
        for tab in TabId::iter() {
            let text = render_snapshot(&registry, tab, 140, 60).unwrap();
            assert!(text.contains("PyTorch Customer Churn Prediction"));
            assert!(text.contains("Overview"));
            assert!(text.contains("Features"));
            assert!(text.contains("[Q] Quit"));
        }
    }

    #[test]
    fn failed_panel_is_contained_to_its_area() {
        let mut doc = builtin::document();
        for feature in &mut doc.feature_importance {
            feature.importance = 0.0;
        }
        let registry = DatasetRegistry::from_document(doc).unwrap();
        let text = render_snapshot(&registry, TabId::Features, 140, 60).unwrap();
        assert!(text.contains("Unavailable"));
        assert!(text.contains("Feature Engineering Highlights"));
        assert!(text.contains("Data Preprocessing Pipeline"));
    }
}
