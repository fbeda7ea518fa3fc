//! Headless snapshot mode
//!
//! Renders one tab into an off-screen buffer and returns it as plain text.

use crate::report::DatasetRegistry;
use crate::ui::UIConfig;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::tabs::TabId;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use std::io;

/// Draws `tab` at `width` x `height` cells, one text line per row.
pub fn render_snapshot(
    registry: &DatasetRegistry,
    tab: TabId,
    width: u16,
    height: u16,
) -> io::Result<String> {
    let mut state = DashboardState::new(registry.clone(), UIConfig::new(false));
    state.select_tab(tab);

    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| render_dashboard(f, &state))?;
    Ok(buffer_text(terminal.backend().buffer()))
}

/// Cell symbols row by row, trailing blanks trimmed.
fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    let mut out = String::with_capacity(buffer.content().len() + buffer.area.height as usize);
    for row in buffer.content().chunks(width) {
        let line: String = row.iter().map(|cell| cell.symbol()).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builtin;

    fn registry() -> DatasetRegistry {
        DatasetRegistry::from_document(builtin::document()).unwrap()
    }

    #[test]
    fn snapshot_has_one_line_per_row() {
        let text = render_snapshot(&registry(), TabId::Overview, 120, 50).unwrap();
        assert_eq!(text.lines().count(), 50);
        assert!(text.lines().all(|l| l.chars().count() <= 120));
    }

    #[test]
    fn overview_snapshot_shows_kpis_and_shares() {
        let text = render_snapshot(&registry(), TabId::Overview, 140, 60).unwrap();
        assert!(text.contains("$324,000"));
        assert!(text.contains("Retention Rate"));
        assert!(text.contains("No Churn: 73.5%"));
        assert!(text.contains("Weighted MLP"));
    }

    #[test]
    fn model_snapshot_shows_confusion_counts() {
        let text = render_snapshot(&registry(), TabId::Model, 140, 60).unwrap();
        assert!(text.contains("Confusion Matrix (Weighted MLP @ 0.5)"));
        for count in ["950", "85", "267", "108"] {
            assert!(text.contains(count), "missing {count}");
        }
        assert!(text.contains("Threshold 0.50  precision 0.52  recall 0.78  f1 0.62"));
    }

    #[test]
    fn business_snapshot_shows_opaque_net_benefit() {
        let text = render_snapshot(&registry(), TabId::Business, 140, 60).unwrap();
        assert!(text.contains("$239,750"));
        assert!(text.contains("True Positives (108)"));
    }

    #[test]
    fn snapshots_are_deterministic() {
        let registry = registry();
        let a = render_snapshot(&registry, TabId::Features, 140, 60).unwrap();
        let b = render_snapshot(&registry, TabId::Features, 140, 60).unwrap();
        assert_eq!(a, b);
    }
}
