//! Tab bar

use crate::ui::tabs::TabId;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};
use strum::IntoEnumIterator;

/// One entry per tab in fixed order, the active one highlighted.
pub fn render_nav(f: &mut Frame, area: Rect, active: TabId, compact: bool) {
    let titles: Vec<String> = TabId::iter()
        .map(|t| format!("{} {}", t.index() + 1, t.label()))
        .collect();

    let mut tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    if !compact {
        tabs = tabs.block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    }
    f.render_widget(tabs, area);
}
