//! Dashboard footer component
//!
//! Renders the dataset facts and key hints; compact mode keeps the key hints only

use crate::ui::dashboard::copy;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, compact: bool) {
    let keys = Line::from(Span::styled(
        copy::FOOTER_KEYS,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    if compact {
        f.render_widget(Paragraph::new(keys).alignment(Alignment::Center), area);
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            copy::FOOTER_FACTS,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            copy::FOOTER_TECHNIQUES,
            Style::default().fg(Color::DarkGray),
        )),
        keys,
    ];

    let footer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
