//! Dashboard header component
//!
//! Renders the title and subtitle; compact mode keeps the title only

use crate::ui::dashboard::copy;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, compact: bool) {
    let title = Line::from(Span::styled(
        copy::TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    if compact {
        f.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
        return;
    }

    let lines = vec![
        title,
        Line::from(Span::styled(copy::SUBTITLE, Style::default().fg(Color::Gray))),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(header, area);
}
