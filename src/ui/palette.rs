//! Color tokens and the fixed mappings from data attributes to them.

use crate::report::records::{AccentKind, CellKind};
use ratatui::prelude::Color;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::EnumIter)]
pub enum ColorToken {
    Blue,
    Red,
    Green,
    Amber,
    Violet,
    Orange,
    Purple,
    Indigo,
}

impl ColorToken {
    pub fn color(self) -> Color {
        match self {
            ColorToken::Blue => Color::Rgb(59, 130, 246),
            ColorToken::Red => Color::Rgb(239, 68, 68),
            ColorToken::Green => Color::Rgb(16, 185, 129),
            ColorToken::Amber => Color::Rgb(245, 158, 11),
            ColorToken::Violet => Color::Rgb(139, 92, 246),
            ColorToken::Orange => Color::Rgb(234, 88, 12),
            ColorToken::Purple => Color::Rgb(147, 51, 234),
            ColorToken::Indigo => Color::Rgb(99, 102, 241),
        }
    }
}

/// Categorical palette, assigned by position.
pub const SERIES_PALETTE: [ColorToken; 5] = [
    ColorToken::Blue,
    ColorToken::Red,
    ColorToken::Green,
    ColorToken::Amber,
    ColorToken::Violet,
];

/// Colors of the accuracy, precision, recall and f1 series, in that order.
pub const METRIC_SERIES: [ColorToken; 4] = [
    ColorToken::Blue,
    ColorToken::Green,
    ColorToken::Red,
    ColorToken::Amber,
];

pub fn palette_color(index: usize) -> ColorToken {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Bar color for a feature; engineered features get the second accent.
pub fn feature_color(is_engineered: bool) -> ColorToken {
    if is_engineered {
        ColorToken::Amber
    } else {
        ColorToken::Blue
    }
}

pub fn accent_color(accent: AccentKind) -> ColorToken {
    match accent {
        AccentKind::Success => ColorToken::Green,
        AccentKind::Danger => ColorToken::Red,
        AccentKind::Info => ColorToken::Blue,
        AccentKind::Highlight => ColorToken::Purple,
    }
}

pub fn accent_icon(accent: AccentKind) -> &'static str {
    match accent {
        AccentKind::Success => "$",
        AccentKind::Danger => "⚠",
        AccentKind::Info => "↗",
        AccentKind::Highlight => "◆",
    }
}

pub fn cell_color(kind: CellKind) -> ColorToken {
    match kind {
        CellKind::TrueNegative => ColorToken::Green,
        CellKind::FalsePositive => ColorToken::Red,
        CellKind::FalseNegative => ColorToken::Orange,
        CellKind::TruePositive => ColorToken::Blue,
    }
}
