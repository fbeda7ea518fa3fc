//! Main application state and UI loop
//!
//! Contains the App struct and the key handling that drives tab selection

use crate::consts::cli_consts::KEY_POLL_INTERVAL_MS;
use crate::report::DatasetRegistry;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::tabs::TabId;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The dashboard being displayed.
    state: DashboardState,
}

impl App {
    pub fn new(registry: DatasetRegistry, ui_config: UIConfig) -> Self {
        Self {
            state: DashboardState::new(registry, ui_config),
        }
    }

    /// Applies one key event to the dashboard.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Tab | KeyCode::Right => self.state.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.state.prev_tab(),
            KeyCode::Char(c) => {
                if let Some(tab) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(TabId::from_index)
                {
                    self.state.select_tab(tab);
                }
            }
            _ => {}
        }
        KeyOutcome::Continue
    }
}

/// Runs the dashboard in a loop until the user quits.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(KEY_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == KeyOutcome::Quit {
                    info!("dashboard closed from tab {}", app.state.active_tab());
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builtin;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn app() -> App {
        let registry = DatasetRegistry::from_document(builtin::document()).unwrap();
        App::new(registry, UIConfig::new(false))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digit_keys_select_tabs_directly() {
        let mut app = app();
        assert_eq!(app.handle_key(press(KeyCode::Char('3'))), KeyOutcome::Continue);
        assert_eq!(app.state.active_tab(), TabId::Business);
        app.handle_key(press(KeyCode::Char('1')));
        assert_eq!(app.state.active_tab(), TabId::Overview);
    }

    #[test]
    fn out_of_range_digits_are_ignored() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Char('0')));
        app.handle_key(press(KeyCode::Char('9')));
        assert_eq!(app.state.active_tab(), TabId::Model);
    }

    #[test]
    fn arrows_and_tab_cycle() {
        let mut app = app();
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.state.active_tab(), TabId::Business);
        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::BackTab));
        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.state.active_tab(), TabId::Features);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), KeyOutcome::Quit);
        assert_eq!(app.handle_key(press(KeyCode::Esc)), KeyOutcome::Quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(app.handle_key(release), KeyOutcome::Continue);
        assert_eq!(app.state.active_tab(), TabId::Overview);
    }
}
