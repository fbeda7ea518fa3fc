//! Dashboard state management
//!
//! Holds the injected registry and the single piece of mutable state, the
//! active tab.

use super::views::{PanelId, panels_for};
use crate::report::DatasetRegistry;
use crate::ui::app::UIConfig;
use crate::ui::tabs::TabId;
use log::debug;

#[derive(Debug)]
pub struct DashboardState {
    /// Validated report data, shared by every panel.
    registry: DatasetRegistry,
    /// Currently selected tab.
    active_tab: TabId,
    /// Whether to paint the dark background behind the layout.
    pub with_background_color: bool,
}

impl DashboardState {
    /// Starts on the overview tab.
    pub fn new(registry: DatasetRegistry, ui_config: UIConfig) -> Self {
        Self {
            registry,
            active_tab: TabId::default(),
            with_background_color: ui_config.with_background_color,
        }
    }

    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// Selects `tab`. Selecting the active tab again changes nothing.
    pub fn select_tab(&mut self, tab: TabId) {
        if tab != self.active_tab {
            debug!("tab {} -> {}", self.active_tab, tab);
            self.active_tab = tab;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    /// Panels of the active tab, in layout order.
    pub fn mounted_panels(&self) -> Vec<PanelId> {
        panels_for(self.active_tab)
    }
}
