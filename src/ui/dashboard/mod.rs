//! Modular dashboard implementation
//!
//! Tab views, the panels they mount and the chrome around them

pub mod components;
pub mod copy;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod views;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
