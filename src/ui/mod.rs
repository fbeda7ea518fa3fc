// Module declarations
mod app;
pub mod dashboard;
pub mod format;
pub mod palette;
pub mod tabs;
// Re-exports for external use
pub use app::{App, UIConfig, run};
