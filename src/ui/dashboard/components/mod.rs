//! Dashboard component modules
//!
//! The chrome around the panels: header, tab bar and footer.

pub mod footer;
pub mod header;
pub mod nav;
