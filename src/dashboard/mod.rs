//! Dashboard module
//!
//! Provides the overview page: summary cards, the action bar, charts and the
//! expense table.

mod cards;
mod charts;
mod handlers;

pub use handlers::{get_dashboard_content, get_dashboard_page};
