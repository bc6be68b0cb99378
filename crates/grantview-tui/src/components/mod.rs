//! UI building blocks shared across rendering and state modules.

/// Exact-match selector row.
pub mod filters;
/// Notice and key-hint line.
pub mod notice;
/// Page summary and buttons.
pub mod pagination;
/// Search input row.
pub mod prompt;
/// Table row construction.
pub mod rows;
/// Table rendering and configuration.
pub mod tables;
/// Title bar and whole-screen panels.
pub mod views;

pub use filters::{FilterBarContext, render_filter_bar};
pub use notice::render_status_line;
pub use pagination::render_pagination;
pub use prompt::{InputContext, render_input};
pub use tables::{TableSpec, render_table};
pub use views::{render_load_error, render_loading, render_login, render_title_bar};
