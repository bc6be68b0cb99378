//! Interactive terminal front-end for `grantview`.
//!
//! This crate contains the full TUI application: the launch builder, the
//! event loop, rendering, state management, and the widgets and themes that
//! make up the grant explorer.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use app::App;
pub use builder::{Launch, SessionSummary};
pub use config::UiLabels;
pub use input::SearchInput;
pub use runtime::run;
pub use style::{StyleConfig, Theme, builtin_themes, default_theme};
