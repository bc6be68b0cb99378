//! Core application state and behavior for the grant explorer.
//!
//! The [`App`] type aggregates the explorer, the access gate and UI state.
//! Supporting modules partition the implementation: actions (key handling),
//! session (identity events, data loading, notices), results (row
//! selection) and rendering.

mod actions;
mod render;
mod results;
mod session;
mod state;


pub(crate) use session::{DataState, NOTICE_TTL};
pub use state::App;
pub(crate) use state::{Focus, Screen};
