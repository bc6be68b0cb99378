//! Shared plumbing for the `grantview` binary: directory discovery and
//! logging setup. The record pipeline lives in `grantview-core` and the
//! terminal front-end in `grantview-tui`.

pub mod app_dirs;
pub mod logging;
