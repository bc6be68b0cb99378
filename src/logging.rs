//! File-backed `tracing` setup. The terminal belongs to the TUI, so events go
//! to `grantview.log` in the data directory.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app_dirs;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "GRANTVIEW_LOG";

pub const LOG_FILE_NAME: &str = "grantview.log";

/// Build the filter: `GRANTVIEW_LOG` wins over `default_directive`.
pub fn filter(default_directive: &str) -> Result<EnvFilter> {
	match EnvFilter::try_from_env(LOG_ENV) {
		Ok(filter) => Ok(filter),
		Err(_) => EnvFilter::try_new(default_directive)
			.with_context(|| format!("invalid log filter `{default_directive}`")),
	}
}

/// Install the global subscriber writing to the data directory's log file.
pub fn initialize(default_directive: &str) -> Result<PathBuf> {
	let dir = app_dirs::get_data_dir()?;
	initialize_in(&dir, default_directive)
}

/// Install the global subscriber writing to `dir/grantview.log`.
pub fn initialize_in(dir: &Path, default_directive: &str) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::registry()
		.with(filter(default_directive)?)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(Mutex::new(file))
				.with_ansi(false),
		)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_malformed_directives() {
		if std::env::var_os(LOG_ENV).is_none() {
			assert!(filter("grantview=notalevel").is_err());
			assert!(filter("debug,grantview_core=trace").is_ok());
		}
	}

	#[test]
	fn writes_to_the_log_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = initialize_in(dir.path(), "info").unwrap();
		tracing::info!("hello from the test");
		assert_eq!(path, dir.path().join(LOG_FILE_NAME));
		assert!(fs::read_to_string(&path).unwrap().contains("hello from the test"));
	}
}
