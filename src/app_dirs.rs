//! Resolve configuration and data directories for `grantview`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "grantview";
const APPLICATION: &str = "grantview";

const CONFIG_DIR_ENV: &str = "GRANTVIEW_CONFIG_DIR";
const DATA_DIR_ENV: &str = "GRANTVIEW_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for grantview"))
}

/// Resolve an override directory from an environment variable; empty counts
/// as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for the log file and other state.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_override_falls_through() {
		assert_eq!(dir_from_env("GRANTVIEW_TEST_DIR_THAT_IS_NEVER_SET"), None);
	}

	#[test]
	fn directories_resolve() {
		assert!(get_config_dir().is_ok());
		assert!(get_data_dir().is_ok());
	}
}
