//! Configuration loading and resolution.
//!
//! `load` layers the default config files, any `--config` files and
//! `GRANTVIEW__SECTION__KEY` environment variables, applies CLI overrides and
//! returns the validated [`ResolvedConfig`].

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};

pub(crate) use resolved::{IdentitySettings, ResolvedConfig};

use crate::cli::CliArgs;
use raw::RawConfig;
use sources::build_config;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
