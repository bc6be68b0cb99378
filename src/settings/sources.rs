use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use grantview::app_dirs;

use crate::cli::CliArgs;

/// `GRANTVIEW__DATA__PATH` sets `[data] path`, and so on.
const ENV_PREFIX: &str = "grantview";
const ENV_SEPARATOR: &str = "__";

/// One configuration file and whether its absence is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FileLayer {
	pub(super) path: PathBuf,
	pub(super) required: bool,
}

/// Files in merge order: the per-user `config.toml`, the working directory
/// files, then every `--config` file. Later layers win.
pub(super) fn file_layers(cli: &CliArgs) -> Vec<FileLayer> {
	let optional = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	optional
		.into_iter()
		.map(|path| FileLayer {
			path,
			required: false,
		})
		.chain(cli.config.iter().map(|path| FileLayer {
			path: path.clone(),
			required: true,
		}))
		.collect()
}

/// Merge the file layers, with `GRANTVIEW__SECTION__KEY` variables on top.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let files = file_layers(cli);
	let mut builder = Config::builder();
	for layer in &files {
		builder = builder.add_source(File::from(layer.path.as_path()).required(layer.required));
	}
	builder
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator(ENV_SEPARATOR)
				.try_parsing(true),
		)
		.build()
		.with_context(|| {
			let listed: Vec<String> = files
				.iter()
				.filter(|layer| layer.required)
				.map(|layer| layer.path.display().to_string())
				.collect();
			if listed.is_empty() {
				"failed to read configuration".to_string()
			} else {
				format!("failed to read configuration from {}", listed.join(", "))
			}
		})
}

/// Optional grantview files: `<config dir>/config.toml`, then
/// `./.grantview.toml` and `./grantview.toml`.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files: Vec<PathBuf> = app_dirs::get_config_dir()
		.map(|dir| dir.join("config.toml"))
		.into_iter()
		.collect();
	if let Ok(cwd) = env::current_dir() {
		files.extend([".grantview.toml", "grantview.toml"].map(|name| cwd.join(name)));
	}
	files
}
