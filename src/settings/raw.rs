use std::path::PathBuf;

use anyhow::{Result, ensure};
use grantview_core::{DEFAULT_DATA_PATH, Field, FilterCriteria, SortDirection, SortSpec, User};

use serde::Deserialize;

use super::resolved::{IdentitySettings, ResolvedConfig};
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	export: ExportSection,
	ui: UiSection,
	identity: IdentitySection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ExportSection {
	directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct IdentitySection {
	enabled: Option<bool>,
	/// `[identity.account]`: the account the login flow signs in as.
	account: Option<User>,
	resume_session: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.data.path = Some(path);
		}
		if let Some(dir) = cli.export_dir.clone() {
			self.export.directory = Some(dir);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if cli.no_auth {
			self.identity.enabled = Some(false);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Validate and fill defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		if let Some(name) = &self.ui.theme {
			ensure!(
				grantview_tui::style::by_name(name).is_some(),
				"unknown theme `{name}`; available themes: {}",
				grantview_tui::style::names().join(", ")
			);
		}

		let account = self
			.identity
			.account
			.filter(|account| !account.email.trim().is_empty());

		let criteria = FilterCriteria {
			search_text: self.ui.initial_query.unwrap_or_default(),
			category: cli.category.clone().unwrap_or_default(),
			status: cli.status.clone().unwrap_or_default(),
			agency: cli.agency.clone().unwrap_or_default(),
		};

		let sort = match &cli.sort {
			Some(column) => SortSpec {
				field: Some(sort_key(column)),
				direction: if cli.descending {
					SortDirection::Descending
				} else {
					SortDirection::Ascending
				},
			},
			None => SortSpec::default(),
		};

		Ok(ResolvedConfig {
			data_path: self
				.data
				.path
				.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
			export_dir: self
				.export
				.directory
				.unwrap_or_else(|| PathBuf::from(".")),
			theme: self.ui.theme,
			criteria,
			sort,
			identity: IdentitySettings {
				enabled: self.identity.enabled.unwrap_or(true),
				account,
				resume_session: self.identity.resume_session.unwrap_or(false),
			},
			log_level: self.logging.level.unwrap_or_else(|| "info".to_string()),
			export_only: cli.export_only,
		})
	}
}

/// Map a column label or source key to the source key; anything else is
/// taken as a raw key.
fn sort_key(column: &str) -> String {
	let column = column.trim();
	Field::TABLE
		.iter()
		.find(|field| {
			field.label().eq_ignore_ascii_case(column) || field.key().eq_ignore_ascii_case(column)
		})
		.map(|field| field.key().to_string())
		.unwrap_or_else(|| column.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sort_key_matches_labels_and_keys() {
		assert_eq!(sort_key("Close Date"), "CLOSE DATE");
		assert_eq!(sort_key("opportunity title"), "OPPORTUNITY TITLE");
		assert_eq!(sort_key(" Custom Column "), "Custom Column");
	}
}
