use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use grantview_core::{ConfiguredIdentity, DisabledIdentity, Explorer, RecordStore};
use grantview_tui::Launch;

use crate::settings::{IdentitySettings, ResolvedConfig};

/// Runs the explorer either interactively or as a one-shot export.
pub(crate) struct ExplorerWorkflow {
	config: ResolvedConfig,
}

impl ExplorerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	/// Returns the paths of the CSV files written during the run.
	pub(crate) fn run(self) -> Result<Vec<PathBuf>> {
		if self.config.export_only {
			self.export_only().map(|path| vec![path])
		} else {
			self.interactive()
		}
	}

	fn export_only(self) -> Result<PathBuf> {
		let ResolvedConfig {
			data_path,
			export_dir,
			criteria,
			sort,
			..
		} = self.config;

		let store = RecordStore::load(&data_path)
			.with_context(|| format!("failed to load grant data from {}", data_path.display()))?;
		let mut explorer = Explorer::new(store);
		for dimension in grantview_core::FilterDimension::ALL {
			explorer.set_filter(dimension, criteria.value(dimension));
		}
		explorer.set_search(criteria.search_text);
		explorer.set_sort(sort);

		let path = explorer
			.write_export(&export_dir, Local::now().date_naive())
			.context("export failed")?;
		tracing::info!(path = %path.display(), rows = explorer.view().len(), "exported grants");
		Ok(path)
	}

	fn interactive(self) -> Result<Vec<PathBuf>> {
		let ResolvedConfig {
			data_path,
			export_dir,
			theme,
			criteria,
			sort,
			identity,
			..
		} = self.config;

		let mut launch = Launch::new(data_path)
			.with_export_dir(export_dir)
			.with_initial_criteria(criteria)
			.with_initial_sort(sort);
		if let Some(name) = theme {
			launch = launch.with_theme_name(&name);
		}
		launch = match identity {
			IdentitySettings {
				enabled: true,
				account,
				resume_session,
			} => launch.with_identity(ConfiguredIdentity::new(account, resume_session)),
			IdentitySettings { enabled: false, .. } => {
				launch.with_identity(DisabledIdentity::default())
			}
		};

		let summary = launch.run()?;
		Ok(summary.exports)
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use grantview_core::{FilterCriteria, SortSpec};

	use super::*;

	const DATA: &str = r#"[
		{"OPPORTUNITY NUMBER": "NSF-1", "OPPORTUNITY TITLE": "Rural broadband", "OPPORTUNITY STATUS": "Posted", "AWARD CEILING": 500000},
		{"OPPORTUNITY NUMBER": "NSF-2", "OPPORTUNITY TITLE": "Coastal science", "OPPORTUNITY STATUS": "Closed", "AWARD CEILING": 100000},
		{"OPPORTUNITY NUMBER": "NSF-3", "OPPORTUNITY TITLE": "Broadband mapping", "OPPORTUNITY STATUS": "Posted", "AWARD CEILING": 900000}
	]"#;

	fn config(data_path: PathBuf, export_dir: PathBuf, criteria: FilterCriteria) -> ResolvedConfig {
		ResolvedConfig {
			data_path,
			export_dir,
			theme: None,
			criteria,
			sort: SortSpec::descending("AWARD CEILING"),
			identity: IdentitySettings {
				enabled: false,
				account: None,
				resume_session: false,
			},
			log_level: "info".into(),
			export_only: true,
		}
	}

	#[test]
	fn export_only_writes_the_filtered_sorted_view() {
		let dir = tempfile::tempdir().unwrap();
		let data = dir.path().join("grants.json");
		fs::write(&data, DATA).unwrap();

		let criteria = FilterCriteria {
			search_text: "broadband".into(),
			status: "Posted".into(),
			..FilterCriteria::default()
		};
		let paths = ExplorerWorkflow::from_config(config(data, dir.path().to_path_buf(), criteria))
			.run()
			.unwrap();

		assert_eq!(paths.len(), 1);
		let csv = fs::read_to_string(&paths[0]).unwrap();
		let lines: Vec<_> = csv.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines[1].contains("NSF-3"));
		assert!(lines[2].contains("NSF-1"));
	}

	#[test]
	fn export_only_refuses_an_empty_view() {
		let dir = tempfile::tempdir().unwrap();
		let data = dir.path().join("grants.json");
		fs::write(&data, DATA).unwrap();

		let criteria = FilterCriteria {
			search_text: "no such grant".into(),
			..FilterCriteria::default()
		};
		let result =
			ExplorerWorkflow::from_config(config(data, dir.path().to_path_buf(), criteria)).run();
		assert!(result.is_err());
	}

	#[test]
	fn export_only_reports_missing_data() {
		let dir = tempfile::tempdir().unwrap();
		let error = ExplorerWorkflow::from_config(config(
			dir.path().join("missing.json"),
			dir.path().to_path_buf(),
			FilterCriteria::default(),
		))
		.run()
		.unwrap_err();
		assert!(format!("{error:#}").contains("failed to load grant data"));
	}
}
