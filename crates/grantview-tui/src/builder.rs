use std::path::PathBuf;

use anyhow::Result;
use grantview_core::{
	DEFAULT_DATA_PATH, DisabledIdentity, FilterCriteria, IdentityProvider, SortSpec,
};

use crate::config::UiLabels;
use crate::style::{self, Theme};

/// Everything the explorer needs before it takes over the terminal.
///
/// A small builder in the spirit of a picker API: set the data file, the
/// export directory, the theme and the identity collaborator, then call
/// [`Launch::run`].
pub struct Launch {
	pub(crate) data_path: PathBuf,
	pub(crate) export_dir: PathBuf,
	pub(crate) criteria: FilterCriteria,
	pub(crate) sort: SortSpec,
	pub(crate) theme: Theme,
	pub(crate) labels: UiLabels,
	pub(crate) identity: Box<dyn IdentityProvider>,
}

impl Default for Launch {
	fn default() -> Self {
		Self::new(DEFAULT_DATA_PATH)
	}
}

impl Launch {
	/// Explore the grant data at `data_path` with gating switched off.
	pub fn new(data_path: impl Into<PathBuf>) -> Self {
		Self {
			data_path: data_path.into(),
			export_dir: PathBuf::from("."),
			criteria: FilterCriteria::default(),
			sort: SortSpec::default(),
			theme: Theme::default(),
			labels: UiLabels::default(),
			identity: Box::new(DisabledIdentity::default()),
		}
	}

	/// Directory that receives CSV exports.
	pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.export_dir = dir.into();
		self
	}

	/// Pre-fill the search box once data is shown.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.criteria.search_text = query.into();
		self
	}

	/// Start from these search text and selector values. Selector values
	/// missing from the loaded data are dropped.
	pub fn with_initial_criteria(mut self, criteria: FilterCriteria) -> Self {
		self.criteria = criteria;
		self
	}

	pub fn with_initial_sort(mut self, sort: SortSpec) -> Self {
		self.sort = sort;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Select a bundled theme by name; unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = theme,
			None => tracing::warn!(theme = name, "unknown theme; keeping default"),
		}
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Gate access behind `provider`.
	pub fn with_identity(mut self, provider: impl IdentityProvider + 'static) -> Self {
		self.identity = Box::new(provider);
		self
	}

	/// Take over the terminal until the user quits.
	pub fn run(self) -> Result<SessionSummary> {
		crate::runtime::run(self)
	}
}

/// What happened during an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
	/// CSV files written, in order.
	pub exports: Vec<PathBuf>,
}
