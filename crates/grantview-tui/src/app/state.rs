//! Core state container for the terminal front-end.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use grantview_core::{
	AccessGate, AccessState, Debouncer, Explorer, FilterDimension, IdentityEvent, IdentityProvider,
};
use throbber_widgets_tui::ThrobberState;

use super::results::ResultsState;
use super::session::{ActiveNotice, DataState};
use crate::builder::Launch;
use crate::config::UiLabels;
use crate::input::SearchInput;
use crate::style::{StyleConfig, Theme};

/// Which control receives unbound keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
	Search,
	Filter(FilterDimension),
	Table,
}

impl Focus {
	const ORDER: [Focus; 5] = [
		Focus::Search,
		Focus::Filter(FilterDimension::Category),
		Focus::Filter(FilterDimension::Status),
		Focus::Filter(FilterDimension::Agency),
		Focus::Table,
	];

	fn position(self) -> usize {
		Self::ORDER
			.iter()
			.position(|focus| *focus == self)
			.unwrap_or_default()
	}

	pub fn next(self) -> Self {
		Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
	}

	pub fn previous(self) -> Self {
		let len = Self::ORDER.len();
		Self::ORDER[(self.position() + len - 1) % len]
	}
}

/// Top-level view, derived from the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
	Connecting,
	Login,
	Explorer,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) explorer: Explorer,
	/// Free-text search box.
	pub search_input: SearchInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) results: ResultsState,
	pub(crate) gate: AccessGate,
	pub(crate) identity: Box<dyn IdentityProvider>,
	pub(crate) identity_events: Receiver<IdentityEvent>,
	pub(crate) data: DataState,
	pub(crate) search_debounce: Debouncer<String>,
	pub(crate) focus: Focus,
	pub(crate) notice: Option<ActiveNotice>,
	pub(crate) exports: Vec<PathBuf>,
	pub(crate) data_path: PathBuf,
	pub(crate) export_dir: PathBuf,
}

impl<'a> App<'a> {
	/// Build the app and start the identity provider.
	pub fn new(launch: Launch) -> Self {
		let Launch {
			data_path,
			export_dir,
			criteria,
			sort,
			theme,
			labels,
			mut identity,
		} = launch;

		let (events_tx, identity_events) = mpsc::channel();
		identity.subscribe(events_tx);

		let mut explorer = Explorer::default();
		for dimension in FilterDimension::ALL {
			explorer.set_filter(dimension, criteria.value(dimension));
		}
		explorer.set_sort(sort);
		explorer.set_search(criteria.search_text.clone());
		let mut search_input = SearchInput::new(criteria.search_text);
		search_input.set_placeholder(labels.search_placeholder.clone(), theme.empty);

		let mut app = Self {
			explorer,
			search_input,
			ui: labels,
			style: StyleConfig::with_theme(theme),
			throbber_state: ThrobberState::default(),
			results: ResultsState::default(),
			gate: AccessGate::new(),
			identity,
			identity_events,
			data: DataState::Idle,
			search_debounce: Debouncer::default(),
			focus: Focus::Search,
			notice: None,
			exports: Vec::new(),
			data_path,
			export_dir,
		};

		if let Err(error) = app.identity.init() {
			app.report_identity_error(&error, Instant::now());
		}
		app
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	/// CSV files written during this session.
	#[must_use]
	pub fn exports(&self) -> &[PathBuf] {
		&self.exports
	}

	pub(crate) fn screen(&self) -> Screen {
		match self.gate.state() {
			AccessState::Loading => Screen::Connecting,
			AccessState::LoginRequired => Screen::Login,
			AccessState::Authenticated(_) => Screen::Explorer,
		}
	}

	/// Number of rows on the current page.
	pub(crate) fn page_len(&self) -> usize {
		self.explorer.current_page().items.len()
	}

	/// Re-anchor the row selection after the view or page changed.
	pub(crate) fn reset_selection(&mut self) {
		let rows = self.page_len();
		self.results.reset(rows);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn focus_cycles_through_every_control() {
		let mut focus = Focus::Search;
		let mut seen = Vec::new();
		for _ in 0..5 {
			seen.push(focus);
			focus = focus.next();
		}
		assert_eq!(focus, Focus::Search);
		assert_eq!(seen, Focus::ORDER.to_vec());
		assert_eq!(Focus::Search.previous(), Focus::Table);
	}
}
