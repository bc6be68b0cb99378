pub(crate) mod layout;

use layout::{explorer_areas, frame_areas};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use super::{App, DataState, Focus, Screen};
use crate::components::notice::{LOGIN_HINTS, TABLE_HINTS};
use crate::components::rows::{COLUMN_WIDTHS, build_grant_rows, header_cells};
use crate::components::{
	FilterBarContext, InputContext, TableSpec, render_filter_bar, render_input, render_load_error,
	render_loading, render_login, render_pagination, render_status_line, render_table,
	render_title_bar,
};

const CONNECTING_LABEL: &str = "Connecting to sign-in service…";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let areas = frame_areas(frame.area());
		let theme = self.style.theme;
		let screen = self.screen();

		let greeting = self.greeting();
		render_title_bar(frame, areas.title, &self.ui.title, greeting.as_deref(), &theme);

		match screen {
			Screen::Connecting => {
				render_loading(frame, areas.body, CONNECTING_LABEL, &self.throbber_state, &theme);
			}
			Screen::Login => render_login(frame, areas.body, &theme),
			Screen::Explorer => match &self.data {
				DataState::Idle | DataState::Loading(_) => {
					render_loading(frame, areas.body, &self.ui.loading, &self.throbber_state, &theme);
				}
				DataState::Failed(message) => render_load_error(frame, areas.body, message, &theme),
				DataState::Ready => self.render_explorer(frame, areas.body),
			},
		}

		let hints = if screen == Screen::Login {
			LOGIN_HINTS
		} else {
			TABLE_HINTS
		};
		let notice = self.notice.as_ref().map(|active| &active.notice);
		render_status_line(frame, areas.status, notice, hints, &theme);
	}

	fn render_explorer(&mut self, frame: &mut Frame, area: Rect) {
		let areas = explorer_areas(area);
		let theme = self.style.theme;

		render_input(
			frame,
			areas.search,
			InputContext {
				search_input: &mut self.search_input,
				label: &self.ui.search_label,
				focused: self.focus == Focus::Search,
				pending: self.search_debounce.is_pending(),
				theme: &theme,
			},
		);

		let focused = match self.focus {
			Focus::Filter(dimension) => Some(dimension),
			_ => None,
		};
		render_filter_bar(
			frame,
			areas.filters,
			FilterBarContext {
				criteria: self.explorer.criteria(),
				focused,
				theme: &theme,
			},
		);

		frame.render_widget(
			Paragraph::new(self.explorer.stats().to_string()).style(theme.muted),
			areas.stats,
		);

		let spec = TableSpec {
			headers: header_cells(self.explorer.sort_spec(), &theme),
			widths: COLUMN_WIDTHS.to_vec(),
			rows: build_grant_rows(self.explorer.page_records(), &theme),
			title: (self.focus == Focus::Table).then(|| " Results ".to_string()),
			empty_message: &self.ui.empty_results,
		};
		render_table(frame, areas.table, &mut self.results.table_state, spec, &theme);

		let page = self.explorer.current_page();
		render_pagination(
			frame,
			areas.pagination,
			&page,
			self.explorer.page_window(),
			&theme,
		);
	}
}
