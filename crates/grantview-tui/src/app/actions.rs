use std::time::Instant;

use chrono::{Local, NaiveDate};
use grantview_core::{Explorer, ExportError, Field, FilterDimension, Notice, OpenMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::session::DataState;
use super::state::{App, Focus, Screen};

impl<'a> App<'a> {
	/// Process a keyboard event; returns `true` when the user asked to quit.
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return true,
			KeyCode::Esc => return self.notice.take().is_none(),
			_ => {}
		}

		match self.screen() {
			Screen::Connecting => false,
			Screen::Login => self.handle_login_key(key, now),
			Screen::Explorer => self.handle_explorer_key(key, now),
		}
	}

	fn handle_login_key(&mut self, key: KeyEvent, now: Instant) -> bool {
		match key.code {
			KeyCode::Enter | KeyCode::Char('l') => self.request_login(OpenMode::Login, now),
			KeyCode::Char('s') => self.request_login(OpenMode::Signup, now),
			KeyCode::Char('q') => return true,
			_ => {}
		}
		false
	}

	fn handle_explorer_key(&mut self, key: KeyEvent, now: Instant) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('l') {
			self.request_logout(now);
			return false;
		}

		match self.data {
			DataState::Ready => {}
			DataState::Failed(_) => return key.code == KeyCode::Char('q'),
			DataState::Idle | DataState::Loading(_) => return false,
		}

		match key.code {
			KeyCode::Char('s') if ctrl => self.export_view(Local::now().date_naive(), now),
			KeyCode::Char('r') if ctrl => self.reset_view(now),
			KeyCode::Tab => self.focus = self.focus.next(),
			KeyCode::BackTab => self.focus = self.focus.previous(),
			KeyCode::F(number @ 1..=8) => self.sort_column(usize::from(number) - 1),
			KeyCode::PageDown => self.change_page(|explorer| explorer.next_page()),
			KeyCode::PageUp => self.change_page(|explorer| explorer.previous_page()),
			KeyCode::Up => self.results.move_up(),
			KeyCode::Down => {
				let rows = self.page_len();
				self.results.move_down(rows);
			}
			_ => return self.handle_focused_key(key, now),
		}
		false
	}

	fn handle_focused_key(&mut self, key: KeyEvent, now: Instant) -> bool {
		match self.focus {
			Focus::Search => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.search_debounce.schedule(text, now);
				}
			}
			Focus::Filter(dimension) => self.handle_filter_key(dimension, key.code),
			Focus::Table => match key.code {
				KeyCode::Left => self.change_page(|explorer| explorer.previous_page()),
				KeyCode::Right => self.change_page(|explorer| explorer.next_page()),
				KeyCode::Home => self.change_page(|explorer| explorer.first_page()),
				KeyCode::End => self.change_page(|explorer| explorer.last_page()),
				KeyCode::Char(digit @ '1'..='9') => {
					let page = digit as usize - '0' as usize;
					self.change_page(|explorer| explorer.go_to_page(page));
				}
				KeyCode::Enter => self.show_selected_link(now),
				KeyCode::Char('q') => return true,
				_ => {}
			},
		}
		false
	}

	fn handle_filter_key(&mut self, dimension: FilterDimension, code: KeyCode) {
		match code {
			KeyCode::Left => self.explorer.cycle_filter(dimension, false),
			KeyCode::Right | KeyCode::Char(' ') => self.explorer.cycle_filter(dimension, true),
			KeyCode::Backspace | KeyCode::Delete => self.explorer.set_filter(dimension, ""),
			_ => return,
		}
		self.reset_selection();
	}

	fn sort_column(&mut self, index: usize) {
		if let Some(field) = Field::TABLE.get(index) {
			self.explorer.sort_by(field.key());
			self.reset_selection();
		}
	}

	fn change_page(&mut self, step: impl FnOnce(&mut Explorer) -> bool) {
		if step(&mut self.explorer) {
			self.reset_selection();
		}
	}

	/// Clear the search box, every selector and the sort order.
	fn reset_view(&mut self, now: Instant) {
		self.search_debounce.cancel();
		self.search_input.clear();
		self.explorer.clear();
		self.reset_selection();
		self.show_notice(Notice::info("Filters cleared."), now);
	}

	/// Write the current view to the export directory. A search still
	/// waiting on the debounce is applied first.
	pub(crate) fn export_view(&mut self, date: NaiveDate, now: Instant) {
		if let Some(text) = self.search_debounce.cancel() {
			self.explorer.set_search(text);
			self.reset_selection();
		}

		match self.explorer.write_export(&self.export_dir, date) {
			Ok(path) => {
				let count = self.explorer.view().len();
				tracing::info!(path = %path.display(), count, "exported grants");
				let notice = Notice::success(format!("Exported {count} grants to {}", path.display()));
				self.exports.push(path);
				self.show_notice(notice, now);
			}
			Err(error @ ExportError::Empty) => self.show_notice(Notice::error(error.to_string()), now),
			Err(error) => {
				tracing::error!(%error, "export failed");
				self.show_notice(Notice::error(format!("Export failed: {error}")), now);
			}
		}
	}

	fn show_selected_link(&mut self, now: Instant) {
		let Some(selected) = self.results.selected() else {
			return;
		};
		let Some(record) = self.explorer.page_records().nth(selected) else {
			return;
		};

		let number = record.text(Field::OpportunityNumber).unwrap_or("This grant");
		let notice = match record.text(Field::Link).filter(|link| !link.is_empty()) {
			Some(link) => Notice::info(format!("{number}: {link}")),
			None => Notice::info(format!("{number} has no additional information link.")),
		};
		self.show_notice(notice, now);
	}
}
