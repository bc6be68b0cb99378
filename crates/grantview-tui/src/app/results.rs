//! Row selection within the current page.

use ratatui::widgets::TableState;

#[derive(Debug, Default)]
pub(crate) struct ResultsState {
	pub table_state: TableState,
}

impl ResultsState {
	/// Select the first row of a freshly shown page.
	pub fn reset(&mut self, rows: usize) {
		self.table_state = TableState::default();
		if rows > 0 {
			self.table_state.select(Some(0));
		}
	}

	pub fn selected(&self) -> Option<usize> {
		self.table_state.selected()
	}

	pub fn move_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub fn move_down(&mut self, rows: usize) {
		match self.table_state.selected() {
			Some(selected) if selected + 1 < rows => self.table_state.select(Some(selected + 1)),
			None if rows > 0 => self.table_state.select(Some(0)),
			_ => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_stays_within_the_page() {
		let mut results = ResultsState::default();
		results.reset(2);
		results.move_up();
		assert_eq!(results.selected(), Some(0));
		results.move_down(2);
		results.move_down(2);
		assert_eq!(results.selected(), Some(1));
	}

	#[test]
	fn empty_page_has_no_selection() {
		let mut results = ResultsState::default();
		results.reset(0);
		results.move_down(0);
		assert_eq!(results.selected(), None);
	}
}
