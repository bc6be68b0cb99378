//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Free-text query box. Newlines, Tab and Enter never reach the text area.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map(String::as_str).unwrap_or("")
	}

	/// Feed a key to the text area; returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(
			key.code,
			KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc
		) {
			return false;
		}
		let before = self.text().to_owned();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		let placeholder = self.textarea.placeholder_text().to_owned();
		let style = self.textarea.placeholder_style().unwrap_or_default();
		*self = Self::new(text);
		self.set_placeholder(placeholder, style);
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		frame.render_widget(&self.textarea, area);
	}
}
