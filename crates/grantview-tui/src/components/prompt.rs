use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the search row.
pub struct InputContext<'a, 'i> {
	pub search_input: &'a mut SearchInput<'i>,
	pub label: &'a str,
	pub focused: bool,
	/// Shown while a debounced search is waiting to apply.
	pub pending: bool,
	pub theme: &'a Theme,
}

/// Render `label ›` followed by the input, with a marker while a search is pending.
pub fn render_input(frame: &mut Frame, area: Rect, ctx: InputContext<'_, '_>) {
	let prompt = format!("{} › ", ctx.label);
	let prompt_style = if ctx.focused { ctx.theme.focus } else { ctx.theme.prompt };
	let [prompt_area, input_area, pending_area] = Layout::horizontal([
		Constraint::Length(prompt.width() as u16),
		Constraint::Fill(1),
		Constraint::Length(2),
	])
	.areas(area);

	frame.render_widget(Span::styled(prompt, prompt_style), prompt_area);
	ctx.search_input.render(frame, input_area, ctx.focused);
	if ctx.pending {
		frame.render_widget(Span::styled(" …", ctx.theme.muted), pending_area);
	}
}
