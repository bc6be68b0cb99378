//! Whole-screen panels for the states around the table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::style::Theme;

/// Title on the left, signed-in user on the right.
pub fn render_title_bar(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	greeting: Option<&str>,
	theme: &Theme,
) {
	frame.render_widget(Block::default().style(theme.header), area);
	frame.render_widget(Paragraph::new(format!(" {title}")).style(theme.header), area);
	if let Some(greeting) = greeting {
		frame.render_widget(
			Paragraph::new(format!("{greeting} "))
				.style(theme.header)
				.alignment(Alignment::Right),
			area,
		);
	}
}

/// A throbber with `label`, centred.
pub fn render_loading(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	state: &ThrobberState,
	theme: &Theme,
) {
	let spinner = Throbber::default()
		.style(theme.prompt)
		.throbber_style(theme.highlight);
	let line = Line::from(vec![
		spinner.to_symbol_span(state),
		Span::styled(label.to_string(), theme.prompt),
	]);

	let [row] = Layout::vertical([Constraint::Length(1)])
		.flex(Flex::Center)
		.areas(area);
	let [cell] = Layout::horizontal([Constraint::Length(line.width() as u16)])
		.flex(Flex::Center)
		.areas(row);
	frame.render_widget(line, cell);
}

/// The sign-in prompt shown while the user is unauthenticated.
pub fn render_login(frame: &mut Frame, area: Rect, theme: &Theme) {
	let lines = vec![
		Line::from(Span::styled("Sign in required", theme.highlight)),
		Line::default(),
		Line::from("The grants database is available to signed-in members."),
		Line::default(),
		Line::from(vec![
			Span::styled("Enter", theme.focus),
			Span::raw(" log in    "),
			Span::styled("s", theme.focus),
			Span::raw(" sign up    "),
			Span::styled("q", theme.focus),
			Span::raw(" quit"),
		]),
	];
	render_panel(frame, area, " Welcome ", lines, theme);
}

/// Shown when the grant data could not be loaded.
pub fn render_load_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let lines = vec![
		Line::from(Span::styled("Unable to load grant data", theme.notice_error)),
		Line::default(),
		Line::from(message.to_string()),
		Line::default(),
		Line::from(Span::styled(
			"Check the data file and restart. Press q to quit.",
			theme.muted,
		)),
	];
	render_panel(frame, area, " Error ", lines, theme);
}

fn render_panel(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'_>>, theme: &Theme) {
	let height = lines.len() as u16 + 2;
	let [row] = Layout::vertical([Constraint::Length(height)])
		.flex(Flex::Center)
		.areas(area);
	let [panel] = Layout::horizontal([Constraint::Max(72)])
		.flex(Flex::Center)
		.areas(row);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.muted)
		.title(title.to_string());
	let paragraph = Paragraph::new(lines)
		.block(block)
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, panel);
}
