use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row plus its bottom margin.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<Line<'a>>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	/// Optional title on the border.
	pub title: Option<String>,
	/// Shown under the header when there are no rows.
	pub empty_message: &'a str,
}

/// Render a bordered table, or its empty message when `rows` is empty.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(Style::default().fg(theme.muted.fg.unwrap_or_default()));
	if let Some(title) = spec.title {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let is_empty = spec.rows.is_empty();
	let header = Row::new(spec.headers)
		.style(theme.header)
		.height(1)
		.bottom_margin(1);
	let table = Table::new(spec.rows, spec.widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	if is_empty && inner.height > TABLE_HEADER_ROWS {
		let message_area = Rect {
			y: inner.y + TABLE_HEADER_ROWS,
			height: inner.height - TABLE_HEADER_ROWS,
			..inner
		};
		let empty = Paragraph::new(spec.empty_message)
			.style(theme.empty)
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}
}
