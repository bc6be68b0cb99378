//! Cell formatting for the grant table.

use grantview_core::format::{self, CATEGORY_BADGE_WIDTH, StatusClass};
use grantview_core::{Field, Record, SortDirection, SortSpec};
use ratatui::layout::Constraint;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use crate::style::Theme;

/// Width constraint for each column in [`Field::TABLE`] order.
pub const COLUMN_WIDTHS: [Constraint; 8] = [
	Constraint::Length(16),
	Constraint::Fill(3),
	Constraint::Fill(2),
	Constraint::Length(CATEGORY_BADGE_WIDTH as u16 + 3),
	Constraint::Length(14),
	Constraint::Length(14),
	Constraint::Length(12),
	Constraint::Length(10),
];

/// Header labels, with an arrow on the active sort column.
#[must_use]
pub fn header_cells(sort: &SortSpec, theme: &Theme) -> Vec<Line<'static>> {
	Field::TABLE
		.iter()
		.map(|field| match sort.direction_for(field.key()) {
			Some(direction) => {
				let arrow = match direction {
					SortDirection::Ascending => "▲",
					SortDirection::Descending => "▼",
				};
				Line::from(vec![
					Span::raw(field.label()),
					Span::styled(format!(" {arrow}"), theme.highlight),
				])
			}
			None => Line::from(field.label()),
		})
		.collect()
}

/// One table row per record, in the order given.
pub fn build_grant_rows<'r>(
	records: impl IntoIterator<Item = &'r Record>,
	theme: &Theme,
) -> Vec<Row<'static>> {
	records
		.into_iter()
		.map(|record| Row::new(grant_cells(record, theme)))
		.collect()
}

fn grant_cells(record: &Record, theme: &Theme) -> Vec<Cell<'static>> {
	let number = record.text(Field::OpportunityNumber).unwrap_or_default().to_string();
	let number = if record.text(Field::Link).is_some_and(|link| !link.is_empty()) {
		Cell::from(Span::styled(number, theme.link))
	} else {
		Cell::from(number)
	};

	let status = record.text(Field::Status);
	let status_cell = Cell::from(Span::styled(
		status.unwrap_or(format::PLACEHOLDER).to_string(),
		theme.status_style(StatusClass::of(status)),
	));

	vec![
		number,
		Cell::from(text_or_placeholder(record, Field::Title)),
		Cell::from(text_or_placeholder(record, Field::Agency)),
		Cell::from(Span::styled(
			format::truncate(record.text(Field::Category), CATEGORY_BADGE_WIDTH),
			theme.badge,
		)),
		Cell::from(format::currency(record.field(Field::EstimatedFunding))),
		Cell::from(format::currency(record.field(Field::AwardCeiling))),
		Cell::from(format::date(record.field(Field::CloseDate))),
		status_cell,
	]
}

fn text_or_placeholder(record: &Record, field: Field) -> String {
	match record.field(field) {
		Some(value) if !value.to_text().is_empty() => value.to_text().into_owned(),
		_ => format::PLACEHOLDER.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_active_column_gets_an_arrow() {
		let theme = Theme::default();
		let headers = header_cells(&SortSpec::descending(Field::AwardCeiling.key()), &theme);
		let rendered: Vec<String> = headers.iter().map(|line| line.to_string()).collect();

		assert_eq!(rendered[0], "Opportunity");
		assert_eq!(rendered[5], format!("{} ▼", Field::AwardCeiling.label()));
		assert_eq!(rendered.iter().filter(|label| label.contains('▼')).count(), 1);
	}

	#[test]
	fn every_column_has_a_width() {
		assert_eq!(COLUMN_WIDTHS.len(), Field::TABLE.len());
		let theme = Theme::default();
		let record = Record::new().with(Field::Title.key(), "Rural broadband");
		assert_eq!(build_grant_rows([&record], &theme).len(), 1);
	}

	#[test]
	fn missing_text_shows_placeholder() {
		let record = Record::new().with_null(Field::Agency.key());
		assert_eq!(text_or_placeholder(&record, Field::Agency), "N/A");
		assert_eq!(text_or_placeholder(&record, Field::Title), "N/A");
	}
}
