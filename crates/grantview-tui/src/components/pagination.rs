//! Page summary and page-number buttons under the table.

use std::ops::RangeInclusive;

use grantview_core::Page;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// `Page 2 of 3 • 21-40 of 45`, or a short notice when nothing matches.
#[must_use]
pub fn page_summary<T>(page: &Page<'_, T>) -> String {
	if page.total_items == 0 {
		return "No matching records".to_string();
	}
	format!(
		"Page {} of {} • {}-{} of {}",
		page.page_number, page.total_pages, page.range_start, page.range_end, page.total_items
	)
}

/// Previous/next controls around the visible page numbers.
#[must_use]
pub fn page_buttons<T>(
	page: &Page<'_, T>,
	window: RangeInclusive<usize>,
	theme: &Theme,
) -> Line<'static> {
	let control = |label: &'static str, enabled: bool| {
		Span::styled(label, if enabled { theme.prompt } else { theme.muted })
	};

	let mut spans = vec![control("‹ Prev", page.has_previous())];
	for number in window {
		spans.push(Span::raw(" "));
		if number == page.page_number {
			spans.push(Span::styled(format!("[{number}]"), theme.highlight));
		} else {
			spans.push(Span::raw(number.to_string()));
		}
	}
	spans.push(Span::raw(" "));
	spans.push(control("Next ›", page.has_next()));
	Line::from(spans)
}

/// Render the summary on the left and the buttons on the right.
pub fn render_pagination<T>(
	frame: &mut Frame,
	area: Rect,
	page: &Page<'_, T>,
	window: RangeInclusive<usize>,
	theme: &Theme,
) {
	let buttons = page_buttons(page, window, theme);
	let [summary_area, buttons_area] = Layout::horizontal([
		Constraint::Fill(1),
		Constraint::Length(buttons.width() as u16),
	])
	.areas(area);

	frame.render_widget(
		Paragraph::new(page_summary(page)).style(theme.muted),
		summary_area,
	);
	frame.render_widget(
		Paragraph::new(buttons).alignment(Alignment::Right),
		buttons_area,
	);
}

#[cfg(test)]
mod tests {
	use grantview_core::paginate::{self, PAGE_SIZE};

	use super::*;

	#[test]
	fn summary_counts_the_last_page() {
		let items: Vec<usize> = (0..45).collect();
		let page = paginate::page(&items, 3, PAGE_SIZE);
		insta::assert_snapshot!(page_summary(&page), @"Page 3 of 3 • 41-45 of 45");
	}

	#[test]
	fn summary_for_an_empty_view() {
		let items: Vec<usize> = Vec::new();
		let page = paginate::page(&items, 1, PAGE_SIZE);
		assert_eq!(page_summary(&page), "No matching records");
	}

	#[test]
	fn buttons_mark_the_current_page() {
		let items: Vec<usize> = (0..200).collect();
		let page = paginate::page(&items, 6, PAGE_SIZE);
		let line = page_buttons(&page, paginate::page_window(6, page.total_pages), &Theme::default());
		insta::assert_snapshot!(line.to_string(), @"‹ Prev 4 5 [6] 7 8 Next ›");
	}
}
