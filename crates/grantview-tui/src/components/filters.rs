//! The row of exact-match selectors.

use grantview_core::options::option_label;
use grantview_core::{FilterCriteria, FilterDimension};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

pub struct FilterBarContext<'a> {
	pub criteria: &'a FilterCriteria,
	/// Selector that currently has keyboard focus, if any.
	pub focused: Option<FilterDimension>,
	pub theme: &'a Theme,
}

/// Text shown for a selector's current value.
#[must_use]
pub fn selector_label(value: &str) -> String {
	if value.is_empty() {
		"All".to_string()
	} else {
		option_label(value)
	}
}

#[must_use]
pub fn filter_bar_line(ctx: &FilterBarContext<'_>) -> Line<'static> {
	let mut spans = Vec::with_capacity(FilterDimension::ALL.len() * 3);
	for (position, dimension) in FilterDimension::ALL.into_iter().enumerate() {
		if position > 0 {
			spans.push(Span::raw("   "));
		}
		spans.push(Span::styled(format!("{}: ", dimension.label()), ctx.theme.prompt));
		let value = format!("‹ {} ›", selector_label(ctx.criteria.value(dimension)));
		let style = if ctx.focused == Some(dimension) {
			ctx.theme.focus
		} else {
			ctx.theme.highlight.remove_modifier(ratatui::style::Modifier::BOLD)
		};
		spans.push(Span::styled(value, style));
	}
	Line::from(spans)
}

pub fn render_filter_bar(frame: &mut Frame, area: Rect, ctx: FilterBarContext<'_>) {
	frame.render_widget(Paragraph::new(filter_bar_line(&ctx)), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn open_selectors_read_all() {
		let criteria = FilterCriteria {
			status: "Posted".into(),
			..FilterCriteria::default()
		};
		let theme = Theme::default();
		let line = filter_bar_line(&FilterBarContext {
			criteria: &criteria,
			focused: Some(FilterDimension::Status),
			theme: &theme,
		});
		insta::assert_snapshot!(
			line.to_string(),
			@"Category: ‹ All ›   Status: ‹ Posted ›   Agency: ‹ All ›"
		);
		assert_eq!(line.spans[4].style, theme.focus);
	}

	#[test]
	fn long_values_are_shortened() {
		let long = "x".repeat(60);
		assert_eq!(selector_label(&long), format!("{}...", "x".repeat(50)));
	}
}
