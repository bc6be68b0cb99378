//! Bottom status line: the active notice, or key hints when there is none.

use grantview_core::Notice;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Key hints for the table view.
pub const TABLE_HINTS: &str = "Tab focus • ←/→ change • F1-F8 sort • PgUp/PgDn page • \
	Ctrl+S export • Ctrl+R reset • Ctrl+L log out • Esc quit";

/// Key hints for the sign-in view.
pub const LOGIN_HINTS: &str = "Enter log in • s sign up • q quit";

#[must_use]
pub fn status_line(notice: Option<&Notice>, hints: &str, theme: &Theme) -> Line<'static> {
	match notice {
		Some(notice) => Line::from(vec![
			Span::styled(notice.message.clone(), theme.notice_style(notice.kind)),
			Span::styled("  (Esc to dismiss)", theme.muted),
		]),
		None => Line::from(Span::styled(hints.to_string(), theme.muted)),
	}
}

pub fn render_status_line(
	frame: &mut Frame,
	area: Rect,
	notice: Option<&Notice>,
	hints: &str,
	theme: &Theme,
) {
	frame.render_widget(Paragraph::new(status_line(notice, hints, theme)), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn notice_replaces_hints() {
		let theme = Theme::default();
		let notice = Notice::error("No data to download. Please adjust your filters.");
		let line = status_line(Some(&notice), TABLE_HINTS, &theme);
		insta::assert_snapshot!(
			line.to_string(),
			@"No data to download. Please adjust your filters.  (Esc to dismiss)"
		);
		assert_eq!(line.spans[0].style, theme.notice_error);
	}

	#[test]
	fn hints_show_without_notice() {
		let line = status_line(None, LOGIN_HINTS, &Theme::default());
		assert_eq!(line.to_string(), LOGIN_HINTS);
	}
}
