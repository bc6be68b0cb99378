use ratatui::style::Style;

use grantview_core::NoticeKind;
use grantview_core::format::StatusClass;

/// A theme containing styles for the UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Title bar and table header.
	pub header: Style,
	/// Selected table row.
	pub row_highlight: Style,
	/// Labels in front of inputs.
	pub prompt: Style,
	/// Empty states and placeholders.
	pub empty: Style,
	/// Active sort column and current page.
	pub highlight: Style,
	/// Secondary text such as key hints.
	pub muted: Style,
	/// The focused control.
	pub focus: Style,
	/// Opportunity numbers that carry a link.
	pub link: Style,
	/// Category badges.
	pub badge: Style,
	pub status_posted: Style,
	pub status_forecasted: Style,
	pub status_closed: Style,
	pub notice_info: Style,
	pub notice_success: Style,
	pub notice_error: Style,
}

impl Theme {
	/// Style for a status cell.
	#[must_use]
	pub fn status_style(&self, class: StatusClass) -> Style {
		match class {
			StatusClass::Posted => self.status_posted,
			StatusClass::Forecasted => self.status_forecasted,
			StatusClass::Closed => self.status_closed,
			StatusClass::Other => Style::default(),
		}
	}

	#[must_use]
	pub fn notice_style(&self, kind: NoticeKind) -> Style {
		match kind {
			NoticeKind::Info => self.notice_info,
			NoticeKind::Success => self.notice_success,
			NoticeKind::Error => self.notice_error,
		}
	}
}

/// Describes a named theme available to the UI.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	pub(crate) fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
