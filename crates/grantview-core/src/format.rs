//! Display formatting for table cells and the statistics line.
//!
//! Every formatter degrades to the raw value or [`PLACEHOLDER`] instead of
//! failing, so one malformed record never blocks rendering a page.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::record::FieldValue;

/// Shown in place of missing values.
pub const PLACEHOLDER: &str = "N/A";

/// Maximum characters of a category badge before truncation.
pub const CATEGORY_BADGE_WIDTH: usize = 20;

/// Visual class of an opportunity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
	Posted,
	Forecasted,
	Closed,
	Other,
}

impl StatusClass {
	#[must_use]
	pub fn of(status: Option<&str>) -> Self {
		match status {
			Some("Posted") => StatusClass::Posted,
			Some("Forecasted") => StatusClass::Forecasted,
			Some("Closed") => StatusClass::Closed,
			_ => StatusClass::Other,
		}
	}
}

/// Insert thousands separators into a non-negative whole number.
#[must_use]
pub fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (position, digit) in digits.chars().enumerate() {
		if position > 0 && (digits.len() - position) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}
	grouped
}

/// Whole US dollars with separators, e.g. `$1,250,000`.
#[must_use]
pub fn dollars(amount: f64) -> String {
	let rounded = amount.round();
	let sign = if rounded < 0.0 { "-" } else { "" };
	format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Currency cell: numbers (or numeric text) as dollars, missing as `N/A`.
#[must_use]
pub fn currency(value: Option<&FieldValue>) -> String {
	match value {
		None => PLACEHOLDER.to_string(),
		Some(FieldValue::Number(amount)) => dollars(*amount),
		Some(FieldValue::Text(text)) => match text.trim().parse::<f64>() {
			Ok(amount) if amount.is_finite() => dollars(amount),
			_ if text.is_empty() => PLACEHOLDER.to_string(),
			_ => text.clone(),
		},
		Some(other) => other.to_string(),
	}
}

/// Parse the date layouts seen in grant data.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
	let text = text.trim();
	NaiveDate::parse_from_str(text, "%Y-%m-%d")
		.ok()
		.or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
		.or_else(|| {
			NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
				.ok()
				.map(|dt| dt.date())
		})
		.or_else(|| NaiveDate::parse_from_str(text, "%m/%d/%Y").ok())
		.or_else(|| NaiveDate::parse_from_str(text, "%b %d, %Y").ok())
}

/// Date cell as `Mon D, YYYY`; unparsable text is shown as-is.
#[must_use]
pub fn date(value: Option<&FieldValue>) -> String {
	match value {
		None => PLACEHOLDER.to_string(),
		Some(FieldValue::Text(text)) if text.is_empty() => PLACEHOLDER.to_string(),
		Some(FieldValue::Text(text)) => parse_date(text)
			.map(|date| date.format("%b %-d, %Y").to_string())
			.unwrap_or_else(|| text.clone()),
		Some(other) => other.to_string(),
	}
}

/// Cut `text` to `max` characters plus `...`; missing or empty is `N/A`.
#[must_use]
pub fn truncate(text: Option<&str>, max: usize) -> String {
	match text {
		None | Some("") => PLACEHOLDER.to_string(),
		Some(text) if text.chars().count() <= max => text.to_string(),
		Some(text) => {
			let mut cut: String = text.chars().take(max).collect();
			cut.push_str("...");
			cut
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn groups_thousands() {
		assert_eq!(group_thousands(0), "0");
		assert_eq!(group_thousands(999), "999");
		assert_eq!(group_thousands(1000), "1,000");
		assert_eq!(group_thousands(1234567), "1,234,567");
	}

	#[test]
	fn currency_formats_whole_dollars() {
		assert_eq!(currency(Some(&FieldValue::Number(1250000.4))), "$1,250,000");
		assert_eq!(currency(Some(&FieldValue::Number(999.5))), "$1,000");
		assert_eq!(currency(Some(&FieldValue::Number(-2500.0))), "-$2,500");
	}

	#[test]
	fn zero_and_missing_currency_are_distinct() {
		assert_eq!(currency(Some(&FieldValue::Number(0.0))), "$0");
		assert_eq!(currency(None), PLACEHOLDER);
	}

	#[test]
	fn currency_falls_back_to_raw_text() {
		assert_eq!(currency(Some(&FieldValue::from("5000"))), "$5,000");
		assert_eq!(currency(Some(&FieldValue::from("varies"))), "varies");
	}

	#[test]
	fn dates_render_in_short_month_form() {
		assert_eq!(date(Some(&FieldValue::from("2025-03-05"))), "Mar 5, 2025");
		assert_eq!(date(Some(&FieldValue::from("2025-12-31T17:00:00Z"))), "Dec 31, 2025");
		assert_eq!(date(Some(&FieldValue::from("07/04/2026"))), "Jul 4, 2026");
		assert_eq!(date(Some(&FieldValue::from("Jan 15, 2027"))), "Jan 15, 2027");
	}

	#[test]
	fn unparsable_dates_show_raw_value() {
		assert_eq!(date(Some(&FieldValue::from("rolling"))), "rolling");
		assert_eq!(date(Some(&FieldValue::from(""))), PLACEHOLDER);
		assert_eq!(date(None), PLACEHOLDER);
	}

	#[test]
	fn truncation_counts_characters() {
		assert_eq!(truncate(Some("short"), 20), "short");
		assert_eq!(
			truncate(Some("Science and Technology and other"), 20),
			"Science and Technolo..."
		);
		assert_eq!(truncate(Some("ééééé"), 3), "ééé...");
		assert_eq!(truncate(None, 20), PLACEHOLDER);
	}

	#[test]
	fn status_classes() {
		assert_eq!(StatusClass::of(Some("Posted")), StatusClass::Posted);
		assert_eq!(StatusClass::of(Some("Closed")), StatusClass::Closed);
		assert_eq!(StatusClass::of(Some("posted")), StatusClass::Other);
		assert_eq!(StatusClass::of(None), StatusClass::Other);
	}
}
