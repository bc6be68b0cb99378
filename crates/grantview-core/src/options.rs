//! Choices offered by the category, status and agency selectors.

use std::collections::BTreeSet;

use crate::filter::FilterDimension;
use crate::record::Record;

/// Option labels longer than this are shortened for display.
pub const OPTION_LABEL_WIDTH: usize = 50;

/// Sorted distinct values for each exact-match selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
	pub categories: Vec<String>,
	pub statuses: Vec<String>,
	pub agencies: Vec<String>,
}

impl FilterOptions {
	#[must_use]
	pub fn collect(records: &[Record]) -> Self {
		Self {
			categories: distinct_values(records, FilterDimension::Category),
			statuses: distinct_values(records, FilterDimension::Status),
			agencies: distinct_values(records, FilterDimension::Agency),
		}
	}

	#[must_use]
	pub fn for_dimension(&self, dimension: FilterDimension) -> &[String] {
		match dimension {
			FilterDimension::Category => &self.categories,
			FilterDimension::Status => &self.statuses,
			FilterDimension::Agency => &self.agencies,
		}
	}

	/// Whether `value` is a selectable option (the empty "all" choice always is).
	#[must_use]
	pub fn contains(&self, dimension: FilterDimension, value: &str) -> bool {
		value.is_empty()
			|| self
				.for_dimension(dimension)
				.iter()
				.any(|option| option == value)
	}

	/// The option after `current`, wrapping through the empty "all" choice.
	#[must_use]
	pub fn next_after(&self, dimension: FilterDimension, current: &str) -> String {
		let options = self.for_dimension(dimension);
		match options.iter().position(|option| option == current) {
			None => options.first().cloned().unwrap_or_default(),
			Some(position) => options.get(position + 1).cloned().unwrap_or_default(),
		}
	}

	/// The option before `current`, wrapping through the empty "all" choice.
	#[must_use]
	pub fn previous_before(&self, dimension: FilterDimension, current: &str) -> String {
		let options = self.for_dimension(dimension);
		match options.iter().position(|option| option == current) {
			None => options.last().cloned().unwrap_or_default(),
			Some(0) => String::new(),
			Some(position) => options[position - 1].clone(),
		}
	}
}

/// Distinct non-empty text values of the dimension's column, sorted.
#[must_use]
pub fn distinct_values(records: &[Record], dimension: FilterDimension) -> Vec<String> {
	records
		.iter()
		.filter_map(|record| record.text(dimension.field()))
		.filter(|value| !value.is_empty())
		.collect::<BTreeSet<_>>()
		.into_iter()
		.map(str::to_string)
		.collect()
}

/// Display label for an option, shortened past [`OPTION_LABEL_WIDTH`].
#[must_use]
pub fn option_label(value: &str) -> String {
	if value.chars().count() <= OPTION_LABEL_WIDTH {
		return value.to_string();
	}
	let mut label: String = value.chars().take(OPTION_LABEL_WIDTH).collect();
	label.push_str("...");
	label
}
