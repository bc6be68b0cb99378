//! Search and facet filtering over the master record list.

use crate::record::{Field, Record};

/// One of the exact-match filter selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
	Category,
	Status,
	Agency,
}

impl FilterDimension {
	pub const ALL: [FilterDimension; 3] = [
		FilterDimension::Category,
		FilterDimension::Status,
		FilterDimension::Agency,
	];

	/// Record column compared against the selected value.
	#[must_use]
	pub const fn field(self) -> Field {
		match self {
			FilterDimension::Category => Field::Category,
			FilterDimension::Status => Field::Status,
			FilterDimension::Agency => Field::Agency,
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			FilterDimension::Category => "Category",
			FilterDimension::Status => "Status",
			FilterDimension::Agency => "Agency",
		}
	}
}

/// Active filter constraints. An empty string leaves that dimension open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
	pub search_text: String,
	pub category: String,
	pub status: String,
	pub agency: String,
}

impl FilterCriteria {
	/// Selected value for an exact-match dimension.
	#[must_use]
	pub fn value(&self, dimension: FilterDimension) -> &str {
		match dimension {
			FilterDimension::Category => &self.category,
			FilterDimension::Status => &self.status,
			FilterDimension::Agency => &self.agency,
		}
	}

	pub fn value_mut(&mut self, dimension: FilterDimension) -> &mut String {
		match dimension {
			FilterDimension::Category => &mut self.category,
			FilterDimension::Status => &mut self.status,
			FilterDimension::Agency => &mut self.agency,
		}
	}

	/// Whether no dimension is constrained.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.search_text.is_empty()
			&& FilterDimension::ALL
				.iter()
				.all(|dimension| self.value(*dimension).is_empty())
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

/// Return the positions of every record matching `criteria`, in input order.
#[must_use]
pub fn apply(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
	let needle = criteria.search_text.to_lowercase();
	let view: Vec<usize> = records
		.iter()
		.enumerate()
		.filter(|(_, record)| matches(record, criteria, &needle))
		.map(|(index, _)| index)
		.collect();

	tracing::debug!(
		total = records.len(),
		matched = view.len(),
		"applied filter criteria"
	);
	view
}

/// Whether a single record passes every constraint.
///
/// `needle` is the lower-cased search text, hoisted out of the per-record loop.
fn matches(record: &Record, criteria: &FilterCriteria, needle: &str) -> bool {
	matches_search(record, needle)
		&& FilterDimension::ALL
			.iter()
			.all(|dimension| matches_exact(record, dimension.field(), criteria.value(*dimension)))
}

fn matches_search(record: &Record, needle: &str) -> bool {
	if needle.is_empty() {
		return true;
	}
	record
		.values()
		.any(|value| value.to_text().to_lowercase().contains(needle))
}

fn matches_exact(record: &Record, field: Field, expected: &str) -> bool {
	expected.is_empty() || record.text(field) == Some(expected)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn grant(id: &str, category: &str, status: &str, agency: &str) -> Record {
		Record::new()
			.with(Field::OpportunityNumber.key(), id)
			.with(Field::Title.key(), format!("Grant {id}"))
			.with(Field::Category.key(), category)
			.with(Field::Status.key(), status)
			.with(Field::Agency.key(), agency)
	}

	fn sample() -> Vec<Record> {
		vec![
			grant("A-1", "Health", "Posted", "HHS"),
			grant("B-2", "Education", "Closed", "ED"),
			grant("C-3", "Health", "Closed", "HHS"),
			grant("D-4", "Energy", "Forecasted", "DOE").with(Field::AwardCeiling.key(), 250000.0),
		]
	}

	#[test]
	fn empty_criteria_return_everything_in_order() {
		let records = sample();
		let view = apply(&records, &FilterCriteria::default());
		assert_eq!(view, vec![0, 1, 2, 3]);
	}

	#[test]
	fn empty_store_yields_empty_view() {
		let criteria = FilterCriteria {
			search_text: "anything".into(),
			..FilterCriteria::default()
		};
		assert!(apply(&[], &criteria).is_empty());
	}

	#[test]
	fn search_is_case_insensitive_across_all_fields() {
		let records = sample();
		let criteria = FilterCriteria {
			search_text: "hHs".into(),
			..FilterCriteria::default()
		};
		assert_eq!(apply(&records, &criteria), vec![0, 2]);
	}

	#[test]
	fn search_matches_numeric_fields_as_text() {
		let records = sample();
		let criteria = FilterCriteria {
			search_text: "2500".into(),
			..FilterCriteria::default()
		};
		assert_eq!(apply(&records, &criteria), vec![3]);
	}

	#[test]
	fn search_skips_null_values() {
		let records = vec![
			Record::new().with_null("NOTES").with("TITLE", "null island"),
			Record::new().with_null("NOTES"),
		];
		let criteria = FilterCriteria {
			search_text: "null".into(),
			..FilterCriteria::default()
		};
		assert_eq!(apply(&records, &criteria), vec![0]);
	}

	#[test]
	fn closed_records_never_pass_a_posted_filter() {
		let records = sample();
		let criteria = FilterCriteria {
			status: "Posted".into(),
			..FilterCriteria::default()
		};
		let view = apply(&records, &criteria);
		assert!(!view.is_empty());
		for index in view {
			assert_ne!(records[index].text(Field::Status), Some("Closed"));
		}
	}

	#[test]
	fn exact_filters_are_case_sensitive() {
		let records = sample();
		let criteria = FilterCriteria {
			category: "health".into(),
			..FilterCriteria::default()
		};
		assert!(apply(&records, &criteria).is_empty());
	}

	#[test]
	fn all_constraints_combine_with_and() {
		let records = sample();
		let criteria = FilterCriteria {
			search_text: "grant".into(),
			category: "Health".into(),
			status: "Closed".into(),
			agency: "HHS".into(),
		};
		assert_eq!(apply(&records, &criteria), vec![2]);
	}

	#[test]
	fn criteria_report_emptiness() {
		let mut criteria = FilterCriteria::default();
		assert!(criteria.is_empty());
		*criteria.value_mut(FilterDimension::Agency) = "ED".into();
		assert!(!criteria.is_empty());
		criteria.clear();
		assert!(criteria.is_empty());
	}
}
