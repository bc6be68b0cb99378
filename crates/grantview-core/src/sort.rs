//! Column sorting for derived views.
//!
//! Missing and null values always sort after present ones, whichever way the
//! column is ordered. Two numbers compare numerically and any other pair of
//! present values compares as lower-cased text, except a number against text:
//! numbers rank ahead of text in both directions so the comparison stays a
//! total order when a column mixes the two.
//!
//! The relative order of records with equal keys is not part of the contract.

use std::cmp::Ordering;

use crate::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

impl SortDirection {
	#[must_use]
	pub fn reversed(self) -> Self {
		match self {
			SortDirection::Ascending => SortDirection::Descending,
			SortDirection::Descending => SortDirection::Ascending,
		}
	}

	/// Scale a natural-order comparison by this direction.
	#[must_use]
	pub fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			SortDirection::Ascending => ordering,
			SortDirection::Descending => ordering.reverse(),
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			SortDirection::Ascending => "asc",
			SortDirection::Descending => "desc",
		}
	}
}

/// Sort column and direction. `field == None` keeps load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
	pub field: Option<String>,
	pub direction: SortDirection,
}

impl SortSpec {
	#[must_use]
	pub fn ascending(field: impl Into<String>) -> Self {
		Self {
			field: Some(field.into()),
			direction: SortDirection::Ascending,
		}
	}

	#[must_use]
	pub fn descending(field: impl Into<String>) -> Self {
		Self {
			field: Some(field.into()),
			direction: SortDirection::Descending,
		}
	}

	/// Header-click behaviour: the active column flips direction, any other
	/// column becomes active in ascending order.
	pub fn toggle(&mut self, field: &str) {
		if self.field.as_deref() == Some(field) {
			self.direction = self.direction.reversed();
		} else {
			self.field = Some(field.to_string());
			self.direction = SortDirection::Ascending;
		}
	}

	/// Direction of `field` if it is the active sort column.
	#[must_use]
	pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
		(self.field.as_deref() == Some(field)).then_some(self.direction)
	}
}

enum SortKey {
	Missing,
	Number(f64),
	Text(String),
}

/// Reorder `view` by `spec`, returning a new view.
#[must_use]
pub fn apply(records: &[Record], view: Vec<usize>, spec: &SortSpec) -> Vec<usize> {
	let Some(field) = spec.field.as_deref() else {
		return view;
	};

	let mut keyed: Vec<(usize, SortKey)> = view
		.into_iter()
		.map(|index| (index, sort_key(records[index].get(field))))
		.collect();

	keyed.sort_by(|(_, a), (_, b)| compare(a, b, spec.direction));
	keyed.into_iter().map(|(index, _)| index).collect()
}

fn sort_key(value: Option<&FieldValue>) -> SortKey {
	match value {
		None => SortKey::Missing,
		Some(FieldValue::Number(number)) => SortKey::Number(*number),
		Some(other) => SortKey::Text(other.to_text().to_lowercase()),
	}
}

fn compare(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
	match (a, b) {
		(SortKey::Missing, SortKey::Missing) => Ordering::Equal,
		(SortKey::Missing, _) => Ordering::Greater,
		(_, SortKey::Missing) => Ordering::Less,
		(SortKey::Number(a), SortKey::Number(b)) => direction.apply(a.total_cmp(b)),
		(SortKey::Text(a), SortKey::Text(b)) => direction.apply(a.cmp(b)),
		(SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
		(SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
	}
}
