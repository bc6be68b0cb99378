//! Grant records and their field values.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Well-known columns of a grant record.
///
/// Records may carry any other key as well; these are the columns the
/// explorer filters on, renders, and formats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	OpportunityNumber,
	Title,
	Agency,
	Category,
	Status,
	EstimatedFunding,
	AwardCeiling,
	CloseDate,
	Link,
}

impl Field {
	/// Columns shown in the results table, in display order.
	pub const TABLE: [Field; 8] = [
		Field::OpportunityNumber,
		Field::Title,
		Field::Agency,
		Field::Category,
		Field::EstimatedFunding,
		Field::AwardCeiling,
		Field::CloseDate,
		Field::Status,
	];

	/// Key used for this column in the source data.
	#[must_use]
	pub const fn key(self) -> &'static str {
		match self {
			Field::OpportunityNumber => "OPPORTUNITY NUMBER",
			Field::Title => "OPPORTUNITY TITLE",
			Field::Agency => "AGENCY NAME",
			Field::Category => "CATEGORY OF FUNDING ACTIVITY",
			Field::Status => "OPPORTUNITY STATUS",
			Field::EstimatedFunding => "ESTIMATED TOTAL FUNDING",
			Field::AwardCeiling => "AWARD CEILING",
			Field::CloseDate => "CLOSE DATE",
			Field::Link => "LINK TO ADDITIONAL INFORMATION",
		}
	}

	/// Short column heading.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Field::OpportunityNumber => "Opportunity",
			Field::Title => "Title",
			Field::Agency => "Agency",
			Field::Category => "Category",
			Field::Status => "Status",
			Field::EstimatedFunding => "Est. Funding",
			Field::AwardCeiling => "Award Ceiling",
			Field::CloseDate => "Close Date",
			Field::Link => "Link",
		}
	}

	/// Resolve a source key back to a well-known column.
	#[must_use]
	pub fn from_key(key: &str) -> Option<Self> {
		[
			Field::OpportunityNumber,
			Field::Title,
			Field::Agency,
			Field::Category,
			Field::Status,
			Field::EstimatedFunding,
			Field::AwardCeiling,
			Field::CloseDate,
			Field::Link,
		]
		.into_iter()
		.find(|field| field.key() == key)
	}
}

/// A present (non-null) value in a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	Text(String),
	Number(f64),
	Flag(bool),
}

impl FieldValue {
	/// Convert a JSON value, mapping `null` to `None`.
	///
	/// Nested arrays and objects are kept as their compact JSON text so they
	/// still take part in search and export.
	#[must_use]
	pub fn from_json(value: Value) -> Option<Self> {
		match value {
			Value::Null => None,
			Value::Bool(flag) => Some(FieldValue::Flag(flag)),
			Value::Number(number) => Some(
				number
					.as_f64()
					.map(FieldValue::Number)
					.unwrap_or_else(|| FieldValue::Text(number.to_string())),
			),
			Value::String(text) => Some(FieldValue::Text(text)),
			nested @ (Value::Array(_) | Value::Object(_)) => Some(FieldValue::Text(nested.to_string())),
		}
	}

	#[must_use]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(text) => Some(text),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_number(&self) -> Option<f64> {
		match self {
			FieldValue::Number(number) => Some(*number),
			_ => None,
		}
	}

	/// Text form used by search and export.
	#[must_use]
	pub fn to_text(&self) -> Cow<'_, str> {
		match self {
			FieldValue::Text(text) => Cow::Borrowed(text),
			other => Cow::Owned(other.to_string()),
		}
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldValue::Text(text) => f.write_str(text),
			FieldValue::Flag(flag) => write!(f, "{flag}"),
			FieldValue::Number(number) => {
				if number.is_finite() && number.fract() == 0.0 {
					write!(f, "{number:.0}")
				} else {
					write!(f, "{number}")
				}
			}
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		FieldValue::Number(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Flag(value)
	}
}

/// One grant opportunity.
///
/// Keys keep the order they had in the source object. A key mapped to
/// `None` was present but `null`; callers treat it the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	fields: IndexMap<String, Option<FieldValue>>,
}

impl Record {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert of a present value.
	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		self.fields.insert(key.into(), Some(value.into()));
		self
	}

	/// Builder-style insert of an explicit `null`.
	#[must_use]
	pub fn with_null(mut self, key: impl Into<String>) -> Self {
		self.fields.insert(key.into(), None);
		self
	}

	/// Build a record from a JSON object.
	#[must_use]
	pub fn from_json_object(object: Map<String, Value>) -> Self {
		let fields = object
			.into_iter()
			.map(|(key, value)| (key, FieldValue::from_json(value)))
			.collect();
		Self { fields }
	}

	/// Value stored under `key`, if present and not null.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&FieldValue> {
		self.fields.get(key).and_then(Option::as_ref)
	}

	#[must_use]
	pub fn field(&self, field: Field) -> Option<&FieldValue> {
		self.get(field.key())
	}

	/// Text value of a well-known column; numbers and flags yield `None`.
	#[must_use]
	pub fn text(&self, field: Field) -> Option<&str> {
		self.field(field).and_then(FieldValue::as_text)
	}

	/// Numeric value of a well-known column; text yields `None`.
	#[must_use]
	pub fn number(&self, field: Field) -> Option<f64> {
		self.field(field).and_then(FieldValue::as_number)
	}

	/// Keys in source order, including keys whose value is null.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Present values in source order.
	pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
		self.fields.values().filter_map(Option::as_ref)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}
