//! The master record list, loaded once per session.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::record::Record;

/// Location of the grant data relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "./grants_data.json";

/// Read-only collection of every loaded record.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
	records: Vec<Record>,
}

impl RecordStore {
	/// Load records from a JSON file containing an array of objects.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| LoadError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let store = Self::from_reader(BufReader::new(file))?;
		tracing::info!(path = %path.display(), records = store.len(), "loaded grant data");
		Ok(store)
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
		let value: Value = serde_json::from_reader(reader)?;
		Self::from_value(value)
	}

	pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
		let value: Value = serde_json::from_str(text)?;
		Self::from_value(value)
	}

	#[must_use]
	pub fn from_records(records: Vec<Record>) -> Self {
		Self { records }
	}

	fn from_value(value: Value) -> Result<Self, LoadError> {
		let Value::Array(items) = value else {
			return Err(LoadError::NotACollection {
				found: json_kind(&value),
			});
		};

		let records = items
			.into_iter()
			.enumerate()
			.map(|(index, item)| match item {
				Value::Object(object) => Ok(Record::from_json_object(object)),
				other => Err(LoadError::NotARecord {
					index,
					found: json_kind(&other),
				}),
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { records })
	}

	#[must_use]
	pub fn records(&self) -> &[Record] {
		&self.records
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
