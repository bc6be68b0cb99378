//! CSV export of the current view.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::ExportError;
use crate::record::Record;

/// Serialize the records in `view` as CSV.
///
/// The header row lists the keys of the first record in its key order; every
/// row emits one quoted cell per header, empty when the record lacks the key.
pub fn to_csv(records: &[Record], view: &[usize]) -> Result<String, ExportError> {
	let first = view
		.first()
		.map(|&index| &records[index])
		.ok_or(ExportError::Empty)?;
	let headers: Vec<&str> = first.keys().collect();

	let mut lines = Vec::with_capacity(view.len() + 1);
	lines.push(headers.join(","));
	for &index in view {
		let record = &records[index];
		let row: Vec<String> = headers
			.iter()
			.map(|header| {
				let value = record
					.get(header)
					.map(|value| value.to_text())
					.unwrap_or_default();
				quote_cell(&value)
			})
			.collect();
		lines.push(row.join(","));
	}

	Ok(lines.join("\n"))
}

/// Wrap a cell in quotes, doubling any embedded quote characters.
#[must_use]
pub fn quote_cell(value: &str) -> String {
	format!("\"{}\"", value.replace('"', "\"\""))
}

/// Download name for an export taken on `date`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
	format!("federal-grants-{}.csv", date.format("%Y-%m-%d"))
}

/// Write the CSV for `view` into `dir`, returning the written path.
pub fn write_export(
	dir: &Path,
	records: &[Record],
	view: &[usize],
	date: NaiveDate,
) -> Result<PathBuf, ExportError> {
	let csv = to_csv(records, view)?;
	let path = dir.join(export_file_name(date));
	fs::write(&path, csv).map_err(|source| ExportError::Io {
		path: path.clone(),
		source,
	})?;
	tracing::info!(path = %path.display(), rows = view.len(), "exported grants");
	Ok(path)
}
