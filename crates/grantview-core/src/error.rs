use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the master record list.
///
/// A load error is terminal for the session: front-ends show an error view
/// and never retry on their own.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The data file could not be opened or read.
	#[error("failed to read grant data from {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The data was not valid JSON.
	#[error("grant data is not valid JSON: {0}")]
	Parse(#[from] serde_json::Error),

	/// The top-level JSON value was not an array.
	#[error("grant data must be a JSON array of records, found {found}")]
	NotACollection { found: &'static str },

	/// An element of the array was not an object.
	#[error("grant record {index} must be a JSON object, found {found}")]
	NotARecord { index: usize, found: &'static str },
}

/// Failures while exporting the current view.
#[derive(Debug, Error)]
pub enum ExportError {
	/// The current view holds no records.
	#[error("No data to download. Please adjust your filters.")]
	Empty,

	/// Writing the CSV file failed.
	#[error("failed to write export to {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Failures talking to the identity collaborator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
	/// The provider was used before a subscriber was attached.
	#[error("identity provider has no subscriber")]
	NotSubscribed,

	/// The subscriber hung up.
	#[error("identity event subscriber disconnected")]
	Disconnected,
}
