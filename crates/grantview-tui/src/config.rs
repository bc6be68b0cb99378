/// Text rendered around the grant table.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title bar text.
	pub title: String,
	/// Label in front of the search input.
	pub search_label: String,
	/// Placeholder shown while the search input is empty.
	pub search_placeholder: String,
	/// Shown in the table when no record matches.
	pub empty_results: String,
	/// Shown next to the throbber while data loads.
	pub loading: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Federal Grants Database".to_string(),
			search_label: "Search".to_string(),
			search_placeholder: "title, agency, description or opportunity number".to_string(),
			empty_results: "No grants match your filters".to_string(),
			loading: "Loading grant opportunities…".to_string(),
		}
	}
}
