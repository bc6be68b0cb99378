use std::path::PathBuf;

use grantview_core::{FilterCriteria, SortSpec, User};

/// How the sign-in gate is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdentitySettings {
	/// When false every session is a local, signed-in one.
	pub enabled: bool,
	/// Account that the login flow signs in as.
	pub account: Option<User>,
	/// Start already signed in as `account`.
	pub resume_session: bool,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub data_path: PathBuf,
	pub export_dir: PathBuf,
	pub theme: Option<String>,
	/// Search text and selectors the session starts from.
	pub criteria: FilterCriteria,
	pub sort: SortSpec,
	pub identity: IdentitySettings,
	pub log_level: String,
	pub export_only: bool,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		println!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut lines = vec![
			"Effective configuration:".to_string(),
			format!("  Data file: {}", self.data_path.display()),
			format!("  Export directory: {}", self.export_dir.display()),
			format!(
				"  UI theme: {}",
				self.theme.as_deref().unwrap_or("(bundled default)")
			),
			format!("  Sign-in gate: {}", bool_to_word(self.identity.enabled)),
		];
		if let Some(account) = &self.identity.account {
			lines.push(format!("  Account: {}", account.email));
			lines.push(format!(
				"  Resume session: {}",
				bool_to_word(self.identity.resume_session)
			));
		}
		if !self.criteria.search_text.is_empty() {
			lines.push(format!("  Initial query: {}", self.criteria.search_text));
		}
		for (label, value) in [
			("Category", &self.criteria.category),
			("Status", &self.criteria.status),
			("Agency", &self.criteria.agency),
		] {
			if !value.is_empty() {
				lines.push(format!("  {label}: {value}"));
			}
		}
		if let Some(field) = &self.sort.field {
			lines.push(format!("  Sort: {field} ({})", self.sort.direction.as_str()));
		}
		lines.push(format!("  Log level: {}", self.log_level));
		lines.join("\n")
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_lists_the_effective_values() {
		let config = ResolvedConfig {
			data_path: PathBuf::from("/srv/grants.json"),
			export_dir: PathBuf::from("/tmp"),
			theme: None,
			criteria: FilterCriteria {
				status: "Posted".into(),
				..FilterCriteria::default()
			},
			sort: SortSpec::descending("AWARD CEILING"),
			identity: IdentitySettings {
				enabled: false,
				account: None,
				resume_session: false,
			},
			log_level: "info".into(),
			export_only: false,
		};

		insta::assert_snapshot!(config.summary(), @r"
		Effective configuration:
		  Data file: /srv/grants.json
		  Export directory: /tmp
		  UI theme: (bundled default)
		  Sign-in gate: off
		  Status: Posted
		  Sort: AWARD CEILING (desc)
		  Log level: info
		");
	}
}
