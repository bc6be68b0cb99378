use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, Parser};
use grantview::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("grantview {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "grantview",
	version,
	long_version = long_version(),
	about = "Search, filter, sort and export federal grant opportunities",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `grantview` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "GRANTVIEW_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Grant data file, a JSON array of records (default: ./grants_data.json)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 'o',
		long = "export-dir",
		value_name = "DIR",
		help = "Directory that receives CSV exports (default: current directory)"
	)]
	pub(crate) export_dir: Option<PathBuf>,
	#[arg(
		short,
		long,
		value_name = "TEXT",
		help = "Initial free-text search (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(long, value_name = "VALUE", help = "Only grants in this category")]
	pub(crate) category: Option<String>,
	#[arg(long, value_name = "VALUE", help = "Only grants with this status")]
	pub(crate) status: Option<String>,
	#[arg(long, value_name = "VALUE", help = "Only grants from this agency")]
	pub(crate) agency: Option<String>,
	#[arg(
		long,
		value_name = "COLUMN",
		help = "Sort by a column label or source key (default: load order)"
	)]
	pub(crate) sort: Option<String>,
	#[arg(long, requires = "sort", help = "Sort in descending order")]
	pub(crate) descending: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "no-auth",
		help = "Skip the sign-in gate and open a local session (default: disabled)"
	)]
	pub(crate) no_auth: bool,
	#[arg(
		short = 'e',
		long = "export-only",
		help = "Write the CSV for the given criteria and exit without the TUI"
	)]
	pub(crate) export_only: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directive, e.g. debug or grantview_core=trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(long = "list-themes", help = "List the bundled themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(long = "print-config", help = "Print the effective configuration and exit")]
	pub(crate) print_config: bool,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_is_well_formed() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let parsed = CliArgs::try_parse_from(["grantview"]).expect("parses");
		assert!(parsed.config.is_empty());
		assert!(!parsed.export_only);
		assert_eq!(parsed.data, None);
	}

	#[test]
	fn export_criteria_parse() {
		let parsed = CliArgs::try_parse_from([
			"grantview",
			"--export-only",
			"--category",
			"Health",
			"--sort",
			"Award Ceiling",
			"--descending",
			"-q",
			"rural",
		])
		.expect("parses");
		assert!(parsed.export_only);
		assert_eq!(parsed.category.as_deref(), Some("Health"));
		assert_eq!(parsed.sort.as_deref(), Some("Award Ceiling"));
		assert!(parsed.descending);
		assert_eq!(parsed.query.as_deref(), Some("rural"));
	}

	#[test]
	fn descending_needs_a_sort_column() {
		assert!(CliArgs::try_parse_from(["grantview", "--descending"]).is_err());
	}
}
