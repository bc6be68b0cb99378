mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use grantview::logging;

use crate::cli::parse_cli;
use crate::workflow::ExplorerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in grantview_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let config = settings::load(&cli)?;
	if cli.print_config {
		config.print_summary();
		return Ok(());
	}

	let log_path = logging::initialize(&config.log_level)?;
	tracing::info!(log = %log_path.display(), data = %config.data_path.display(), "starting grantview");

	let exports = ExplorerWorkflow::from_config(config).run()?;
	for path in exports {
		println!("Exported {}", path.display());
	}
	Ok(())
}
