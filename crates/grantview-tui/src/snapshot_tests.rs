use std::time::Instant;

use grantview_core::{ConfiguredIdentity, Field, Record, RecordStore};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::App;
use crate::builder::Launch;

const MISSING_DATA: &str = "/nonexistent/grantview/grants_data.json";

fn sample_store() -> RecordStore {
	RecordStore::from_records(vec![
		Record::new()
			.with(Field::OpportunityNumber.key(), "HHS-2026-001")
			.with(Field::Title.key(), "Community Health Workers")
			.with(Field::Agency.key(), "HHS")
			.with(Field::Category.key(), "Health")
			.with(Field::Status.key(), "Posted")
			.with(Field::EstimatedFunding.key(), 1_000_000.0)
			.with(Field::AwardCeiling.key(), 250_000.0)
			.with(Field::CloseDate.key(), "2026-03-15"),
		Record::new()
			.with(Field::OpportunityNumber.key(), "USDA-2026-044")
			.with(Field::Title.key(), "Rural Broadband Expansion")
			.with(Field::Agency.key(), "USDA")
			.with(Field::Category.key(), "Infrastructure and Community Development")
			.with(Field::Status.key(), "Forecasted")
			.with(Field::EstimatedFunding.key(), 500_000.0)
			.with(Field::AwardCeiling.key(), 100_000.0),
		Record::new()
			.with(Field::OpportunityNumber.key(), "NSF-2026-310")
			.with(Field::Title.key(), "Graduate Research Fellowships")
			.with(Field::Agency.key(), "NSF")
			.with(Field::Status.key(), "Closed")
			.with_null(Field::AwardCeiling.key()),
	])
}

fn render(app: &mut App<'_>, width: u16, height: u16) -> String {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw snapshot frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn row(snapshot: &str, index: usize) -> &str {
	snapshot.lines().nth(index).unwrap_or_default().trim()
}

fn ready_app() -> App<'static> {
	let mut app = App::new(Launch::new(MISSING_DATA));
	app.pump(Instant::now());
	app.install_store(sample_store());
	app
}

#[test]
fn explorer_frame_shows_stats_table_and_pages() {
	let mut app = ready_app();
	let snapshot = render(&mut app, 160, 20);

	assert!(row(&snapshot, 0).starts_with("Federal Grants Database"));
	assert!(row(&snapshot, 0).ends_with("Welcome, local session"));
	insta::assert_snapshot!(
		row(&snapshot, 4),
		@"Showing 3 of 3 grants • Total Funding: $1,500,000 • Avg Max Award: $116,667"
	);
	assert!(row(&snapshot, 3).starts_with("Category: ‹ All ›"));

	for expected in [
		"HHS-2026-001",
		"USDA-2026-044",
		"$1,000,000",
		"$250,000",
		"Mar 15, 2026",
		"Infrastructure and C...",
		"Forecasted",
		"N/A",
	] {
		assert!(snapshot.contains(expected), "missing {expected:?} in\n{snapshot}");
	}
	assert!(row(&snapshot, 18).starts_with("Page 1 of 1 • 1-3 of 3"));
}

#[test]
fn sorted_column_header_carries_an_arrow() {
	let mut app = ready_app();
	app.explorer.sort_by(Field::Title.key());
	let snapshot = render(&mut app, 160, 20);

	assert!(snapshot.contains("Title ▲"));
	let first_row = snapshot
		.lines()
		.position(|line| line.contains("NSF-2026-310"))
		.unwrap();
	let second_row = snapshot
		.lines()
		.position(|line| line.contains("USDA-2026-044"))
		.unwrap();
	assert!(first_row < second_row);
}

#[test]
fn empty_result_message_is_shown() {
	let mut app = ready_app();
	app.explorer.set_search("no grant mentions this");
	app.reset_selection();
	let snapshot = render(&mut app, 120, 20);

	assert!(snapshot.contains("No grants match your filters"));
	assert!(row(&snapshot, 18).starts_with("No matching records"));
}

#[test]
fn login_screen_offers_the_identity_actions() {
	let launch = Launch::new(MISSING_DATA).with_identity(ConfiguredIdentity::new(None, false));
	let mut app = App::new(launch);
	app.pump(Instant::now());
	let snapshot = render(&mut app, 100, 16);

	assert!(snapshot.contains("Sign in required"));
	assert!(snapshot.contains("Enter log in"));
	insta::assert_snapshot!(row(&snapshot, 15), @"Enter log in • s sign up • q quit");
}

#[test]
fn loading_screen_shows_the_throbber_label() {
	let mut app = App::new(Launch::new(MISSING_DATA));
	app.pump(Instant::now());
	let snapshot = render(&mut app, 100, 12);
	assert!(snapshot.contains("Loading grant opportunities…"));
}
