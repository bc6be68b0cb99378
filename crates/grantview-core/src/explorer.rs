//! The controller that owns filter, sort and page state over a record store.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::ExportError;
use crate::export;
use crate::filter::{self, FilterCriteria, FilterDimension};
use crate::options::FilterOptions;
use crate::paginate::{self, PAGE_SIZE, Page};
use crate::record::Record;
use crate::sort::{self, SortSpec};
use crate::stats::Stats;
use crate::store::RecordStore;

/// Filter → sort → paginate pipeline state for one session.
///
/// Every criteria or sort change recomputes the derived view from the master
/// list and returns to page 1. The master list itself is never reordered.
#[derive(Debug, Clone)]
pub struct Explorer {
	store: RecordStore,
	options: FilterOptions,
	criteria: FilterCriteria,
	sort: SortSpec,
	view: Vec<usize>,
	page_number: usize,
	page_size: usize,
}

impl Default for Explorer {
	fn default() -> Self {
		Self::new(RecordStore::default())
	}
}

impl Explorer {
	#[must_use]
	pub fn new(store: RecordStore) -> Self {
		let mut explorer = Self {
			options: FilterOptions::collect(store.records()),
			store,
			criteria: FilterCriteria::default(),
			sort: SortSpec::default(),
			view: Vec::new(),
			page_number: 1,
			page_size: PAGE_SIZE,
		};
		explorer.refresh();
		explorer
	}

	#[must_use]
	pub fn records(&self) -> &[Record] {
		self.store.records()
	}

	#[must_use]
	pub fn criteria(&self) -> &FilterCriteria {
		&self.criteria
	}

	#[must_use]
	pub fn sort_spec(&self) -> &SortSpec {
		&self.sort
	}

	/// Indices of the filtered and sorted records, in display order.
	#[must_use]
	pub fn view(&self) -> &[usize] {
		&self.view
	}

	#[must_use]
	pub fn page_number(&self) -> usize {
		self.page_number
	}

	#[must_use]
	pub fn filter_options(&self) -> &FilterOptions {
		&self.options
	}

	pub fn set_search(&mut self, text: impl Into<String>) {
		self.criteria.search_text = text.into();
		self.refresh();
	}

	pub fn set_filter(&mut self, dimension: FilterDimension, value: impl Into<String>) {
		*self.criteria.value_mut(dimension) = value.into();
		self.refresh();
	}

	pub fn set_category(&mut self, value: impl Into<String>) {
		self.set_filter(FilterDimension::Category, value);
	}

	pub fn set_status(&mut self, value: impl Into<String>) {
		self.set_filter(FilterDimension::Status, value);
	}

	pub fn set_agency(&mut self, value: impl Into<String>) {
		self.set_filter(FilterDimension::Agency, value);
	}

	/// Step a selector to its next option, wrapping through "all".
	pub fn cycle_filter(&mut self, dimension: FilterDimension, forward: bool) {
		let current = self.criteria.value(dimension);
		let next = if forward {
			self.options.next_after(dimension, current)
		} else {
			self.options.previous_before(dimension, current)
		};
		self.set_filter(dimension, next);
	}

	/// Header click on `field`.
	pub fn sort_by(&mut self, field: &str) {
		self.sort.toggle(field);
		self.refresh();
	}

	pub fn set_sort(&mut self, spec: SortSpec) {
		self.sort = spec;
		self.refresh();
	}

	/// Reset criteria, sort order and page.
	pub fn clear(&mut self) {
		self.criteria.clear();
		self.sort = SortSpec::default();
		self.refresh();
	}

	/// Swap in freshly loaded data, keeping selector values that still exist.
	pub fn replace_store(&mut self, store: RecordStore) {
		self.options = FilterOptions::collect(store.records());
		self.store = store;
		for dimension in FilterDimension::ALL {
			if !self.options.contains(dimension, self.criteria.value(dimension)) {
				self.criteria.value_mut(dimension).clear();
			}
		}
		self.refresh();
	}

	/// Drop all data and state, as on logout.
	pub fn clear_data(&mut self) {
		*self = Self::default();
	}

	#[must_use]
	pub fn total_pages(&self) -> usize {
		paginate::total_pages(self.view.len(), self.page_size)
	}

	/// Move to `page` if it exists; out-of-range requests change nothing.
	pub fn go_to_page(&mut self, page: usize) -> bool {
		if page >= 1 && page <= self.total_pages() {
			self.page_number = page;
			true
		} else {
			false
		}
	}

	pub fn next_page(&mut self) -> bool {
		self.go_to_page(self.page_number + 1)
	}

	pub fn previous_page(&mut self) -> bool {
		self.go_to_page(self.page_number.saturating_sub(1))
	}

	pub fn first_page(&mut self) -> bool {
		self.go_to_page(1)
	}

	pub fn last_page(&mut self) -> bool {
		self.go_to_page(self.total_pages())
	}

	#[must_use]
	pub fn current_page(&self) -> Page<'_, usize> {
		paginate::page(&self.view, self.page_number, self.page_size)
	}

	/// Records on the current page, in display order.
	pub fn page_records(&self) -> impl Iterator<Item = &Record> {
		let records = self.store.records();
		self.current_page()
			.items
			.iter()
			.map(move |&index| &records[index])
	}

	#[must_use]
	pub fn page_window(&self) -> RangeInclusive<usize> {
		paginate::page_window(self.page_number, self.total_pages())
	}

	#[must_use]
	pub fn stats(&self) -> Stats {
		Stats::compute(self.store.records(), &self.view)
	}

	pub fn export_csv(&self) -> Result<String, ExportError> {
		export::to_csv(self.store.records(), &self.view)
	}

	pub fn write_export(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf, ExportError> {
		export::write_export(dir, self.store.records(), &self.view, date)
	}

	fn refresh(&mut self) {
		let records = self.store.records();
		let filtered = filter::apply(records, &self.criteria);
		self.view = sort::apply(records, filtered, &self.sort);
		self.page_number = 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::Field;

	fn grant(number: usize) -> Record {
		let category = if number % 3 == 0 { "Health" } else { "Education" };
		let status = if number % 2 == 0 { "Posted" } else { "Closed" };
		Record::new()
			.with(Field::OpportunityNumber.key(), format!("OPP-{number:03}"))
			.with(Field::Title.key(), format!("Grant number {number}"))
			.with(Field::Category.key(), category)
			.with(Field::Status.key(), status)
			.with(Field::Agency.key(), "NSF")
			.with(Field::AwardCeiling.key(), (number * 1000) as f64)
	}

	fn explorer(count: usize) -> Explorer {
		Explorer::new(RecordStore::from_records((0..count).map(grant).collect()))
	}

	#[test]
	fn starts_with_full_view_on_page_one() {
		let explorer = explorer(45);
		assert_eq!(explorer.view().len(), 45);
		assert_eq!(explorer.page_number(), 1);
		assert_eq!(explorer.total_pages(), 3);
		assert_eq!(explorer.view(), (0..45).collect::<Vec<_>>().as_slice());
	}

	#[test]
	fn changing_a_filter_returns_to_page_one() {
		let mut explorer = explorer(45);
		assert!(explorer.go_to_page(3));
		assert_eq!(explorer.page_number(), 3);

		explorer.set_category("Health");
		assert_eq!(explorer.page_number(), 1);
		assert_eq!(explorer.view().len(), 15);
	}

	#[test]
	fn changing_sort_or_search_returns_to_page_one() {
		let mut explorer = explorer(45);
		explorer.go_to_page(2);
		explorer.sort_by(Field::AwardCeiling.key());
		assert_eq!(explorer.page_number(), 1);

		explorer.go_to_page(2);
		explorer.set_search("grant");
		assert_eq!(explorer.page_number(), 1);
	}

	#[test]
	fn out_of_range_pages_are_ignored() {
		let mut explorer = explorer(45);
		explorer.go_to_page(2);
		assert!(!explorer.go_to_page(0));
		assert!(!explorer.go_to_page(4));
		assert_eq!(explorer.page_number(), 2);

		explorer.last_page();
		assert!(!explorer.next_page());
		assert_eq!(explorer.page_number(), 3);
		explorer.first_page();
		assert!(!explorer.previous_page());
		assert_eq!(explorer.page_number(), 1);
	}

	#[test]
	fn last_page_holds_the_remainder() {
		let mut explorer = explorer(45);
		explorer.go_to_page(3);
		let page = explorer.current_page();
		assert_eq!(page.items.len(), 5);
		assert_eq!((page.range_start, page.range_end), (41, 45));
		assert_eq!(explorer.page_records().count(), 5);
	}

	#[test]
	fn sort_header_toggles_direction() {
		let mut explorer = explorer(5);
		let ceiling = Field::AwardCeiling.key();
		explorer.sort_by(ceiling);
		assert_eq!(explorer.view(), &[0, 1, 2, 3, 4]);
		explorer.sort_by(ceiling);
		assert_eq!(explorer.view(), &[4, 3, 2, 1, 0]);
	}

	#[test]
	fn clear_resets_everything() {
		let mut explorer = explorer(45);
		explorer.set_status("Posted");
		explorer.sort_by(Field::Title.key());
		explorer.go_to_page(2);

		explorer.clear();
		assert!(explorer.criteria().is_empty());
		assert_eq!(explorer.sort_spec(), &SortSpec::default());
		assert_eq!(explorer.page_number(), 1);
		assert_eq!(explorer.view().len(), 45);
	}

	#[test]
	fn master_list_is_never_reordered() {
		let mut explorer = explorer(10);
		let before = explorer.records().to_vec();
		explorer.sort_by(Field::AwardCeiling.key());
		explorer.sort_by(Field::AwardCeiling.key());
		explorer.set_status("Closed");
		assert_eq!(explorer.records(), before.as_slice());
	}

	#[test]
	fn cycle_filter_walks_options() {
		let mut explorer = explorer(6);
		explorer.cycle_filter(FilterDimension::Status, true);
		assert_eq!(explorer.criteria().status, "Closed");
		explorer.cycle_filter(FilterDimension::Status, true);
		assert_eq!(explorer.criteria().status, "Posted");
		explorer.cycle_filter(FilterDimension::Status, true);
		assert_eq!(explorer.criteria().status, "");
	}

	#[test]
	fn replace_store_keeps_surviving_selections() {
		let mut explorer = explorer(6);
		explorer.set_category("Health");
		explorer.set_agency("NSF");

		let replacement = vec![
			Record::new()
				.with(Field::Category.key(), "Energy")
				.with(Field::Agency.key(), "NSF"),
		];
		explorer.replace_store(RecordStore::from_records(replacement));

		assert_eq!(explorer.criteria().category, "");
		assert_eq!(explorer.criteria().agency, "NSF");
		assert_eq!(explorer.view(), &[0]);
	}

	#[test]
	fn clear_data_empties_the_session() {
		let mut explorer = explorer(6);
		explorer.set_search("grant");
		explorer.clear_data();
		assert!(explorer.records().is_empty());
		assert!(explorer.view().is_empty());
		assert!(explorer.criteria().is_empty());
		assert_eq!(explorer.total_pages(), 0);
	}

	#[test]
	fn export_reflects_the_current_view() {
		let mut explorer = explorer(6);
		explorer.set_category("Health");
		let csv = explorer.export_csv().unwrap();
		assert_eq!(csv.lines().count(), 3);
		assert!(csv.contains("OPP-003"));

		explorer.set_search("no such grant");
		assert!(matches!(explorer.export_csv(), Err(ExportError::Empty)));
	}

	#[test]
	fn stats_follow_the_view() {
		let mut explorer = explorer(4);
		explorer.set_status("Posted");
		let stats = explorer.stats();
		assert_eq!((stats.shown, stats.total), (2, 4));
		assert_eq!(stats.award_ceiling_sum, 2000.0);
	}
}
