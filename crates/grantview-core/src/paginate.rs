//! Fixed-size pagination of derived views.

use std::ops::RangeInclusive;

/// Rows per page.
pub const PAGE_SIZE: usize = 20;

/// Page-number buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One page of a view. Ranges are 1-based and inclusive; both are 0 when
/// the page holds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
	pub items: &'a [T],
	pub page_number: usize,
	pub total_pages: usize,
	pub range_start: usize,
	pub range_end: usize,
	pub total_items: usize,
}

impl<T> Page<'_, T> {
	#[must_use]
	pub fn has_previous(&self) -> bool {
		self.page_number > 1
	}

	#[must_use]
	pub fn has_next(&self) -> bool {
		self.page_number < self.total_pages
	}
}

/// Number of pages needed for `count` items; zero items need zero pages.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
	if page_size == 0 {
		return 0;
	}
	count.div_ceil(page_size)
}

/// Slice page `page_number` (1-based) out of `items`.
///
/// Callers validate page numbers before asking; a page past the end is
/// simply empty.
#[must_use]
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> Page<'_, T> {
	let page_number = page_number.max(1);
	let start = (page_number - 1)
		.saturating_mul(page_size)
		.min(items.len());
	let end = start.saturating_add(page_size).min(items.len());
	let slice = &items[start..end];

	let (range_start, range_end) = if slice.is_empty() {
		(0, 0)
	} else {
		(start + 1, end)
	};

	Page {
		items: slice,
		page_number,
		total_pages: total_pages(items.len(), page_size),
		range_start,
		range_end,
		total_items: items.len(),
	}
}

/// Page numbers to offer as buttons: up to [`MAX_VISIBLE_PAGES`] consecutive
/// pages centred on `current`, shifted to stay within `1..=total`.
#[must_use]
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
	let half = MAX_VISIBLE_PAGES / 2;
	let mut start = current.saturating_sub(half).max(1);
	let end = total.min(start + MAX_VISIBLE_PAGES - 1);

	if end + 1 < start + MAX_VISIBLE_PAGES {
		start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
	}

	start..=end
}
