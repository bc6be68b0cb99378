use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Rows shared by every screen.
pub(crate) struct FrameAreas {
	pub title: Rect,
	pub body: Rect,
	pub status: Rect,
}

/// Rows of the table screen.
pub(crate) struct ExplorerAreas {
	pub search: Rect,
	pub filters: Rect,
	pub stats: Rect,
	pub table: Rect,
	pub pagination: Rect,
}

pub(crate) fn frame_areas(area: Rect) -> FrameAreas {
	let [title, body, status] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(area);

	let inset = Margin {
		vertical: 0,
		horizontal: 1,
	};
	FrameAreas {
		title,
		body: body.inner(inset),
		status: status.inner(inset),
	}
}

pub(crate) fn explorer_areas(body: Rect) -> ExplorerAreas {
	let [_, search, filters, stats, table, pagination] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Min(4),
		Constraint::Length(1),
	])
	.areas(body);

	ExplorerAreas {
		search,
		filters,
		stats,
		table,
		pagination,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn table_takes_the_spare_height() {
		let frame = frame_areas(Rect::new(0, 0, 100, 40));
		assert_eq!(frame.body, Rect::new(1, 1, 98, 38));
		assert_eq!(frame.status.y, 39);

		let explorer = explorer_areas(frame.body);
		assert_eq!(explorer.search.y, 2);
		assert_eq!(explorer.stats.y, 4);
		assert_eq!(explorer.table.height, 33);
		assert_eq!(explorer.pagination.y, 38);
	}
}
