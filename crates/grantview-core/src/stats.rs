use std::fmt;

use crate::format::{dollars, group_thousands};
use crate::record::{Field, Record};

/// Summary figures for the statistics line above the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
	pub shown: usize,
	pub total: usize,
	pub total_funding: f64,
	pub award_ceiling_sum: f64,
}

impl Stats {
	/// Summarize the records in `view` out of `records`.
	#[must_use]
	pub fn compute(records: &[Record], view: &[usize]) -> Self {
		let (total_funding, award_ceiling_sum) =
			view.iter()
				.map(|&index| &records[index])
				.fold((0.0, 0.0), |(funding, ceiling), record| {
					(
						funding + record.number(Field::EstimatedFunding).unwrap_or(0.0),
						ceiling + record.number(Field::AwardCeiling).unwrap_or(0.0),
					)
				});

		Self {
			shown: view.len(),
			total: records.len(),
			total_funding,
			award_ceiling_sum,
		}
	}

	/// Mean award ceiling over the shown records, counting records without a
	/// numeric ceiling as zero.
	#[must_use]
	pub fn average_award(&self) -> Option<f64> {
		(self.shown > 0 && self.award_ceiling_sum > 0.0)
			.then(|| self.award_ceiling_sum / self.shown as f64)
	}
}

impl fmt::Display for Stats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Showing {} of {} grants",
			group_thousands(self.shown as u64),
			group_thousands(self.total as u64)
		)?;
		if self.total_funding > 0.0 {
			write!(f, " • Total Funding: {}", dollars(self.total_funding))?;
		}
		if let Some(average) = self.average_award() {
			write!(f, " • Avg Max Award: {}", dollars(average))?;
		}
		Ok(())
	}
}
