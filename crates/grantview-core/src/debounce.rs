//! Trailing-edge debouncing for rapid input.

use std::time::{Duration, Instant};

/// Quiet period before a search edit is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Holds the latest scheduled value until input has been quiet for `wait`.
///
/// Each [`schedule`](Self::schedule) cancels whatever was pending, so a burst
/// of edits yields exactly one value: the last one. The owner drives time by
/// calling [`poll`](Self::poll) from its event loop.
#[derive(Debug)]
pub struct Debouncer<T> {
	wait: Duration,
	pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
	#[must_use]
	pub fn new(wait: Duration) -> Self {
		Self {
			wait,
			pending: None,
		}
	}

	/// Replace any pending value and restart the quiet period at `now`.
	pub fn schedule(&mut self, value: T, now: Instant) {
		self.pending = Some((now + self.wait, value));
	}

	/// Drop the pending value, returning it if there was one.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|(_, value)| value)
	}

	/// Yield the pending value once its quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some((deadline, _)) if now >= *deadline => self.cancel(),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(deadline, _)| *deadline)
	}

	#[must_use]
	pub fn wait(&self) -> Duration {
		self.wait
	}
}

impl<T> Default for Debouncer<T> {
	fn default() -> Self {
		Self::new(SEARCH_DEBOUNCE)
	}
}
